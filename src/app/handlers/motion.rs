//! Handler für Zielwahl und Wiedergabe.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point;
use std::time::Duration;

/// Setzt ein neues Ziel und startet die geplante Fahrt.
pub fn move_vehicle_to(state: &mut AppState, target: Point) -> anyhow::Result<()> {
    use_cases::movement::move_vehicle_to(state, target)
}

/// Schreibt die laufende Wiedergabe fort.
pub fn advance_playback(state: &mut AppState, delta: Duration) {
    use_cases::movement::advance_playback(state, delta);
}

/// Beendet die Wiedergabe und übernimmt die erreichte Richtung.
pub fn complete_playback(state: &mut AppState, achieved_heading: Option<f64>) {
    use_cases::movement::complete_playback(state, achieved_heading);
}
