//! Handler für Canvas-Layout und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::PlannerOptions;

/// Aktualisiert die Canvas-Größe im State.
pub fn set_canvas_size(state: &mut AppState, width: f64, height: f64) {
    use_cases::canvas::resize(state, width, height);
}

/// Übernimmt neue Optionen und propagiert Validierungsfehler an den Aufrufer.
pub fn apply_options(state: &mut AppState, options: PlannerOptions) -> anyhow::Result<()> {
    use_cases::canvas::apply_options(state, options)
}
