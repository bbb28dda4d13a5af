use crate::core::Point;
use crate::shared::PlannerOptions;
use std::time::Duration;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Eingabequelle/Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Canvas-Größe hat sich geändert (Layout)
    CanvasResized { width: f64, height: f64 },
    /// Neuer Zielpunkt per Zeiger/Touch
    TargetRequested { target: Point },
    /// Wiedergabe-Zeit ist fortgeschritten
    PlaybackAdvanced { delta: Duration },
    /// Externer Player meldet das Ende mit tatsächlich erreichter Richtung
    PlaybackFinished { achieved_heading: f64 },
    /// Neue Laufzeit-Optionen übernehmen
    OptionsChanged { options: PlannerOptions },
}
