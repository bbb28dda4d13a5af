use crate::core::Point;
use crate::shared::PlannerOptions;
use std::time::Duration;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Canvas-Größe setzen (zentriert bzw. skaliert die Position)
    SetCanvasSize { width: f64, height: f64 },
    /// Fahrzeug zum Ziel bewegen (Position setzen, Pfad planen, Wiedergabe starten)
    MoveVehicleTo { target: Point },
    /// Laufende Wiedergabe fortschreiben
    AdvancePlayback { delta: Duration },
    /// Wiedergabe abschließen; ohne Angabe gilt die geplante End-Richtung
    CompletePlayback { achieved_heading: Option<f64> },
    /// Optionen übernehmen
    ApplyOptions { options: PlannerOptions },
}
