use super::PlaybackState;
use crate::app::CommandLog;
use crate::core::{PlannedPath, Pose, PositionStore};
use crate::shared::PlannerOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Zielposition und Canvas-Größe
    pub store: PositionStore,
    /// Zuletzt erreichte Fahrtrichtung (Startwert der nächsten Planung)
    pub heading: f64,
    /// Laufende Wiedergabe (None = Fahrzeug steht)
    pub playback: Option<PlaybackState>,
    /// Zuletzt geplanter Pfad
    pub last_path: Option<PlannedPath>,
    /// Laufzeit-Optionen (Wenderadius, Segmentdauer, Canvas)
    pub options: PlannerOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            store: PositionStore::new(),
            heading: 0.0,
            playback: None,
            last_path: None,
            options: PlannerOptions::default(),
            command_log: CommandLog::new(),
        }
    }

    /// Gibt zurück, ob gerade eine Fahrt wiedergegeben wird.
    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    /// Aktuelle Fahrzeug-Pose: während der Fahrt interpoliert, sonst die Ruhelage.
    pub fn vehicle_pose(&self) -> Option<Pose> {
        if let Some(playback) = &self.playback {
            return Some(playback.current_pose());
        }
        self.store
            .position()
            .map(|position| Pose::new(position, self.heading))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
