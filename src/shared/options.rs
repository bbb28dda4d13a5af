//! Zentrale Konfiguration für Planer und Wiedergabe.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Fahrzeug ────────────────────────────────────────────────────────

/// Minimaler Wenderadius in Canvas-Einheiten.
pub const TURN_RADIUS: f64 = 200.0;

// ── Wiedergabe ──────────────────────────────────────────────────────

/// Dauer eines einzelnen Pfadsegments in Millisekunden.
pub const SEGMENT_DURATION_MS: u64 = 500;
/// Zeitschritt der CLI-Wiedergabe in Millisekunden (~60 Hz).
pub const PLAYBACK_TICK_MS: u64 = 16;

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Canvas-Breite.
pub const CANVAS_WIDTH: f64 = 1280.0;
/// Standard-Canvas-Höhe.
pub const CANVAS_HEIGHT: f64 = 720.0;

// ── Export ──────────────────────────────────────────────────────────

/// Maximaler Punktabstand der exportierten Polylinie.
pub const SAMPLE_SPACING: f64 = 10.0;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `turn_path_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerOptions {
    /// Wenderadius des Fahrzeugs
    pub turn_radius: f64,
    /// Feste Dauer pro Segment (ms)
    pub segment_duration_ms: u64,
    /// Zeitschritt der Wiedergabe (ms)
    #[serde(default = "default_playback_tick_ms")]
    pub playback_tick_ms: u64,
    /// Canvas-Breite
    pub canvas_width: f64,
    /// Canvas-Höhe
    pub canvas_height: f64,
    /// Punktabstand für die Polylinien-Ausgabe
    #[serde(default = "default_sample_spacing")]
    pub sample_spacing: f64,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            turn_radius: TURN_RADIUS,
            segment_duration_ms: SEGMENT_DURATION_MS,
            playback_tick_ms: PLAYBACK_TICK_MS,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            sample_spacing: SAMPLE_SPACING,
        }
    }
}

/// Serde-Default für `playback_tick_ms` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_playback_tick_ms() -> u64 {
    PLAYBACK_TICK_MS
}

/// Serde-Default für `sample_spacing`.
fn default_sample_spacing() -> f64 {
    SAMPLE_SPACING
}

impl PlannerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("turn_path_planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("turn_path_planner.toml")
    }

    pub fn segment_duration(&self) -> Duration {
        Duration::from_millis(self.segment_duration_ms)
    }

    pub fn playback_tick(&self) -> Duration {
        Duration::from_millis(self.playback_tick_ms)
    }
}
