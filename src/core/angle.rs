//! Winkel-Normalisierung für Richtungswahl und Bogen-Banding.

use std::f64::consts::PI;

/// Reduziert `angle` in das halboffene Intervall `[low, high)`.
///
/// Werte, die bereits im Intervall liegen, werden unverändert zurückgegeben.
/// Alles andere wird mit einer einzigen `rem_euclid`-Reduktion abgebildet,
/// damit auch Winkel weit außerhalb des Bandes in O(1) landen.
pub fn normalize(angle: f64, low: f64, high: f64) -> f64 {
    debug_assert!(high > low, "leeres Winkelband [{low}, {high})");
    if (low..high).contains(&angle) {
        return angle;
    }

    let reduced = low + (angle - low).rem_euclid(high - low);
    // rem_euclid kann bei winzigen negativen Resten exakt die Bandbreite liefern
    if reduced >= high {
        low
    } else {
        reduced
    }
}

/// Normalisiert eine Fahrtrichtung auf `[-π, π)`.
pub fn normalize_heading(angle: f64) -> f64 {
    normalize(angle, -PI, PI)
}

/// Normalisiert eine Peilungsdifferenz auf `(-π, π]`.
///
/// Ein Ziel genau hinter dem Fahrzeug (Differenz π) bleibt positiv.
pub fn normalize_bearing(angle: f64) -> f64 {
    -normalize(-angle, -PI, PI)
}
