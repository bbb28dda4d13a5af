//! Fahrzeug-Pose: Position und Fahrtrichtung in Bildschirm-Koordinaten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Punkt in der Ebene (Bildschirm-Koordinaten: +X rechts, +Y unten).
pub type Point = DVec2;

/// Einheitsvektor in Fahrtrichtung.
///
/// Richtung 0 zeigt nach oben (−Y) und wächst im Uhrzeigersinn.
pub fn forward(heading: f64) -> DVec2 {
    DVec2::new(heading.sin(), -heading.cos())
}

/// Position plus Fahrtrichtung (Radiant).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in Welt-/Bildschirm-Koordinaten
    pub position: Point,
    /// Fahrtrichtung in Radiant (0 = oben, im Uhrzeigersinn wachsend)
    pub heading: f64,
}

impl Pose {
    /// Erstellt eine neue Pose.
    pub fn new(position: Point, heading: f64) -> Self {
        Self { position, heading }
    }

    /// Einheitsvektor in Fahrtrichtung dieser Pose.
    pub fn forward(&self) -> DVec2 {
        forward(self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_forward_convention() {
        let up = forward(0.0);
        assert_abs_diff_eq!(up.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(up.y, -1.0, epsilon = 1e-12);

        // Viertelkreis im Uhrzeigersinn → nach rechts
        let right = forward(FRAC_PI_2);
        assert_abs_diff_eq!(right.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(right.y, 0.0, epsilon = 1e-12);

        let down = Pose::new(Point::ZERO, PI).forward();
        assert_abs_diff_eq!(down.y, 1.0, epsilon = 1e-12);
    }
}
