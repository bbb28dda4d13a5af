//! Wendekreis-Konstruktion für einen Startpunkt und die Tangente zum Ziel.

use crate::core::angle::{normalize, normalize_bearing};
use crate::core::pose::Point;
use crate::core::segment::{ArcSegment, TurnDirection};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Bogenwinkel so nah an einer Vollumdrehung gelten als 0 (Ziel exakt voraus).
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Zwischenergebnisse der Wendekreis-Konstruktion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnGeometry {
    /// Drehsinn in Richtung Ziel
    pub direction: TurnDirection,
    /// Startpunkt des Bogens
    pub start: Point,
    /// Mittelpunkt des Wendekreises
    pub center: Point,
    pub radius: f64,
    /// Vektor vom Mittelpunkt zum Bogen-Startpunkt
    pub radius_vector: DVec2,
    /// Abstand Mittelpunkt → Ziel
    pub distance: f64,
    /// `atan2`-Winkel Mittelpunkt → Ziel
    pub to_target_angle: f64,
}

impl TurnGeometry {
    /// Konstruiert den Wendekreis ab `start` mit Fahrtrichtung `heading`.
    pub fn compute(start: Point, heading: f64, target: Point, radius: f64) -> Self {
        let to_target = target - start;
        let bearing_difference =
            normalize_bearing(to_target.y.atan2(to_target.x) + FRAC_PI_2 - heading);
        let direction = TurnDirection::from_bearing_difference(bearing_difference);

        let center_angle = heading + direction.factor() * FRAC_PI_2;
        let center = start + radius * DVec2::new(center_angle.sin(), -center_angle.cos());

        let target_vector = target - center;

        Self {
            direction,
            start,
            center,
            radius,
            radius_vector: start - center,
            distance: target_vector.length(),
            to_target_angle: target_vector.y.atan2(target_vector.x),
        }
    }

    /// Ziel liegt im Wendekreis (inkl. Ziel == Mittelpunkt): keine Tangente möglich.
    pub fn is_degenerate(&self) -> bool {
        self.distance < self.radius
    }

    /// `atan2`-Winkel des Bogen-Startpunkts um den Mittelpunkt.
    pub fn start_angle(&self) -> f64 {
        self.radius_vector.y.atan2(self.radius_vector.x)
    }

    /// Vorzeichenbehafteter Bogenwinkel bis zum Tangentenpunkt.
    ///
    /// Liegt im Band `[π(d−1), π(d+1))`, also `[0, 2π)` rechts herum und
    /// `[−2π, 0)` links herum. Setzt `distance >= radius` voraus.
    pub fn sweep_angle(&self) -> f64 {
        let d = self.direction.factor();
        let extra = d * (self.radius / self.distance).min(1.0).acos();
        let sweep = normalize(
            self.to_target_angle - extra - self.start_angle(),
            PI * (d - 1.0),
            PI * (d + 1.0),
        );

        if sweep.abs() > TAU - FULL_TURN_EPSILON {
            0.0
        } else {
            sweep
        }
    }

    /// Bogen vom Startpunkt bis zum Tangentenpunkt.
    pub fn arc(&self) -> ArcSegment {
        ArcSegment {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle(),
            sweep_angle: self.sweep_angle(),
            direction: self.direction,
        }
    }
}
