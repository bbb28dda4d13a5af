//! Geometrische Bahnsegmente: Gerade und Kreisbogen.

use super::angle::normalize_heading;
use super::pose::Point;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Drehsinn einer Kurve in Bildschirm-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnDirection {
    /// Rechtskurve, positiver Bogenwinkel (d = +1)
    Clockwise,
    /// Linkskurve, negativer Bogenwinkel (d = −1)
    CounterClockwise,
}

impl TurnDirection {
    /// Wählt den Drehsinn aus einer normalisierten Peilungsdifferenz.
    ///
    /// Eine Differenz von exakt 0 (Ziel genau voraus) ergibt `Clockwise`.
    pub fn from_bearing_difference(diff: f64) -> Self {
        if diff < 0.0 {
            Self::CounterClockwise
        } else {
            Self::Clockwise
        }
    }

    /// Vorzeichenfaktor d ∈ {−1, +1}.
    pub fn factor(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Gerades Teilstück.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StraightSegment {
    pub from: Point,
    pub to: Point,
}

impl StraightSegment {
    /// Erstellt ein gerades Teilstück.
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// Fahrtrichtung entlang der Geraden; `None` bei Länge 0.
    pub fn heading(&self) -> Option<f64> {
        let delta = self.to - self.from;
        if delta.length_squared() == 0.0 {
            return None;
        }
        Some(delta.x.atan2(-delta.y))
    }

    /// Punkt bei Anteil `fraction` ∈ [0, 1].
    pub fn point_at(&self, fraction: f64) -> Point {
        self.from.lerp(self.to, fraction)
    }
}

/// Kreisbogen um `center`.
///
/// Winkel sind `atan2`-Winkel um den Mittelpunkt (0 = +X, positiv Richtung +Y,
/// also im Uhrzeigersinn auf dem Bildschirm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    /// Vorzeichenbehafteter Bogenwinkel, Betrag < 2π
    pub sweep_angle: f64,
    pub direction: TurnDirection,
}

impl ArcSegment {
    /// Winkel am Bogenende.
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Punkt auf dem Kreis beim Winkel `angle`.
    pub fn point_at_angle(&self, angle: f64) -> Point {
        self.center + self.radius * DVec2::new(angle.cos(), angle.sin())
    }

    pub fn start_point(&self) -> Point {
        self.point_at_angle(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at_angle(self.end_angle())
    }

    /// Bogenlänge `R·|sweep|`.
    pub fn length(&self) -> f64 {
        self.radius * self.sweep_angle.abs()
    }

    /// Punkt bei Anteil `fraction` ∈ [0, 1] des Bogenwinkels.
    pub fn point_at(&self, fraction: f64) -> Point {
        self.point_at_angle(self.start_angle + fraction * self.sweep_angle)
    }

    /// Tangentiale Fahrtrichtung beim Kreiswinkel `angle`.
    pub fn heading_at_angle(&self, angle: f64) -> f64 {
        normalize_heading(angle + FRAC_PI_2 + self.direction.factor() * FRAC_PI_2)
    }

    /// Fahrtrichtung am Bogenende.
    pub fn exit_heading(&self) -> f64 {
        self.heading_at_angle(self.end_angle())
    }
}

/// Ein Teilstück eines geplanten Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSegment {
    Straight(StraightSegment),
    Arc(ArcSegment),
}

impl PathSegment {
    pub fn start_point(&self) -> Point {
        match self {
            Self::Straight(line) => line.from,
            Self::Arc(arc) => arc.start_point(),
        }
    }

    pub fn end_point(&self) -> Point {
        match self {
            Self::Straight(line) => line.to,
            Self::Arc(arc) => arc.end_point(),
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Self::Straight(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    /// Punkt bei Anteil `fraction` ∈ [0, 1] des Segments.
    pub fn point_at(&self, fraction: f64) -> Point {
        match self {
            Self::Straight(line) => line.point_at(fraction),
            Self::Arc(arc) => arc.point_at(fraction),
        }
    }

    /// Fahrtrichtung bei Anteil `fraction`. `None` für eine Gerade der Länge 0.
    pub fn heading_at(&self, fraction: f64) -> Option<f64> {
        match self {
            Self::Straight(line) => line.heading(),
            Self::Arc(arc) => {
                Some(arc.heading_at_angle(arc.start_angle + fraction * arc.sweep_angle))
            }
        }
    }

    /// Gibt den Bogen zurück, falls das Segment einer ist.
    pub fn as_arc(&self) -> Option<&ArcSegment> {
        match self {
            Self::Arc(arc) => Some(arc),
            Self::Straight(_) => None,
        }
    }

    /// Gibt die Gerade zurück, falls das Segment eine ist.
    pub fn as_straight(&self) -> Option<&StraightSegment> {
        match self {
            Self::Straight(line) => Some(line),
            Self::Arc(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    fn quarter_arc(direction: TurnDirection) -> ArcSegment {
        ArcSegment {
            center: Point::new(200.0, 0.0),
            radius: 200.0,
            start_angle: PI,
            sweep_angle: direction.factor() * FRAC_PI_2,
            direction,
        }
    }

    #[test]
    fn test_turn_direction_zero_is_clockwise() {
        assert_eq!(TurnDirection::from_bearing_difference(0.0), TurnDirection::Clockwise);
        assert_eq!(
            TurnDirection::from_bearing_difference(-1e-12),
            TurnDirection::CounterClockwise
        );
    }

    #[test]
    fn test_straight_heading_convention() {
        let up = StraightSegment::new(Point::ZERO, Point::new(0.0, -10.0));
        assert_abs_diff_eq!(up.heading().unwrap(), 0.0, epsilon = 1e-12);

        let right = StraightSegment::new(Point::ZERO, Point::new(10.0, 0.0));
        assert_abs_diff_eq!(right.heading().unwrap(), FRAC_PI_2, epsilon = 1e-12);

        let empty = StraightSegment::new(Point::ONE, Point::ONE);
        assert!(empty.heading().is_none());
    }

    #[test]
    fn test_arc_endpoints_and_length() {
        let arc = quarter_arc(TurnDirection::Clockwise);
        let start = arc.start_point();
        assert_abs_diff_eq!(start.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(start.y, 0.0, epsilon = 1e-9);

        // Rechtskurve aus Fahrtrichtung "oben" endet rechts oben
        let end = arc.end_point();
        assert_abs_diff_eq!(end.x, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, -200.0, epsilon = 1e-9);

        assert_relative_eq!(arc.length(), 100.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn test_arc_heading_matches_tangent() {
        let arc = quarter_arc(TurnDirection::Clockwise);
        // Start: Fahrtrichtung oben (0), Ende: nach rechts (π/2)
        assert_abs_diff_eq!(arc.heading_at_angle(arc.start_angle), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.exit_heading(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_counter_clockwise_arc_heading() {
        let arc = ArcSegment {
            center: Point::new(-200.0, 0.0),
            radius: 200.0,
            start_angle: 0.0,
            sweep_angle: -FRAC_PI_2,
            direction: TurnDirection::CounterClockwise,
        };
        assert_abs_diff_eq!(arc.heading_at_angle(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.exit_heading(), -FRAC_PI_2, epsilon = 1e-12);
        let end = arc.end_point();
        assert_abs_diff_eq!(end.x, -200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, -200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_arc_points_stay_on_radius() {
        let arc = quarter_arc(TurnDirection::Clockwise);
        for i in 0..=10 {
            let p = arc.point_at(i as f64 / 10.0);
            assert_relative_eq!(p.distance(arc.center), arc.radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_segment_heading_at_fraction() {
        let arc = PathSegment::Arc(quarter_arc(TurnDirection::Clockwise));
        assert_abs_diff_eq!(arc.heading_at(0.5).unwrap(), FRAC_PI_2 / 2.0, epsilon = 1e-12);

        let line = PathSegment::Straight(StraightSegment::new(Point::ZERO, Point::new(0.0, 5.0)));
        assert_abs_diff_eq!(line.heading_at(0.3).unwrap().abs(), PI, epsilon = 1e-12);
    }
}
