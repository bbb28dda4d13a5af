//! Ergebnis der Bahnplanung: geordnete Segmentliste plus End-Richtung.

use super::pose::{Point, Pose};
use super::segment::{ArcSegment, PathSegment, StraightSegment, TurnDirection};
use serde::{Deserialize, Serialize};

/// Geplanter Ein-Bogen-Pfad.
///
/// Leer (keine Segmente) genau dann, wenn Start und Ziel identisch sind.
/// Ansonsten: optionale Anlauf-Gerade, genau ein Bogen, optionale Auslauf-Gerade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedPath {
    /// Ausgangspose des Planungsaufrufs
    pub start: Pose,
    /// Segmente in Fahrreihenfolge
    pub segments: Vec<PathSegment>,
    /// Fahrtrichtung am Pfadende (Startwert für den nächsten Aufruf)
    pub end_heading: f64,
    /// Gewählter Drehsinn; `None` beim leeren Pfad
    pub turn_direction: Option<TurnDirection>,
    /// Ob der Startpunkt wegen Zielpunkt im Wendekreis vorgeschoben wurde
    pub repositioned: bool,
}

impl PlannedPath {
    /// Pfad ohne Bewegung (Start == Ziel).
    pub fn stationary(start: Pose) -> Self {
        Self {
            start,
            segments: Vec::new(),
            end_heading: start.heading,
            turn_direction: None,
            repositioned: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Gesamtlänge aller Segmente.
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(PathSegment::length).sum()
    }

    /// Endpunkt des Pfads (Startposition beim leeren Pfad).
    pub fn end_point(&self) -> Point {
        self.segments
            .last()
            .map_or(self.start.position, PathSegment::end_point)
    }

    /// Pose am Pfadende.
    pub fn end_pose(&self) -> Pose {
        Pose::new(self.end_point(), self.end_heading)
    }

    /// Der (einzige) Bogen des Pfads.
    pub fn arc(&self) -> Option<&ArcSegment> {
        self.segments.iter().find_map(PathSegment::as_arc)
    }

    /// Anlauf-Gerade vor dem Bogen (nur im Versatz-Fall).
    pub fn run_in(&self) -> Option<&StraightSegment> {
        self.segments.first().and_then(PathSegment::as_straight)
    }

    /// Auslauf-Gerade nach dem Bogen (Tangente zum Ziel).
    pub fn run_out(&self) -> Option<&StraightSegment> {
        match self.segments.as_slice() {
            [.., PathSegment::Arc(_), PathSegment::Straight(line)] => Some(line),
            _ => None,
        }
    }

    /// Prüft, ob aufeinanderfolgende Segmente lückenlos aneinander anschließen.
    pub fn is_contiguous(&self, tolerance: f64) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end_point().distance(pair[1].start_point()) <= tolerance)
    }

    /// Gleichmäßig verteilte Punkte entlang des gesamten Pfads (Bogenlänge).
    ///
    /// Erster Punkt ist die Startposition, letzter der Pfad-Endpunkt.
    pub fn sample_positions(&self, max_spacing: f64) -> Vec<Point> {
        let total_length = self.total_length();
        if self.segments.is_empty() || total_length < f64::EPSILON || max_spacing <= 0.0 {
            return vec![self.end_point()];
        }

        let sample_count = (total_length / max_spacing).ceil().max(1.0) as usize;
        let spacing = total_length / sample_count as f64;

        let mut positions = Vec::with_capacity(sample_count + 1);
        positions.push(self.segments[0].start_point());

        let mut segment_iter = self.segments.iter();
        let mut current = segment_iter.next();
        let mut consumed = 0.0;

        for i in 1..sample_count {
            let target_length = i as f64 * spacing;
            while let Some(segment) = current {
                let len = segment.length();
                if target_length <= consumed + len {
                    let fraction = if len > f64::EPSILON {
                        (target_length - consumed) / len
                    } else {
                        0.0
                    };
                    positions.push(segment.point_at(fraction));
                    break;
                }
                consumed += len;
                current = segment_iter.next();
            }
        }

        positions.push(self.end_point());
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Viertelkreis rechts herum, dann 100 Einheiten geradeaus nach rechts.
    fn sample_path() -> PlannedPath {
        let arc = ArcSegment {
            center: Point::new(200.0, 0.0),
            radius: 200.0,
            start_angle: PI,
            sweep_angle: FRAC_PI_2,
            direction: TurnDirection::Clockwise,
        };
        let run_out = StraightSegment::new(arc.end_point(), Point::new(300.0, -200.0));
        PlannedPath {
            start: Pose::new(Point::ZERO, 0.0),
            segments: vec![PathSegment::Arc(arc), PathSegment::Straight(run_out)],
            end_heading: FRAC_PI_2,
            turn_direction: Some(TurnDirection::Clockwise),
            repositioned: false,
        }
    }

    #[test]
    fn test_stationary_path_is_empty() {
        let start = Pose::new(Point::new(5.0, 5.0), 1.0);
        let path = PlannedPath::stationary(start);
        assert!(path.is_empty());
        assert_eq!(path.end_point(), start.position);
        assert_eq!(path.end_heading, 1.0);
        assert!(path.arc().is_none());
        assert_eq!(path.sample_positions(1.0), vec![start.position]);
    }

    #[test]
    fn test_accessors() {
        let path = sample_path();
        assert!(path.arc().is_some());
        assert!(path.run_in().is_none());
        assert!(path.run_out().is_some());
        assert!(path.is_contiguous(1e-6));
        assert_relative_eq!(path.total_length(), 100.0 * PI + 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sample_positions_spacing() {
        let path = sample_path();
        let positions = path.sample_positions(10.0);

        assert!(positions.len() > 40);
        assert!(positions[0].distance(Point::ZERO) < 1e-9);
        assert!(positions.last().unwrap().distance(Point::new(300.0, -200.0)) < 1e-9);
        for pair in positions.windows(2) {
            // Sehnen sind nie länger als der Bogenabstand
            assert!(pair[0].distance(pair[1]) <= 10.0 + 1e-9);
        }
    }
}
