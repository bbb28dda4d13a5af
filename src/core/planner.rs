//! Ein-Bogen-Bahnplanung mit festem Wenderadius.
//!
//! Reine Funktion ohne Zustand: Aus Startpose und Zielpunkt entsteht ein Pfad
//! aus (optionaler) Anlauf-Geraden, einem Kreisbogen und der Tangente zum Ziel.
//!
//! Liegt das Ziel im Wendekreis, existiert keine Tangente. Dann wird der
//! Startpunkt genau einmal um `2R` in Fahrtrichtung vorgeschoben. `2R` ist
//! immer ausreichend, aber nicht minimal; ein fallweise engerer Versatz ist
//! bewusst nicht umgesetzt.

mod turn_geometry;


pub use turn_geometry::TurnGeometry;

use super::pose::{forward, Point, Pose};
use super::segment::{PathSegment, StraightSegment};
use super::PlannedPath;

/// Versatz im Degenerationsfall, als Vielfaches des Wenderadius.
pub const REPOSITION_RADIUS_FACTOR: f64 = 2.0;
/// Relative Toleranz, unter der ein Ziel nach dem Versatz noch als "im Kreis" gilt.
const DEGENERACY_TOLERANCE: f64 = 1e-9;
/// Auslauf-Geraden kürzer als `MIN_RUN_OUT_FACTOR · R` entfallen.
const MIN_RUN_OUT_FACTOR: f64 = 1e-9;

/// Fehler bei der Bahnplanung.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Nicht-positiver Radius oder nicht-endliche Koordinate/Richtung
    #[error("ungültiger Parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// Ziel liegt auch nach dem einmaligen Versatz noch im Wendekreis
    #[error(
        "Ziel {target} liegt auch nach Versatz im Wendekreis (Abstand {distance}, Radius {radius})"
    )]
    UnresolvedDegeneracy {
        target: Point,
        distance: f64,
        radius: f64,
    },
}

/// Planer mit festem Wenderadius (prozessweit konstant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnPlanner {
    turn_radius: f64,
}

impl TurnPlanner {
    /// Erstellt einen Planer; der Radius muss endlich und positiv sein.
    pub fn new(turn_radius: f64) -> Result<Self, PlanError> {
        validate_radius(turn_radius)?;
        Ok(Self { turn_radius })
    }

    pub fn turn_radius(&self) -> f64 {
        self.turn_radius
    }

    /// Plant von `start` zum Ziel `target`.
    pub fn plan(&self, start: Pose, target: Point) -> Result<PlannedPath, PlanError> {
        plan(start.position, start.heading, target, self.turn_radius)
    }
}

/// Berechnet den Ein-Bogen-Pfad von `(last_position, last_heading)` nach `target`.
///
/// Bei `last_position == target` entsteht ein leerer Pfad ohne Segmente,
/// dessen End-Richtung der Start-Richtung entspricht.
pub fn plan(
    last_position: Point,
    last_heading: f64,
    target: Point,
    turn_radius: f64,
) -> Result<PlannedPath, PlanError> {
    validate_radius(turn_radius)?;
    validate_finite("last_position.x", last_position.x)?;
    validate_finite("last_position.y", last_position.y)?;
    validate_finite("last_heading", last_heading)?;
    validate_finite("target.x", target.x)?;
    validate_finite("target.y", target.y)?;

    let start = Pose::new(last_position, last_heading);
    if last_position == target {
        log::debug!("Ziel entspricht Startposition, keine Bewegung");
        return Ok(PlannedPath::stationary(start));
    }

    let mut geometry = TurnGeometry::compute(last_position, last_heading, target, turn_radius);
    let mut run_in = None;

    // Höchstens ein Versatz-Durchlauf
    if geometry.is_degenerate() {
        let shifted = last_position
            + REPOSITION_RADIUS_FACTOR * turn_radius * forward(last_heading);
        log::debug!(
            "Ziel im Wendekreis (Abstand {:.3} < {:.3}), Start vorgeschoben auf {}",
            geometry.distance,
            turn_radius,
            shifted
        );

        geometry = TurnGeometry::compute(shifted, last_heading, target, turn_radius);
        if geometry.distance < turn_radius * (1.0 - DEGENERACY_TOLERANCE) {
            return Err(PlanError::UnresolvedDegeneracy {
                target,
                distance: geometry.distance,
                radius: turn_radius,
            });
        }
        run_in = Some(StraightSegment::new(last_position, shifted));
    }

    let arc = geometry.arc();
    let mut segments = Vec::with_capacity(3);
    if let Some(line) = run_in {
        segments.push(PathSegment::Straight(line));
    }
    segments.push(PathSegment::Arc(arc));

    let run_out = StraightSegment::new(arc.end_point(), target);
    if run_out.length() >= MIN_RUN_OUT_FACTOR * turn_radius {
        segments.push(PathSegment::Straight(run_out));
    }

    let path = PlannedPath {
        start,
        segments,
        end_heading: arc.exit_heading(),
        turn_direction: Some(geometry.direction),
        repositioned: run_in.is_some(),
    };

    log::debug!(
        "Pfad geplant: {} Segmente, {:?}, Bogen {:.4} rad, Länge {:.3}",
        path.segments.len(),
        geometry.direction,
        arc.sweep_angle,
        path.total_length()
    );

    Ok(path)
}

fn validate_radius(turn_radius: f64) -> Result<(), PlanError> {
    if turn_radius.is_finite() && turn_radius > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidParameter {
            name: "turn_radius",
            value: turn_radius,
        })
    }
}

fn validate_finite(name: &'static str, value: f64) -> Result<(), PlanError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlanError::InvalidParameter { name, value })
    }
}
