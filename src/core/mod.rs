//! Core-Domänentypen: Geometrie, Bahnplanung, Positionszustand, Timeline.

pub mod angle;
pub mod motion;
pub mod path;
/// Ein-Bogen-Bahnplanung (reine Funktion, kein Zustand)
///
/// - `plan`: Startpose + Ziel + Wenderadius → `PlannedPath`
/// - `TurnGeometry`: Wendekreis-Konstruktion für einen Startpunkt
/// - `PlanError`: ungültige Parameter oder unaufgelöste Degeneration
pub mod planner;
pub mod pose;
pub mod position_store;
pub mod segment;

pub use angle::{normalize, normalize_bearing, normalize_heading};
pub use motion::{MotionTimeline, TimedSegment};
pub use path::PlannedPath;
pub use planner::{plan, PlanError, TurnGeometry, TurnPlanner};
pub use pose::{forward, Point, Pose};
pub use position_store::{PositionChange, PositionStore};
pub use segment::{ArcSegment, PathSegment, StraightSegment, TurnDirection};
