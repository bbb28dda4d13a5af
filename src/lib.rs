//! Turn-Path-Planner Library.
//! Ein-Bogen-Bahnplanung mit festem Wenderadius, als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, PlaybackState};
pub use crate::core::{
    plan, ArcSegment, MotionTimeline, PathSegment, PlanError, PlannedPath, Point, Pose,
    PositionStore, StraightSegment, TurnDirection, TurnGeometry, TurnPlanner,
};
pub use shared::PlannerOptions;
