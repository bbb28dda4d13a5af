//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `app` und der Binary
//! gemeinsam genutzt werden.

pub mod options;

pub use options::PlannerOptions;
pub use options::{SEGMENT_DURATION_MS, TURN_RADIUS};
