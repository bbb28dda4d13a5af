use crate::core::{MotionTimeline, Pose};
use std::time::Duration;

/// Fortschritt einer laufenden Wiedergabe.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    /// Timeline des aktuell gefahrenen Pfads
    pub timeline: MotionTimeline,
    /// Bisher abgespielte Zeit
    pub elapsed: Duration,
}

impl PlaybackState {
    /// Startet eine Wiedergabe bei Zeit 0.
    pub fn new(timeline: MotionTimeline) -> Self {
        Self {
            timeline,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    pub fn is_finished(&self) -> bool {
        self.timeline.is_finished(self.elapsed)
    }

    /// Interpolierte Pose zum aktuellen Zeitpunkt.
    pub fn current_pose(&self) -> Pose {
        self.timeline.sample(self.elapsed)
    }
}
