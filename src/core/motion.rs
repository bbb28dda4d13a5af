//! Zeitliche Abfolge eines geplanten Pfads für die Wiedergabe.
//!
//! Segmente laufen nacheinander in Pfadreihenfolge, jedes mit derselben festen
//! Dauer und linearer Interpolation. Die Fahrtrichtung dreht nur während des
//! Bogens, auf Geraden bleibt sie konstant.

use super::angle::normalize_heading;
use super::path::PlannedPath;
use super::pose::Pose;
use super::segment::PathSegment;
use std::time::Duration;

/// Ein Segment mit Zeitfenster und Richtungsverlauf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedSegment {
    pub segment: PathSegment,
    /// Startzeit relativ zum Timeline-Beginn
    pub offset: Duration,
    pub duration: Duration,
    /// Fahrtrichtung am Segmentanfang (nicht normalisiert)
    pub start_heading: f64,
    /// Fahrtrichtung am Segmentende (nicht normalisiert)
    pub end_heading: f64,
}

impl TimedSegment {
    fn end(&self) -> Duration {
        self.offset.saturating_add(self.duration)
    }

    fn pose_at_fraction(&self, fraction: f64) -> Pose {
        let heading = self.start_heading + (self.end_heading - self.start_heading) * fraction;
        Pose::new(self.segment.point_at(fraction), normalize_heading(heading))
    }
}

/// Abspielbare Timeline eines `PlannedPath`.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionTimeline {
    start: Pose,
    end: Pose,
    entries: Vec<TimedSegment>,
}

impl MotionTimeline {
    /// Baut die Timeline mit fester Dauer pro Segment.
    pub fn from_path(path: &PlannedPath, segment_duration: Duration) -> Self {
        let mut entries = Vec::with_capacity(path.segments.len());
        let mut offset = Duration::ZERO;
        let mut heading = path.start.heading;

        for segment in &path.segments {
            let start_heading = heading;
            if let PathSegment::Arc(arc) = segment {
                heading += arc.sweep_angle;
            }
            entries.push(TimedSegment {
                segment: *segment,
                offset,
                duration: segment_duration,
                start_heading,
                end_heading: heading,
            });
            offset = offset.saturating_add(segment_duration);
        }

        Self {
            start: path.start,
            end: path.end_pose(),
            entries,
        }
    }

    /// Pose am Ende der Wiedergabe.
    pub fn end_pose(&self) -> Pose {
        self.end
    }

    pub fn entries(&self) -> &[TimedSegment] {
        &self.entries
    }

    /// Gesamtdauer aller Segmente.
    pub fn total_duration(&self) -> Duration {
        self.entries.last().map_or(Duration::ZERO, TimedSegment::end)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }

    /// Pose zum Zeitpunkt `elapsed`; nach dem Ende die End-Pose.
    pub fn sample(&self, elapsed: Duration) -> Pose {
        if self.entries.is_empty() {
            return self.start;
        }

        let Some(entry) = self
            .entries
            .iter()
            .find(|entry| elapsed < entry.end() && !entry.duration.is_zero())
        else {
            return self.end;
        };

        if elapsed <= entry.offset {
            return entry.pose_at_fraction(0.0);
        }
        let fraction = (elapsed - entry.offset).as_secs_f64() / entry.duration.as_secs_f64();
        entry.pose_at_fraction(fraction.clamp(0.0, 1.0))
    }
}
