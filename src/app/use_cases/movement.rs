//! Use-Case: Fahrzeug zu neuem Ziel bewegen und Wiedergabe fortschreiben.

use crate::app::state::PlaybackState;
use crate::app::AppState;
use crate::core::{MotionTimeline, Point, Pose, TurnPlanner};
use std::time::Duration;

/// Setzt das neue Ziel, plant den Pfad von der alten Position und startet die Wiedergabe.
///
/// Die erste Position wird ohne Fahrt übernommen. Schlägt die Planung fehl,
/// bleibt das Fahrzeug stehen und der Fehler geht an den Aufrufer.
pub fn move_vehicle_to(state: &mut AppState, target: Point) -> anyhow::Result<()> {
    let Some(change) = state.store.set_position(target) else {
        log::debug!("Ziel {} entspricht aktueller Position", target);
        return Ok(());
    };

    let Some(previous) = change.previous else {
        log::info!("Fahrzeug platziert bei {}", change.current);
        return Ok(());
    };

    let start = Pose::new(previous, state.heading);
    let planned = TurnPlanner::new(state.options.turn_radius)
        .and_then(|planner| planner.plan(start, change.current));

    let path = match planned {
        Ok(path) => path,
        Err(e) => {
            state.store.set_position(previous);
            log::warn!("Bahnplanung fehlgeschlagen, Bewegung übersprungen: {}", e);
            return Err(e.into());
        }
    };

    let timeline = MotionTimeline::from_path(&path, state.options.segment_duration());
    log::info!(
        "Fahrt {} → {}: {} Segmente, {:.1} Einheiten, {} ms",
        previous,
        change.current,
        path.segments.len(),
        path.total_length(),
        timeline.total_duration().as_millis()
    );

    state.playback = Some(PlaybackState::new(timeline));
    state.last_path = Some(path);
    Ok(())
}

/// Schreibt die laufende Wiedergabe fort und schließt sie am Ende ab.
pub fn advance_playback(state: &mut AppState, delta: Duration) {
    let Some(playback) = state.playback.as_mut() else {
        return;
    };

    playback.advance(delta);
    if playback.is_finished() {
        complete_playback(state, None);
    }
}

/// Beendet die Wiedergabe und merkt sich die erreichte Fahrtrichtung.
///
/// Ohne explizite Angabe gilt die End-Richtung der Timeline.
pub fn complete_playback(state: &mut AppState, achieved_heading: Option<f64>) {
    let Some(playback) = state.playback.take() else {
        return;
    };

    state.heading = achieved_heading.unwrap_or_else(|| playback.timeline.end_pose().heading);
    log::debug!("Wiedergabe beendet, Fahrtrichtung {:.4} rad", state.heading);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn placed_state() -> AppState {
        let mut state = AppState::new();
        state.store.set_dimensions(1280.0, 720.0);
        state
    }

    #[test]
    fn first_target_without_position_only_places() {
        let mut state = AppState::new();

        move_vehicle_to(&mut state, Point::new(10.0, 10.0)).unwrap();

        assert_eq!(state.store.position(), Some(Point::new(10.0, 10.0)));
        assert!(state.playback.is_none());
        assert!(state.last_path.is_none());
    }

    #[test]
    fn move_starts_playback_with_planned_path() {
        let mut state = placed_state();

        move_vehicle_to(&mut state, Point::new(1000.0, 100.0)).unwrap();

        let path = state.last_path.as_ref().expect("Pfad erwartet");
        assert_eq!(path.start.position, Point::new(640.0, 360.0));
        assert!(state.playback.is_some());
    }

    #[test]
    fn advance_until_finished_stores_end_heading() {
        let mut state = placed_state();
        move_vehicle_to(&mut state, Point::new(1000.0, 100.0)).unwrap();
        let expected = state.last_path.as_ref().unwrap().end_heading;

        for _ in 0..200 {
            advance_playback(&mut state, Duration::from_millis(16));
        }

        assert!(state.playback.is_none());
        assert_abs_diff_eq!(state.heading, expected, epsilon = 1e-12);
    }

    #[test]
    fn explicit_heading_overrides_planned_heading() {
        let mut state = placed_state();
        move_vehicle_to(&mut state, Point::new(1000.0, 100.0)).unwrap();

        complete_playback(&mut state, Some(0.25));

        assert!(state.playback.is_none());
        assert_eq!(state.heading, 0.25);
    }

    #[test]
    fn invalid_radius_keeps_previous_position() {
        let mut state = placed_state();
        state.options.turn_radius = -1.0;

        let result = move_vehicle_to(&mut state, Point::new(1000.0, 100.0));

        assert!(result.is_err());
        assert_eq!(state.store.position(), Some(Point::new(640.0, 360.0)));
        assert!(state.playback.is_none());
    }
}
