//! Mapping von Eingabe-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasResized { width, height } => {
            vec![AppCommand::SetCanvasSize { width, height }]
        }
        AppIntent::TargetRequested { target } => {
            // Während einer Fahrt werden neue Ziele ignoriert
            if state.is_playing() {
                log::debug!("Ziel {} ignoriert, Wiedergabe läuft", target);
                Vec::new()
            } else {
                vec![AppCommand::MoveVehicleTo { target }]
            }
        }
        AppIntent::PlaybackAdvanced { delta } => {
            if state.is_playing() {
                vec![AppCommand::AdvancePlayback { delta }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PlaybackFinished { achieved_heading } => vec![AppCommand::CompletePlayback {
            achieved_heading: Some(achieved_heading),
        }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;
    use std::time::Duration;

    #[test]
    fn target_requested_maps_to_move_when_idle() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::TargetRequested {
                target: Point::new(1.0, 2.0),
            },
        );
        assert_eq!(
            commands,
            vec![AppCommand::MoveVehicleTo {
                target: Point::new(1.0, 2.0)
            }]
        );
    }

    #[test]
    fn playback_advanced_without_playback_is_dropped() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PlaybackAdvanced {
                delta: Duration::from_millis(16),
            },
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn playback_finished_carries_heading() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PlaybackFinished {
                achieved_heading: 0.5,
            },
        );
        assert_eq!(
            commands,
            vec![AppCommand::CompletePlayback {
                achieved_heading: Some(0.5)
            }]
        );
    }
}
