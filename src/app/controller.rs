//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Eingabe-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Canvas & Optionen ===
            AppCommand::SetCanvasSize { width, height } => {
                handlers::view::set_canvas_size(state, width, height)
            }
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, options)?,

            // === Bewegung ===
            AppCommand::MoveVehicleTo { target } => handlers::motion::move_vehicle_to(state, target)?,
            AppCommand::AdvancePlayback { delta } => handlers::motion::advance_playback(state, delta),
            AppCommand::CompletePlayback { achieved_heading } => {
                handlers::motion::complete_playback(state, achieved_heading)
            }
        }

        Ok(())
    }
}
