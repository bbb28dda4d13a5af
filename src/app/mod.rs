//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Position, Richtung, Wiedergabe).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, PlaybackState};
