//! Verlauf der ausgeführten Commands einer Sitzung.

use super::AppCommand;
use std::collections::VecDeque;

/// Obergrenze gespeicherter Commands; ältere fallen einzeln heraus.
const CAPACITY: usize = 256;

/// Ringpuffer der zuletzt ausgeführten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    total: usize,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merkt sich `command`; bei voller Kapazität wird der älteste verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl aller jemals ausgeführten Commands, auch bereits verworfener.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Gespeicherte Commands, älteste zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}
