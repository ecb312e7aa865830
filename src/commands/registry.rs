//! Command registry.
//!
//! Maps an action name to its immutable [`Command`] triple: the name, the
//! ordered pipeline step sequence, and the render function for its
//! outcome. Populated once at startup; `get`/`has`/`all` are pure lookups
//! and registration order is preserved.

use crate::libs::config::{self, Action};
use crate::libs::pipeline::{RenderFn, Step};
use crate::libs::view::View;

/// An immutable, registered command.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub steps: &'static [Step],
    pub render: RenderFn,
}

pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Builds the registry with the six default commands.
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register(Action::Add, View::added);
        registry.register(Action::Update, View::updated);
        registry.register(Action::Delete, View::deleted);
        registry.register(Action::List, View::list);
        registry.register(Action::MarkInProgress, View::updated);
        registry.register(Action::MarkDone, View::updated);

        registry
    }

    fn register(&mut self, action: Action, render: RenderFn) {
        self.commands.push(Command {
            name: action.name(),
            steps: config::steps_for(action),
            render,
        });
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn all(&self) -> &[Command] {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
