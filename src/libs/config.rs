//! Static configuration tables for the CLI.
//!
//! This module is the single place that knows the action vocabulary, which
//! validation rules apply to each action, and which pipeline steps each
//! action runs. The tables are plain `&'static` data, not ambient global
//! state; every consumer looks them up explicitly.

use crate::libs::errors::CliError;
use crate::libs::pipeline::{Handler, Step};
use crate::libs::validation::Rule;
use std::fmt;
use std::str::FromStr;

/// File name of the persisted task list inside the application data
/// directory.
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Allowed values for a task `status` field.
pub const STATUS_OPTIONS: &[&str] = &["todo", "in progress", "done"];

/// Allowed values for the `list` action's `status` filter. A distinct
/// vocabulary from [`STATUS_OPTIONS`]: filters include the `not_done`
/// complement and the `all` passthrough.
pub const LIST_STATUS_OPTIONS: &[&str] = &["done", "in_progress", "not_done", "all"];

/// The closed set of actions the CLI understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    Delete,
    List,
    MarkInProgress,
    MarkDone,
}

impl Action {
    /// The action token as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::List => "list",
            Action::MarkInProgress => "mark-in-progress",
            Action::MarkDone => "mark-done",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Action::Add),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "list" => Ok(Action::List),
            "mark-in-progress" => Ok(Action::MarkInProgress),
            "mark-done" => Ok(Action::MarkDone),
            other => Err(CliError::message(format!("Unknown action: {other}"))),
        }
    }
}

/// Validation rules for an action, in evaluation order.
///
/// Total over [`Action`]: every action has a rule list, so a missing table
/// is not a reachable failure.
pub fn rules_for(action: Action) -> &'static [Rule] {
    match action {
        Action::Add => &[Rule {
            name: "description",
            required: true,
            options: None,
            default: None,
        }],
        Action::Update => &[
            Rule {
                name: "id",
                required: true,
                options: None,
                default: None,
            },
            Rule {
                name: "description",
                required: false,
                options: None,
                default: None,
            },
            Rule {
                name: "status",
                required: false,
                options: Some(STATUS_OPTIONS),
                default: None,
            },
        ],
        Action::Delete => &[Rule {
            name: "id",
            required: true,
            options: None,
            default: None,
        }],
        Action::List => &[Rule {
            name: "status",
            required: false,
            options: Some(LIST_STATUS_OPTIONS),
            default: Some("all"),
        }],
        Action::MarkInProgress | Action::MarkDone => &[Rule {
            name: "id",
            required: true,
            options: None,
            default: None,
        }],
    }
}

/// Pipeline step sequence for an action.
///
/// Every action validates first and prints last; the middle step names the
/// handler kind the controller dispatches on.
pub fn steps_for(action: Action) -> &'static [Step] {
    match action {
        Action::Add => &[
            Step::Validate,
            Step::Handle(Handler::CreateTask),
            Step::Print,
        ],
        Action::Update => &[
            Step::Validate,
            Step::Handle(Handler::UpdateTask),
            Step::Print,
        ],
        Action::Delete => &[
            Step::Validate,
            Step::Handle(Handler::DeleteTask),
            Step::Print,
        ],
        Action::List => &[
            Step::Validate,
            Step::Handle(Handler::ListTasks),
            Step::Print,
        ],
        Action::MarkInProgress => &[
            Step::Validate,
            Step::Handle(Handler::MarkInProgress),
            Step::Print,
        ],
        Action::MarkDone => &[
            Step::Validate,
            Step::Handle(Handler::MarkDone),
            Step::Print,
        ],
    }
}
