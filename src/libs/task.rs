//! Task domain types.
//!
//! A [`Task`] is an immutable snapshot: the store hands out clones and
//! replaces entries wholesale on mutation, so a value obtained from a query
//! never changes under the caller. Timestamps are epoch milliseconds.
//!
//! Note the two distinct vocabularies: [`TaskStatus`] is what a task *is*
//! (`"todo"`, `"in progress"`, `"done"`), while [`TaskFilter`] is what a
//! `list` invocation may *ask for* (`"done"`, `"in_progress"`, `"not_done"`,
//! `"all"`).

use crate::libs::errors::CliError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single tracked task.
///
/// `id` and `created_at` are fixed for the task's lifetime; `updated_at`
/// strictly increases on every mutation. Serialized with camelCase keys to
/// match the on-disk document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(CliError::message(format!("Unknown task status: {other}"))),
        }
    }
}

/// Status filter accepted by the `list` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    Done,
    InProgress,
    /// Complement filter: everything that is not yet done.
    NotDone,
    All,
}

impl FromStr for TaskFilter {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "done" => Ok(TaskFilter::Done),
            "in_progress" => Ok(TaskFilter::InProgress),
            "not_done" => Ok(TaskFilter::NotDone),
            "all" => Ok(TaskFilter::All),
            other => Err(CliError::message(format!("Unknown status filter: {other}"))),
        }
    }
}

/// Partial update applied by [`crate::db::tasks::TaskStore::update_task`].
///
/// Only fields carrying `Some` overwrite the stored value; everything else
/// keeps its prior state.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}
