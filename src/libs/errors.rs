//! Error types for the tasq application.
//!
//! Everything user-facing funnels into [`CliError`]: rule violations from
//! the validator, missing-task lookups from the store, and the generic
//! failures the pipeline can surface (unknown action, unknown command, a
//! mis-assembled step sequence). I/O and JSON errors convert automatically
//! so store code can use `?` throughout.
//!
//! The `Display` output of an error is exactly the line printed to the
//! user; callers must not add their own prefixes on top of it.

use thiserror::Error;

/// A shared error type for the whole CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// User input violated one or more validation rules.
    ///
    /// The payload is the newline-joined list of every violated rule, so a
    /// single failed invocation reports all problems at once.
    #[error("{0}")]
    Validation(String),

    /// A referenced id is absent from the store.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Any other failure surfaced through the pipeline.
    #[error("{0}")]
    Message(String),

    /// File system failure while touching the backing store.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization failure while reading or writing the backing store.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Creates a generic pipeline error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Creates a NotFound error for the given resource kind and id.
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
