//! Persistence layer for the tasq application.
//!
//! One module, one concern: the file-backed [`tasks::TaskStore`] that owns
//! the persisted task list for the lifetime of a process invocation.

/// File-backed task storage.
///
/// Handles CRUD operations for tasks plus status-filtered queries, with a
/// full-file JSON rewrite on every mutation and self-healing reads.
pub mod tasks;
