//! File-backed task store.
//!
//! The whole task list lives in one JSON document, held in memory as an
//! id-keyed map and rewritten in full after every mutation. There is no
//! write-ahead log and no batching: last write wins, and the only
//! atomicity is whatever a single file write gives us. One process
//! invocation owns one store instance; nothing else touches the file.
//!
//! ## On-disk shapes
//!
//! The store always writes the mapping shape `{id: task}` with 2-space
//! indentation, but reads either that or a plain sequence of tasks:
//! older versions of the tool wrote an array and existing files must keep
//! loading.
//!
//! ## Crash recovery
//!
//! An unreadable or unparsable file is not an error the user can act on:
//! the store logs a warning, starts empty, and immediately persists an
//! empty mapping. Silently dropping corrupt data is the accepted
//! trade-off for never wedging the CLI on a bad file.

use crate::libs::config::TASKS_FILE_NAME;
use crate::libs::data_storage::DataStorage;
use crate::libs::errors::CliError;
use crate::libs::task::{Task, TaskFilter, TaskPatch, TaskStatus};
use crate::msg_debug;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Accepted on-disk layouts. Only the mapping shape is ever written.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoreShape {
    Map(BTreeMap<String, Task>),
    List(Vec<Task>),
}

/// Durable id-keyed store of tasks backed by a single JSON file.
pub struct TaskStore {
    path: PathBuf,
    data: BTreeMap<String, Task>,
}

impl TaskStore {
    /// Opens the store at the platform data directory
    /// (`<data dir>/tasq/tasks.json`).
    pub async fn new() -> Result<TaskStore, CliError> {
        let path = DataStorage::new().get_path(TASKS_FILE_NAME)?;
        Self::open(path).await
    }

    /// Opens the store at an explicit path, creating the file (and its
    /// parent directories) when missing.
    ///
    /// The returned value is fully initialized; no call on it can observe
    /// a half-loaded store.
    pub async fn open(path: PathBuf) -> Result<TaskStore, CliError> {
        let mut store = TaskStore {
            path,
            data: BTreeMap::new(),
        };

        match fs::read(&store.path).await {
            Ok(bytes) => match serde_json::from_slice::<StoreShape>(&bytes) {
                Ok(StoreShape::Map(map)) => store.data = map,
                Ok(StoreShape::List(tasks)) => {
                    store.data = tasks.into_iter().map(|t| (t.id.clone(), t)).collect();
                }
                Err(err) => {
                    tracing::warn!(
                        "Unreadable task store {}: {}; starting empty",
                        store.path.display(),
                        err
                    );
                    store.persist().await?;
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if let Some(parent) = store.path.parent() {
                    fs::create_dir_all(parent).await?;
                }
                store.persist().await?;
            }
            Err(err) => {
                tracing::warn!(
                    "Failed to read task store {}: {}; starting empty",
                    store.path.display(),
                    err
                );
                store.persist().await?;
            }
        }

        msg_debug!("Task store ready with {} task(s)", store.data.len());
        Ok(store)
    }

    /// Creates a task with a fresh time-derived id, persists, and returns
    /// the new snapshot.
    pub async fn add_task(
        &mut self,
        description: &str,
        status: TaskStatus,
    ) -> Result<Task, CliError> {
        let now = Utc::now().timestamp_millis();
        let id = self.next_id(now);
        let task = Task {
            id: id.clone(),
            description: description.to_string(),
            status,
            created_at: now,
            updated_at: now,
        };

        self.data.insert(id, task.clone());
        self.persist().await?;
        Ok(task)
    }

    /// Merges only the supplied patch fields over the stored task, bumps
    /// `updated_at`, persists, and returns the new snapshot.
    pub async fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<Task, CliError> {
        let prior = self
            .data
            .get(id)
            .ok_or_else(|| CliError::not_found("Task", id))?;

        let updated = Task {
            id: prior.id.clone(),
            description: patch
                .description
                .unwrap_or_else(|| prior.description.clone()),
            status: patch.status.unwrap_or(prior.status),
            created_at: prior.created_at,
            // updated_at must strictly increase even when two mutations
            // land inside the same millisecond
            updated_at: Utc::now().timestamp_millis().max(prior.updated_at + 1),
        };

        self.data.insert(id.to_string(), updated.clone());
        self.persist().await?;
        Ok(updated)
    }

    /// Deletes the task and persists; absent ids fail with `NotFound`.
    pub async fn remove_task(&mut self, id: &str) -> Result<bool, CliError> {
        if self.data.remove(id).is_none() {
            return Err(CliError::not_found("Task", id));
        }
        self.persist().await?;
        Ok(true)
    }

    /// Snapshots of every stored task.
    pub fn get_all(&self) -> Vec<Task> {
        self.data.values().cloned().collect()
    }

    /// Snapshot of one task, if present.
    pub fn get_by_id(&self, id: &str) -> Option<Task> {
        self.data.get(id).cloned()
    }

    /// Snapshots of the tasks matching `filter`.
    pub fn get_by_status(&self, filter: TaskFilter) -> Vec<Task> {
        match filter {
            TaskFilter::All => self.get_all(),
            TaskFilter::Done => self.collect_where(|t| t.status == TaskStatus::Done),
            TaskFilter::InProgress => self.collect_where(|t| t.status == TaskStatus::InProgress),
            TaskFilter::NotDone => self.collect_where(|t| t.status != TaskStatus::Done),
        }
    }

    fn collect_where(&self, keep: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.data.values().filter(|t| keep(t)).cloned().collect()
    }

    /// Derives an unused id from the current time, bumping the millis
    /// value on collision so ids are never re-used.
    fn next_id(&self, now_millis: i64) -> String {
        let mut millis = now_millis;
        loop {
            let id = base36(millis);
            if !self.data.contains_key(&id) {
                return id;
            }
            millis += 1;
        }
    }

    /// Rewrites the whole document in the mapping shape, 2-space indented.
    async fn persist(&self) -> Result<(), CliError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"  ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.data.serialize(&mut ser)?;
        fs::write(&self.path, buf).await?;
        Ok(())
    }
}

/// Lowercase base-36 rendering of a non-negative integer.
fn base36(mut value: i64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value <= 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}
