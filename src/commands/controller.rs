//! Command controller: validated parameters in, store calls out.
//!
//! A thin adapter that shapes parameter maps into typed store calls and
//! wraps the results into [`Outcome`] envelopes. Validation
//! never happens here; by the time a handler runs, the pipeline's
//! validate step has already enforced the action's rules.

use crate::db::tasks::TaskStore;
use crate::libs::errors::CliError;
use crate::libs::parser::Params;
use crate::libs::pipeline::{Handler, Outcome, TaskController};
use crate::libs::task::{TaskFilter, TaskPatch, TaskStatus};
use async_trait::async_trait;

pub struct CommandController {
    store: TaskStore,
}

impl CommandController {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    async fn create_task(&mut self, params: &Params) -> Result<Outcome, CliError> {
        let description = params.get("description").map(String::as_str).unwrap_or("");
        let task = self.store.add_task(description, TaskStatus::Todo).await?;
        Ok(Outcome::Task(task))
    }

    async fn update_task(&mut self, params: &Params) -> Result<Outcome, CliError> {
        let id = params.get("id").map(String::as_str).unwrap_or("");
        let mut patch = TaskPatch::default();
        if let Some(description) = params.get("description") {
            patch.description = Some(description.clone());
        }
        if let Some(status) = params.get("status") {
            patch.status = Some(status.parse()?);
        }
        let task = self.store.update_task(id, patch).await?;
        Ok(Outcome::Task(task))
    }

    async fn delete_task(&mut self, params: &Params) -> Result<Outcome, CliError> {
        let id = params.get("id").map(String::as_str).unwrap_or("");
        let removed = self.store.remove_task(id).await?;
        Ok(Outcome::Removed {
            id: id.to_string(),
            removed,
        })
    }

    async fn list_tasks(&mut self, params: &Params) -> Result<Outcome, CliError> {
        let filter = match params.get("status") {
            Some(status) => status.parse()?,
            None => TaskFilter::All,
        };
        Ok(Outcome::Tasks(self.store.get_by_status(filter)))
    }

    async fn mark(&mut self, params: &Params, status: TaskStatus) -> Result<Outcome, CliError> {
        let id = params.get("id").map(String::as_str).unwrap_or("");
        let patch = TaskPatch {
            status: Some(status),
            ..TaskPatch::default()
        };
        let task = self.store.update_task(id, patch).await?;
        Ok(Outcome::Task(task))
    }
}

#[async_trait]
impl TaskController for CommandController {
    async fn dispatch(&mut self, handler: Handler, params: &Params) -> Result<Outcome, CliError> {
        match handler {
            Handler::CreateTask => self.create_task(params).await,
            Handler::UpdateTask => self.update_task(params).await,
            Handler::DeleteTask => self.delete_task(params).await,
            Handler::ListTasks => self.list_tasks(params).await,
            Handler::MarkInProgress => self.mark(params, TaskStatus::InProgress).await,
            Handler::MarkDone => self.mark(params, TaskStatus::Done).await,
        }
    }
}
