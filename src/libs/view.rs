//! Console rendering for command outcomes.
//!
//! Pure formatting over [`Outcome`] values; no state, no decisions. Each
//! registered command points at one of these functions as its render step.

use crate::libs::messages::Message;
use crate::libs::pipeline::Outcome;
use crate::libs::task::Task;
use crate::{msg_print, msg_success};
use chrono::{Local, TimeZone};
use prettytable::{row, Table};

pub struct View;

impl View {
    /// Render function for `add`.
    pub fn added(outcome: &Outcome) {
        if let Outcome::Task(task) = outcome {
            msg_success!(Message::TaskAdded(task.id.clone()));
            println!("{}", Self::task_line(task));
        }
    }

    /// Render function for `update`, `mark-in-progress` and `mark-done`.
    pub fn updated(outcome: &Outcome) {
        if let Outcome::Task(task) = outcome {
            msg_success!(Message::TaskUpdated(task.id.clone()));
            println!("{}", Self::task_line(task));
        }
    }

    /// Render function for `delete`.
    pub fn deleted(outcome: &Outcome) {
        if let Outcome::Removed { id, removed } = outcome {
            if *removed {
                msg_success!(Message::TaskDeleted(id.clone()));
            }
        }
    }

    /// Render function for `list`.
    pub fn list(outcome: &Outcome) {
        if let Outcome::Tasks(tasks) = outcome {
            msg_print!(Message::TasksHeader, true);
            if tasks.is_empty() {
                msg_print!(Message::NoTasksFound);
            } else {
                let mut table = Table::new();
                table.add_row(row!["ID", "STATUS", "DESCRIPTION", "CREATED", "UPDATED"]);
                for task in tasks {
                    table.add_row(row![
                        task.id,
                        task.status.as_str().to_uppercase(),
                        task.description,
                        Self::format_timestamp(task.created_at),
                        Self::format_timestamp(task.updated_at)
                    ]);
                }
                table.printstd();
            }
            msg_print!(Message::TasksTotal(tasks.len()));
        }
    }

    /// One-line task summary used by the confirmation views.
    pub fn task_line(task: &Task) -> String {
        format!(
            "[{}] {} - {}",
            task.id,
            task.status.as_str().to_uppercase(),
            task.description
        )
    }

    /// Epoch milliseconds as local wall-clock time.
    pub fn format_timestamp(millis: i64) -> String {
        Local
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| millis.to_string())
    }

    /// Usage listing shown when the CLI is invoked with no arguments.
    pub fn help() {
        println!("Usage: tasq <action> [options]\n");
        println!("Available actions:");
        println!("  add               --description <text>");
        println!("  update            --id <id> [--description <text>] [--status <status>]");
        println!("  delete            --id <id>");
        println!("  list              [--status <filter>]");
        println!("  mark-in-progress  --id <id>");
        println!("  mark-done         --id <id>\n");
        println!("Status values: todo, \"in progress\", done");
        println!("List filters: done, in_progress, not_done, all");
    }
}
