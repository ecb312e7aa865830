//! Display implementation turning [`Message`] variants into console text.
//!
//! Keeping every user-facing string in one match arm per variant is what
//! makes the wording greppable and the prefixes (added by the `msg_*`
//! macros, not here) consistent.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task {} added successfully", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully", id),

            // === LIST MESSAGES ===
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TasksTotal(count) => format!("Total: {}", count),
        };
        write!(f, "{}", text)
    }
}
