/// All user-facing messages the application can print.
///
/// Message text lives in the `Display` implementation in
/// [`super::display`]; variants carry only the dynamic parts.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskUpdated(String),
    TaskDeleted(String),

    // === LIST MESSAGES ===
    TasksHeader,
    NoTasksFound,
    TasksTotal(usize),
}
