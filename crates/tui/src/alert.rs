//! User-facing alert messages.
//!
//! An alert is a small dialog over the screen that stays until the next key
//! press.

/// Shown when the add form is submitted without a title.
pub const EMPTY_TITLE_MESSAGE: &str = "Task title cannot be empty";
/// Shown when the store fails to add a task.
pub const ADD_FAILED_MESSAGE: &str = "Failed to add task";
/// Shown when the store fails to toggle a task.
pub const TOGGLE_FAILED_MESSAGE: &str = "Failed to update task";
/// Shown when the store fails to delete a task.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete task";
/// Shown when the task list cannot be reloaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load tasks";

/// A pending message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// An alert titled "Error".
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}
