//! Data models for the todolist store
//!
//! Defines the Rust type that maps to the `tasks` table.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a task is created.
pub type TaskId = i64;

/// A single to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned on insert and never changed
    pub id: TaskId,

    /// Title of the task
    pub title: String,

    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Completion flag as stored: 0 = pending, nonzero = done
    pub completed: i64,
}

impl Task {
    /// Create a pending task with the given id and title.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            completed: 0,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the task is marked done.
    pub fn is_completed(&self) -> bool {
        self.completed != 0
    }
}
