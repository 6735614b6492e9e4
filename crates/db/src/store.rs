//! The store handle shared by the screen.
//!
//! The screen receives an implementation of [`TaskStore`] instead of
//! reaching for a global connection, so the SQLite-backed [`Database`]
//! and the in-memory [`MemoryStore`] are interchangeable.
//!
//! [`Database`]: crate::Database
//! [`MemoryStore`]: crate::MemoryStore

use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::{Task, TaskId};

/// Asynchronous persistence operations over the task collection.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Ensure the task table exists. Safe to call more than once.
    async fn initialize(&self) -> DbResult<()>;

    /// Insert a new pending task and return the id the store assigned.
    ///
    /// Fails with `DbError::ValidationError` when `title` is blank.
    async fn add_task(&self, title: &str, description: Option<&str>) -> DbResult<TaskId>;

    /// Return every task, ordered by id ascending.
    async fn list_tasks(&self) -> DbResult<Vec<Task>>;

    /// Set the completion flag of `id`. Unknown ids are ignored.
    async fn set_completion(&self, id: TaskId, completed: bool) -> DbResult<()>;

    /// Remove `id`. Unknown ids are ignored.
    async fn delete_task(&self, id: TaskId) -> DbResult<()>;
}
