//! In-memory task store.
//!
//! Mirrors the SQLite store's contract without touching disk. Ids come from
//! a counter that only grows, so a deleted id is never handed out again.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{DbError, DbResult};
use crate::models::{Task, TaskId};
use crate::store::TaskStore;

#[derive(Debug, Default)]
struct Inner {
    tasks: Vec<Task>,
    last_id: TaskId,
}

/// A `TaskStore` that keeps tasks in a vector.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store holds no tasks.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.tasks.is_empty()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn initialize(&self) -> DbResult<()> {
        Ok(())
    }

    async fn add_task(&self, title: &str, description: Option<&str>) -> DbResult<TaskId> {
        if title.trim().is_empty() {
            return Err(DbError::validation("Task title cannot be empty"));
        }

        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let id = inner.last_id;
        let task = match description {
            Some(description) => Task::new(id, title).with_description(description),
            None => Task::new(id, title),
        };
        inner.tasks.push(task);
        Ok(id)
    }

    async fn list_tasks(&self) -> DbResult<Vec<Task>> {
        // Ids are pushed in increasing order, so insertion order is id order.
        Ok(self.inner.lock().await.tasks.clone())
    }

    async fn set_completion(&self, id: TaskId, completed: bool) -> DbResult<()> {
        let mut inner = self.inner.lock().await;
        if let Some(task) = inner.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = i64::from(completed);
        }
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> DbResult<()> {
        self.inner.lock().await.tasks.retain(|t| t.id != id);
        Ok(())
    }
}
