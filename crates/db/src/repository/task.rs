//! Task repository for CRUD operations on tasks
//!
//! Provides a repository pattern implementation for task operations,
//! encapsulating SQLite queries and providing a clean API.

use crate::error::{DbError, DbResult};
use crate::models::{Task, TaskId};
use rusqlite::{Connection, Row, params};
use tracing::{debug, trace};

/// Repository for task CRUD operations
///
/// Every method runs a single statement against the borrowed connection.
/// Callers own the connection and decide which thread runs the query.
pub struct TaskRepository<'a> {
    conn: &'a Connection,
}

/// Map a `tasks` row to a `Task`.
fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        completed: row.get("completed")?,
    })
}

impl<'a> TaskRepository<'a> {
    /// Create a new TaskRepository over the given connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a new pending task and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ValidationError` if the title is empty or whitespace.
    /// Returns `DbError::Query` if the insert fails.
    pub fn insert(&self, title: &str, description: Option<&str>) -> DbResult<TaskId> {
        if title.trim().is_empty() {
            return Err(DbError::validation("Task title cannot be empty"));
        }

        debug!("Creating task with title: {}", title);
        trace!("Task description: {:?}", description);

        self.conn.execute(
            "INSERT INTO tasks (title, description, completed) VALUES (?1, ?2, 0)",
            params![title, description],
        )?;
        let id = self.conn.last_insert_rowid();

        debug!("Created task: {}", id);
        Ok(id)
    }

    /// Fetch every task ordered by id ascending.
    pub fn list_all(&self) -> DbResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, description, completed FROM tasks ORDER BY id ASC")?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!("Loaded {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Set the completion flag of a task to 1 or 0.
    ///
    /// Returns the number of rows changed; an unknown id changes nothing
    /// and is not an error.
    pub fn set_completed(&self, id: TaskId, completed: bool) -> DbResult<usize> {
        let changed = self.conn.execute(
            "UPDATE tasks SET completed = ?1 WHERE id = ?2",
            params![i64::from(completed), id],
        )?;
        if changed == 0 {
            debug!("No task {} to update", id);
        }
        Ok(changed)
    }

    /// Delete a task by id.
    ///
    /// Returns the number of rows removed; an unknown id removes nothing
    /// and is not an error.
    pub fn delete(&self, id: TaskId) -> DbResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if removed == 0 {
            debug!("No task {} to delete", id);
        }
        Ok(removed)
    }
}
