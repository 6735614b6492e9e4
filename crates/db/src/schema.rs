//! Database schema initialization for the todolist store
//!
//! Defines the SQLite table that holds tasks.

use crate::error::DbError;
use rusqlite::Connection;

/// SQL statements for schema initialization
mod sql {
    /// Define the tasks table
    pub const DEFINE_TASKS_TABLE: &str = r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            completed INTEGER NOT NULL DEFAULT 0
        );
    "#;
}

/// Initialize the database schema.
///
/// This function is idempotent - it can be called multiple times safely
/// as it uses `IF NOT EXISTS` clauses.
///
/// # Errors
///
/// Returns `DbError::Schema` if the table definition fails.
pub fn init_schema(conn: &Connection) -> Result<(), DbError> {
    conn.execute_batch(sql::DEFINE_TASKS_TABLE)
        .map_err(DbError::Schema)?;
    Ok(())
}
