//! Error types for the TUI module.

use std::io;
use thiserror::Error;

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

/// Error type for TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Failed to initialize or restore the terminal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Database connection or query error.
    #[error("Database error: {0}")]
    Database(#[from] todolist_db::DbError),
}

impl TuiError {
    /// Message suitable for printing to the user before exiting.
    pub fn full_message(&self) -> String {
        match self {
            TuiError::Database(err) => format!("Database error: {}", err.full_message()),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todolist_db::DbError;

    #[test]
    fn test_terminal_error_display() {
        let err: TuiError = io::Error::other("no tty").into();
        assert_eq!(err.to_string(), "Terminal error: no tty");
    }

    #[test]
    fn test_database_error_full_message() {
        let err: TuiError = DbError::validation("Task title cannot be empty").into();
        assert_eq!(
            err.full_message(),
            "Database error: Task title cannot be empty"
        );
    }
}
