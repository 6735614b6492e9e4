use std::path::PathBuf;
use thiserror::Error;

/// Database error types for the todolist store
#[derive(Error, Debug)]
pub enum DbError {
    /// Error opening the database file
    #[error("Failed to open database at {path}: {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Error during schema initialization
    #[error("Failed to initialize database schema: {0}")]
    Schema(#[source] rusqlite::Error),

    /// Error executing a query
    #[error("Query execution failed")]
    Query(#[source] rusqlite::Error),

    /// Error creating the directory that holds the database file
    #[error("Failed to create database directory at {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error for invalid input or validation failure
    #[error("{message}")]
    ValidationError { message: String },

    /// The connection mutex was poisoned by a panicking query
    #[error("Database connection lock was poisoned")]
    LockPoisoned,

    /// The blocking task running a query failed to complete
    #[error("Database task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        DbError::Query(err)
    }
}

impl DbError {
    /// Get the full error message including nested SQLite error details.
    ///
    /// This is useful for displaying detailed error information to users.
    pub fn full_message(&self) -> String {
        match self {
            DbError::Query(err) => format!("Query execution failed: {}", err),
            other => other.to_string(),
        }
    }

    /// Shorthand for building a `ValidationError`.
    pub fn validation(message: impl Into<String>) -> Self {
        DbError::ValidationError {
            message: message.into(),
        }
    }
}

/// Result type alias for database operations
pub type DbResult<T> = Result<T, DbError>;
