//! Repository modules for database operations
//!
//! Provides the repository pattern implementation for task queries,
//! encapsulating the SQL statements.

mod task;

pub use task::TaskRepository;
