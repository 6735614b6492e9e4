//! Database module for todolist
//!
//! Provides SQLite connection management, schema initialization, and the
//! task data model. The [`TaskStore`] trait is the handle the screen is
//! given; [`Database`] implements it over a local SQLite file and
//! [`MemoryStore`] implements it in memory.

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{DbError, DbResult};
pub use memory::MemoryStore;
pub use models::{Task, TaskId};
pub use repository::TaskRepository;
pub use store::TaskStore;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::Connection;
use tracing::debug;

/// Directory name used under the platform data directory
pub const APP_DIR: &str = "todolist";

/// Database file name inside the application directory
pub const DEFAULT_DB_FILE: &str = "todos.db";

/// Directory used when the platform has no data directory
const FALLBACK_DIR: &str = ".todolist";

/// Database wrapper providing connection management for SQLite
///
/// Queries run on tokio's blocking pool; the connection is shared behind a
/// mutex so at most one statement runs at a time.
pub struct Database {
    /// The underlying SQLite connection
    conn: Arc<Mutex<Connection>>,
    /// Path of the database file
    path: PathBuf,
}

impl Database {
    /// Open the SQLite database at the specified file path.
    ///
    /// Creates the parent directory if it doesn't exist. The schema is not
    /// touched; call [`TaskStore::initialize`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns `DbError::CreateDirectory` if directory creation fails.
    /// Returns `DbError::Connection` if the file cannot be opened.
    pub async fn connect(path: &Path) -> DbResult<Self> {
        let path = Self::prepare_path(path)?;

        let open_path = path.clone();
        let conn = tokio::task::spawn_blocking(move || Connection::open(&open_path))
            .await?
            .map_err(|source| DbError::Connection {
                path: path.clone(),
                source,
            })?;

        debug!("Opened database at {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    /// Open a private in-memory database.
    ///
    /// The data lives as long as this `Database` does.
    pub fn open_in_memory() -> DbResult<Self> {
        let path = PathBuf::from(":memory:");
        let conn = Connection::open_in_memory().map_err(|source| DbError::Connection {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    /// Get the path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the default database path.
    ///
    /// Returns `<data dir>/todolist/todos.db` using the platform's local
    /// data directory, or `.todolist/todos.db` relative to the current
    /// working directory when the platform has none.
    pub fn default_path() -> DbResult<PathBuf> {
        let base = dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR));
        Ok(base.join(DEFAULT_DB_FILE))
    }

    /// Prepare the database path by creating its parent directory.
    fn prepare_path(path: &Path) -> DbResult<PathBuf> {
        let path = path.to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| DbError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        Ok(path)
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> DbResult<T>
    where
        F: FnOnce(&Connection) -> DbResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|_| DbError::LockPoisoned)?;
            f(&conn)
        })
        .await?
    }
}

#[async_trait]
impl TaskStore for Database {
    async fn initialize(&self) -> DbResult<()> {
        self.with_conn(|conn| schema::init_schema(conn)).await
    }

    async fn add_task(&self, title: &str, description: Option<&str>) -> DbResult<TaskId> {
        let title = title.to_string();
        let description = description.map(str::to_string);
        self.with_conn(move |conn| {
            TaskRepository::new(conn).insert(&title, description.as_deref())
        })
        .await
    }

    async fn list_tasks(&self) -> DbResult<Vec<Task>> {
        self.with_conn(|conn| TaskRepository::new(conn).list_all())
            .await
    }

    async fn set_completion(&self, id: TaskId, completed: bool) -> DbResult<()> {
        self.with_conn(move |conn| {
            TaskRepository::new(conn).set_completed(id, completed)?;
            Ok(())
        })
        .await
    }

    async fn delete_task(&self, id: TaskId) -> DbResult<()> {
        self.with_conn(move |conn| {
            TaskRepository::new(conn).delete(id)?;
            Ok(())
        })
        .await
    }
}

// Ensure Database is Send + Sync for async compatibility
static_assertions::assert_impl_all!(Database: Send, Sync);
static_assertions::assert_impl_all!(MemoryStore: Send, Sync);
