//! Test infrastructure for integration tests
//!
//! Provides isolated SQLite databases and a store whose operations can be
//! made to fail on demand.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use todolist_db::{Database, DbError, DbResult, MemoryStore, Task, TaskId, TaskStore};
use todolist_tui::App;

/// Test context owning a file-backed database in its own temp directory
pub struct TestContext {
    pub db_path: PathBuf,
    temp_dir: PathBuf,
}

impl TestContext {
    /// Create a new context with a unique temp directory.
    ///
    /// The directory name uses process ID, thread ID, and a nanosecond
    /// timestamp to guarantee isolation.
    pub fn new() -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "todolist-integration-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let db_path = temp_dir.join("todos.db");
        Self { db_path, temp_dir }
    }

    /// Open the context's database.
    pub async fn open(&self) -> Database {
        Database::connect(&self.db_path).await.unwrap()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

/// A store that forwards to `MemoryStore` unless told to fail.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_init: AtomicBool,
    pub fail_add: AtomicBool,
    pub fail_list: AtomicBool,
    pub fail_toggle: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(flag: &AtomicBool, value: bool) {
        flag.store(value, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool) -> DbResult<()> {
        if flag.load(Ordering::SeqCst) {
            Err(DbError::LockPoisoned)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TaskStore for FlakyStore {
    async fn initialize(&self) -> DbResult<()> {
        Self::check(&self.fail_init)?;
        self.inner.initialize().await
    }

    async fn add_task(&self, title: &str, description: Option<&str>) -> DbResult<TaskId> {
        Self::check(&self.fail_add)?;
        self.inner.add_task(title, description).await
    }

    async fn list_tasks(&self) -> DbResult<Vec<Task>> {
        Self::check(&self.fail_list)?;
        self.inner.list_tasks().await
    }

    async fn set_completion(&self, id: TaskId, completed: bool) -> DbResult<()> {
        Self::check(&self.fail_toggle)?;
        self.inner.set_completion(id, completed).await
    }

    async fn delete_task(&self, id: TaskId) -> DbResult<()> {
        Self::check(&self.fail_delete)?;
        self.inner.delete_task(id).await
    }
}

/// Build a key press with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Open the modal, fill in the form, and press Enter.
pub async fn add_via_form<S: TaskStore>(app: &mut App<S>, title: &str, description: &str) {
    app.handle_key(&key(KeyCode::Char('a'))).await;
    for c in title.chars() {
        app.handle_key(&key(KeyCode::Char(c))).await;
    }
    app.handle_key(&key(KeyCode::Tab)).await;
    for c in description.chars() {
        app.handle_key(&key(KeyCode::Char(c))).await;
    }
    app.handle_key(&key(KeyCode::Enter)).await;
}

/// Assert the screen snapshot matches the store exactly.
pub async fn assert_in_sync<S: TaskStore>(app: &App<S>) {
    let stored = app.store().list_tasks().await.unwrap();
    assert_eq!(app.tasks(), stored.as_slice(), "snapshot drifted from store");
}
