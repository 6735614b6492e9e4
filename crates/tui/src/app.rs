//! Main application state and event loop.
//!
//! `App` is the task list screen. It owns the snapshot of tasks, the
//! add-task form, and the modal/alert flags, and it is the only place that
//! talks to the store. Every mutation is followed by a full reload; the
//! snapshot is never patched locally.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, error, info};

use todolist_db::{Task, TaskId, TaskStore};

use crate::alert::{
    ADD_FAILED_MESSAGE, Alert, DELETE_FAILED_MESSAGE, EMPTY_TITLE_MESSAGE, LOAD_FAILED_MESSAGE,
    TOGGLE_FAILED_MESSAGE,
};
use crate::error::TuiResult;
use crate::event::{
    is_add, is_backspace, is_down, is_enter, is_escape, is_interrupt, is_next_field,
    is_previous_field, is_quit, is_up, poll_key, typed_char,
};
use crate::form::TaskForm;
use crate::item::{ItemIntent, TaskItemView};
use crate::ui;

/// Task list screen state.
pub struct App<S> {
    /// Injected store handle.
    store: S,
    /// Snapshot of the store as of the last successful load.
    tasks: Vec<Task>,
    /// Add-task form inputs.
    form: TaskForm,
    /// Whether the add-task modal is shown.
    modal_open: bool,
    /// Index of the highlighted row.
    selected_index: usize,
    /// Message waiting to be dismissed.
    alert: Option<Alert>,
    /// Whether the application is still running.
    running: bool,
}

impl<S> App<S> {
    /// Get the store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the current task snapshot.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get the add-task form.
    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Check if the add-task modal is open.
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Get the highlighted row index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Get the pending alert, if any.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Check if the application is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One view per task, in snapshot order.
    pub fn item_views(&self) -> Vec<TaskItemView<'_>> {
        self.tasks.iter().map(TaskItemView::new).collect()
    }

    /// Keys of the rendered rows.
    pub fn item_keys(&self) -> Vec<TaskId> {
        self.item_views().iter().map(TaskItemView::key).collect()
    }

    /// Get the highlighted task, if any.
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    /// Request the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Show the add-task modal.
    pub fn open_add_modal(&mut self) {
        self.modal_open = true;
    }

    /// Hide the add-task modal without saving. Typed input is kept.
    pub fn cancel_add_modal(&mut self) {
        self.modal_open = false;
    }

    /// Remove the pending alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Move selection down. Clamps to the last item (does not wrap).
    pub fn select_next(&mut self) {
        let max_items = self.tasks.len();
        if max_items > 0 && self.selected_index < max_items - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up. Clamps to the first item (does not wrap).
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Keep the selection inside the snapshot after it changes size.
    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    fn raise(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }
}

impl<S: TaskStore> App<S> {
    /// Mount the screen on a store.
    ///
    /// Initializes the store, then loads the snapshot once.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Database` if the store cannot be initialized.
    /// A failed first load is not an error; it leaves an alert instead.
    pub async fn mount(store: S) -> TuiResult<Self> {
        store.initialize().await?;

        let mut app = Self {
            store,
            tasks: Vec::new(),
            form: TaskForm::new(),
            modal_open: false,
            selected_index: 0,
            alert: None,
            running: true,
        };
        app.reload().await;
        Ok(app)
    }

    /// Replace the snapshot with a fresh read of the store.
    ///
    /// On failure the previous snapshot is kept and an alert is raised.
    /// Returns whether the load succeeded.
    pub async fn reload(&mut self) -> bool {
        match self.store.list_tasks().await {
            Ok(tasks) => {
                debug!("Reloaded {} tasks", tasks.len());
                self.tasks = tasks;
                self.clamp_selection();
                true
            }
            Err(e) => {
                error!("Error loading tasks: {}", e.full_message());
                self.raise(Alert::error(LOAD_FAILED_MESSAGE));
                false
            }
        }
    }

    /// Save the form as a new task.
    ///
    /// A blank title raises an alert and leaves everything as is. On
    /// success the snapshot is reloaded, the form cleared, and the modal
    /// closed. On store failure the modal stays open with its input.
    pub async fn submit_new_task(&mut self) {
        if self.form.is_title_blank() {
            self.raise(Alert::error(EMPTY_TITLE_MESSAGE));
            return;
        }

        let result = self
            .store
            .add_task(self.form.title_text(), self.form.description_text())
            .await;

        match result {
            Ok(id) => {
                info!("Added task {}", id);
                self.reload().await;
                self.form.clear();
                self.modal_open = false;
            }
            Err(e) => {
                error!("Error adding task: {}", e.full_message());
                self.raise(Alert::error(ADD_FAILED_MESSAGE));
            }
        }
    }

    /// Delete a task, then reload.
    pub async fn request_delete(&mut self, id: TaskId) {
        if let Err(e) = self.store.delete_task(id).await {
            error!("Error deleting task {}: {}", id, e.full_message());
            self.raise(Alert::error(DELETE_FAILED_MESSAGE));
            return;
        }
        info!("Deleted task {}", id);
        self.reload().await;
    }

    /// Flip a task's completion flag, then reload.
    ///
    /// `current_completed` is the flag as displayed; zero becomes done and
    /// anything else becomes pending.
    pub async fn request_toggle(&mut self, id: TaskId, current_completed: i64) {
        let completed = current_completed == 0;
        if let Err(e) = self.store.set_completion(id, completed).await {
            error!("Error updating task {} status: {}", id, e.full_message());
            self.raise(Alert::error(TOGGLE_FAILED_MESSAGE));
            return;
        }
        info!("Set task {} completed={}", id, completed);
        self.reload().await;
    }

    /// Carry out an intent emitted by an item view.
    pub async fn dispatch(&mut self, intent: ItemIntent) {
        match intent {
            ItemIntent::Toggle { id, completed } => self.request_toggle(id, completed).await,
            ItemIntent::Delete { id } => self.request_delete(id).await,
        }
    }

    /// Handle a keyboard event.
    pub async fn handle_key(&mut self, key: &KeyEvent) {
        if is_interrupt(key) {
            self.quit();
            return;
        }

        // An open alert swallows the next key.
        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        if self.modal_open {
            self.handle_modal_key(key).await;
        } else {
            self.handle_list_key(key).await;
        }
    }

    async fn handle_modal_key(&mut self, key: &KeyEvent) {
        if is_escape(key) {
            self.cancel_add_modal();
        } else if is_enter(key) {
            self.submit_new_task().await;
        } else if is_next_field(key) || is_previous_field(key) {
            self.form.switch_field();
        } else if is_backspace(key) {
            self.form.backspace();
        } else if key.code == KeyCode::Left {
            self.form.cursor_left();
        } else if key.code == KeyCode::Right {
            self.form.cursor_right();
        } else if let Some(c) = typed_char(key) {
            self.form.type_char(c);
        }
    }

    async fn handle_list_key(&mut self, key: &KeyEvent) {
        if is_quit(key) {
            self.quit();
        } else if is_add(key) {
            self.open_add_modal();
        } else if is_down(key) {
            self.select_next();
        } else if is_up(key) {
            self.select_previous();
        } else if let Some(intent) = self
            .selected_task()
            .and_then(|task| TaskItemView::new(task).intent_for_key(key))
        {
            self.dispatch(intent).await;
        }
    }

    /// Run the main application loop.
    ///
    /// This initializes the terminal, runs the event loop, and ensures
    /// the terminal is restored on exit (even on panic).
    pub async fn run(&mut self) -> TuiResult<()> {
        let mut terminal = init_terminal()?;

        // The guard restores the terminal even if we panic
        let _guard = scopeguard::guard((), |()| {
            let _ = restore_terminal();
        });

        let result = self.event_loop(&mut terminal).await;

        drop(_guard);

        result
    }

    /// The main event loop.
    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> TuiResult<()> {
        while self.is_running() {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if let Some(key) = poll_key(Duration::from_millis(100))? {
                self.handle_key(&key).await;
            }
        }
        Ok(())
    }
}

/// Initialize the terminal for TUI rendering.
fn init_terminal() -> TuiResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
fn restore_terminal() -> TuiResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
