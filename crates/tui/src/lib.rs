//! Terminal to-do list screen.
//!
//! A single screen listing tasks, a modal form to add one, and per-row
//! controls to toggle or delete, rendered with ratatui and crossterm.

pub mod alert;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod form;
pub mod item;
pub mod ui;

pub use alert::Alert;
pub use app::App;
pub use error::{TuiError, TuiResult};
pub use form::{FormField, InputField, TaskForm};
pub use item::{ItemIntent, TaskItemView};
