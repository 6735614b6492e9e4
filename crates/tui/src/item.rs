//! Rendering of a single task row.
//!
//! A `TaskItemView` is stateless: it formats one task and translates key
//! presses into [`ItemIntent`]s for the screen to carry out. It never talks
//! to the store.

use crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use todolist_db::{Task, TaskId};

use crate::event::{is_delete, is_toggle};

/// Checkbox shown for done tasks.
const CHECKED: &str = "[x]";
/// Checkbox shown for pending tasks.
const UNCHECKED: &str = "[ ]";

/// Request emitted by an item for the screen to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemIntent {
    /// Flip completion; carries the flag as currently displayed.
    Toggle { id: TaskId, completed: i64 },
    /// Remove the task.
    Delete { id: TaskId },
}

/// View over one task in the list.
#[derive(Debug, Clone, Copy)]
pub struct TaskItemView<'a> {
    task: &'a Task,
}

impl<'a> TaskItemView<'a> {
    pub fn new(task: &'a Task) -> Self {
        Self { task }
    }

    /// Key identifying this row in the list: the task id.
    pub fn key(&self) -> TaskId {
        self.task.id
    }

    /// The toggle intent for this task.
    pub fn on_toggle(&self) -> ItemIntent {
        ItemIntent::Toggle {
            id: self.task.id,
            completed: self.task.completed,
        }
    }

    /// The delete intent for this task.
    pub fn on_delete(&self) -> ItemIntent {
        ItemIntent::Delete { id: self.task.id }
    }

    /// Translate a key press on this row into an intent, if it is one.
    pub fn intent_for_key(&self, key: &KeyEvent) -> Option<ItemIntent> {
        if is_toggle(key) {
            Some(self.on_toggle())
        } else if is_delete(key) {
            Some(self.on_delete())
        } else {
            None
        }
    }

    fn checkbox(&self) -> &'static str {
        if self.task.is_completed() {
            CHECKED
        } else {
            UNCHECKED
        }
    }

    fn title_style(&self) -> Style {
        if self.task.is_completed() {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Lines making up this row: title line, then the description if any.
    pub fn lines(&self) -> Vec<Line<'a>> {
        let checkbox_style = if self.task.is_completed() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(self.checkbox(), checkbox_style),
            Span::raw(" "),
            Span::styled(self.task.title.as_str(), self.title_style()),
        ])];

        if let Some(description) = self.task.description.as_deref() {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(description, Style::default().fg(Color::Gray)),
            ]));
        }

        lines
    }

    /// Build the list widget item for this row.
    pub fn to_list_item(&self) -> ListItem<'a> {
        ListItem::new(self.lines())
    }
}
