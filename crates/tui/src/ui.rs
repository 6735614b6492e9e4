//! UI rendering for the TUI.
//!
//! Provides layout and widget rendering using ratatui.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListState, Paragraph, Wrap},
};

use crate::alert::Alert;
use crate::app::App;
use crate::form::{FormField, InputField, TaskForm};

/// Shown in place of the list when there are no tasks.
pub const EMPTY_MESSAGE: &str = "No tasks";

/// Hint below the empty-state message.
pub const EMPTY_HINT: &str = "Press [a] to add a new task";

/// Legend text for the list.
const LIST_LEGEND: &str =
    " [j/k] Navigate  [Space] Toggle  [d] Delete  [a] Add task  [q] Quit ";

/// Legend text while the add-task modal is open.
const MODAL_LEGEND: &str = " [Enter] Save  [Tab] Switch field  [Esc] Cancel ";

/// Legend text while an alert is shown.
const ALERT_LEGEND: &str = " Press any key to continue ";

/// Height of the add-task modal: border, two inputs, hint, border.
const MODAL_HEIGHT: u16 = 10;

/// Height of an alert: border, message, blank, hint, border.
const ALERT_HEIGHT: u16 = 5;

/// Header text with the task count.
pub fn header_title(count: usize) -> String {
    format!("Task List ({})", count)
}

/// Draw the entire UI.
pub fn draw<S>(frame: &mut Frame, app: &App<S>) {
    let chunks = create_main_layout(frame.area());

    draw_header(frame, chunks[0], app.tasks().len());
    draw_task_list(frame, chunks[1], app);
    draw_legend(frame, chunks[2], legend_for(app));

    if app.is_modal_open() {
        draw_add_modal(frame, frame.area(), app.form());
    }

    if let Some(alert) = app.alert() {
        draw_alert(frame, frame.area(), alert);
    }
}

/// Create the main three-part layout: header, list, legend.
fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Legend bar
        ])
        .split(area)
        .to_vec()
}

fn legend_for<S>(app: &App<S>) -> &'static str {
    if app.alert().is_some() {
        ALERT_LEGEND
    } else if app.is_modal_open() {
        MODAL_LEGEND
    } else {
        LIST_LEGEND
    }
}

/// Draw the title bar with the task count.
fn draw_header(frame: &mut Frame, area: Rect, count: usize) {
    let header = Paragraph::new(header_title(count))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(header, area);
}

/// Draw the task rows, or the empty state when there are none.
fn draw_task_list<S>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let block = Block::default()
        .title(" Tasks ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.tasks().is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(EMPTY_HINT, Style::default().fg(Color::DarkGray))),
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<_> = app
        .item_views()
        .iter()
        .map(|view| view.to_list_item())
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected_index()));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the legend bar at the bottom.
fn draw_legend(frame: &mut Frame, area: Rect, text: &'static str) {
    let legend = Paragraph::new(text).style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(legend, area);
}

/// Draw the add-task modal over the screen.
fn draw_add_modal(frame: &mut Frame, area: Rect, form: &TaskForm) {
    let area = centered_rect(60, MODAL_HEIGHT, area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title input
            Constraint::Length(3), // Description input
            Constraint::Min(0),
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    draw_input(frame, rows[0], FormField::Title, &form.title, form.focus);
    draw_input(
        frame,
        rows[1],
        FormField::Description,
        &form.description,
        form.focus,
    );

    let hint = Paragraph::new("[Enter] Save").alignment(Alignment::Right);
    frame.render_widget(hint, rows[3]);
}

/// Draw one labelled input box, placing the cursor if it has focus.
fn draw_input(frame: &mut Frame, area: Rect, field: FormField, input: &InputField, focus: FormField) {
    let focused = field == focus;
    let border_color = if focused { Color::Yellow } else { Color::Gray };
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let cursor = u16::try_from(input.cursor()).unwrap_or(u16::MAX);
    let scroll = input_scroll(cursor, inner.width);
    let paragraph = Paragraph::new(input.value())
        .scroll((0, scroll))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let offset = (cursor - scroll).min(inner.width - 1);
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}

/// Columns to skip so the cursor stays inside an input `width` wide.
fn input_scroll(cursor: u16, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    cursor.saturating_sub(width - 1)
}

/// Draw an alert dialog over the screen.
fn draw_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let area = centered_rect(50, ALERT_HEIGHT, area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let text = vec![
        Line::from(Span::styled(
            alert.message.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("OK", Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// A rectangle `percent_x` wide and `height` tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use todolist_db::{MemoryStore, TaskStore};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render<S>(app: &App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_header_title_includes_count() {
        assert_eq!(header_title(0), "Task List (0)");
        assert_eq!(header_title(12), "Task List (12)");
    }

    #[test]
    fn test_legends_not_empty() {
        assert!(!LIST_LEGEND.is_empty());
        assert!(!MODAL_LEGEND.is_empty());
        assert!(!ALERT_LEGEND.is_empty());
    }

    #[test]
    fn test_create_main_layout_produces_three_chunks() {
        let chunks = create_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(chunks.len(), 3, "Expected 3 chunks: header, list, legend");
        assert_eq!(chunks[0].height, 3);
        assert_eq!(chunks[2].height, 1);
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(50, 5, area);
        assert_eq!(rect, Rect::new(20, 9, 40, 5));
    }

    #[test]
    fn test_centered_rect_clamps_height() {
        let area = Rect::new(0, 0, 40, 3);
        let rect = centered_rect(60, MODAL_HEIGHT, area);
        assert_eq!(rect.height, 3);
        assert!(rect.right() <= area.right());
    }

    #[tokio::test]
    async fn test_empty_store_renders_empty_state() {
        let app = App::mount(MemoryStore::new()).await.unwrap();
        let screen = render(&app);

        assert!(screen.contains("Task List (0)"));
        assert!(screen.contains(EMPTY_MESSAGE));
        assert!(screen.contains(EMPTY_HINT));
    }

    #[tokio::test]
    async fn test_rows_render_each_task() {
        let store = MemoryStore::new();
        store.add_task("Buy milk", Some("2%")).await.unwrap();
        store.add_task("Walk dog", None).await.unwrap();
        let app = App::mount(store).await.unwrap();

        let screen = render(&app);
        assert!(screen.contains("Task List (2)"));
        assert!(screen.contains("[ ] Buy milk"));
        assert!(screen.contains("2%"));
        assert!(screen.contains("[ ] Walk dog"));
        assert!(!screen.contains(EMPTY_MESSAGE));
    }

    #[tokio::test]
    async fn test_modal_renders_over_list() {
        let mut app = App::mount(MemoryStore::new()).await.unwrap();
        app.open_add_modal();

        let screen = render(&app);
        assert!(screen.contains("Add Task"));
        assert!(screen.contains("Title"));
        assert!(screen.contains("Description"));
        assert!(screen.contains(MODAL_LEGEND.trim()));
    }

    #[test]
    fn test_input_scroll_keeps_cursor_visible() {
        assert_eq!(input_scroll(0, 44), 0);
        assert_eq!(input_scroll(43, 44), 0);
        assert_eq!(input_scroll(44, 44), 1);
        assert_eq!(input_scroll(62, 44), 19);
        assert_eq!(input_scroll(u16::MAX, 44), u16::MAX - 43);
        assert_eq!(input_scroll(10, 0), 0);
    }

    #[tokio::test]
    async fn test_long_title_scrolls_to_cursor() {
        let mut app = App::mount(MemoryStore::new()).await.unwrap();
        app.open_add_modal();
        let title = format!("{}XYZ", "a".repeat(59));
        for c in title.chars() {
            app.handle_key(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .await;
        }
        assert_eq!(app.form().title.value(), title);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("aXYZ"), "end of a long title should be visible");

        let cursor = terminal.get_cursor_position().unwrap();
        let row = screen.lines().nth(usize::from(cursor.y)).unwrap();
        let before_cursor: String = row.chars().take(usize::from(cursor.x)).collect();
        assert!(
            before_cursor.ends_with("XYZ"),
            "cursor should sit right after the typed text, row: {:?}",
            row
        );
    }

    #[tokio::test]
    async fn test_alert_renders_message() {
        let mut app = App::mount(MemoryStore::new()).await.unwrap();
        app.open_add_modal();
        app.submit_new_task().await;

        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Task title cannot be empty"));
    }
}
