//! Add-task form state.
//!
//! Holds the two text inputs shown in the add-task modal and which of them
//! currently receives typed characters.

/// A single-line text input with a cursor.
///
/// The cursor counts characters, not bytes, so multi-byte input is safe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset of the `n`th character.
    fn byte_index(&self, n: usize) -> usize {
        self.value
            .char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Erase the text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Which input of the form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
}

impl FormField {
    /// The other field; the form only has two.
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Title,
        }
    }

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
        }
    }
}

/// State of the add-task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    pub focus: FormField,
}

impl TaskForm {
    /// Create an empty form with the title focused.
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_mut(&mut self) -> &mut InputField {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    /// Type a character into the focused input.
    pub fn type_char(&mut self, c: char) {
        self.focused_mut().handle_char(c);
    }

    /// Erase before the cursor in the focused input.
    pub fn backspace(&mut self) {
        self.focused_mut().handle_backspace();
    }

    /// Move the focused input's cursor left.
    pub fn cursor_left(&mut self) {
        self.focused_mut().move_cursor_left();
    }

    /// Move the focused input's cursor right.
    pub fn cursor_right(&mut self) {
        self.focused_mut().move_cursor_right();
    }

    /// Move focus to the other field.
    pub fn switch_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Whether the title is empty once surrounding whitespace is removed.
    pub fn is_title_blank(&self) -> bool {
        self.title.value().trim().is_empty()
    }

    /// Title as it will be stored.
    pub fn title_text(&self) -> &str {
        self.title.value().trim()
    }

    /// Description as it will be stored; blank input means none.
    pub fn description_text(&self) -> Option<&str> {
        let text = self.description.value().trim();
        (!text.is_empty()).then_some(text)
    }

    /// Empty both inputs and focus the title again.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.focus = FormField::Title;
    }
}
