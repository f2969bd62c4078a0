use crate::element::Element;
use crate::event::{Key, Modifiers};

/// Outcome of feeding a key to a [`TextInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Text changed.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Caret moved, text unchanged.
    Handled,
    /// Key is not for the input; the caller may route it elsewhere.
    Ignored,
}

/// Single-line text field state: text content and caret (byte offset).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text, placing the caret at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Handle an editing key. Ctrl/Alt chords are left to the caller.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> InputResult {
        if modifiers.ctrl || modifiers.alt {
            return InputResult::Ignored;
        }

        match key {
            Key::Char(c) if !c.is_control() => {
                self.insert(c);
                InputResult::Changed
            }
            Key::Enter => InputResult::Submitted,
            Key::Backspace => match self.prev_boundary() {
                Some(prev) => {
                    self.text.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    InputResult::Changed
                }
                None => InputResult::Handled,
            },
            Key::Delete => match self.next_boundary() {
                Some(next) => {
                    self.text.replace_range(self.cursor..next, "");
                    InputResult::Changed
                }
                None => InputResult::Handled,
            },
            Key::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                InputResult::Handled
            }
            Key::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                InputResult::Handled
            }
            Key::Home => {
                self.cursor = 0;
                InputResult::Handled
            }
            Key::End => {
                self.cursor = self.text.len();
                InputResult::Handled
            }
            _ => InputResult::Ignored,
        }
    }

    /// Build the element that displays this input.
    pub fn element(&self, id: impl Into<String>, width: u16) -> Element {
        Element::input(self.text.clone())
            .id(id)
            .cursor(self.cursor)
            .width(width)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
