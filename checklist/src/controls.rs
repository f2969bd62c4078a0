//! What the hosting shell feeds into a [`crate::Checklist`].

use checkdom::TextInput;

use crate::model::ItemId;

/// One user action, already stripped of any platform default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Post the value source's text as a new item.
    Submit,
    /// Check every item.
    MarkAll,
    /// Uncheck every item.
    ClearChecks,
    /// Remove every item.
    DeleteAll,
    /// A single item's toggle was activated.
    Toggle(ItemId),
}

/// The input field new item text is read from.
pub trait ValueSource {
    fn value(&self) -> &str;
    fn clear(&mut self);
}

impl ValueSource for TextInput {
    fn value(&self) -> &str {
        self.text()
    }

    fn clear(&mut self) {
        TextInput::clear(self);
    }
}

impl ValueSource for String {
    fn value(&self) -> &str {
        self
    }

    fn clear(&mut self) {
        String::clear(self);
    }
}
