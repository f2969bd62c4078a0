use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::TextStyle;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// What an element draws as and how the layout treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Stacks children top to bottom.
    #[default]
    Column,
    /// Places children left to right with a one cell gap.
    Row,
    Text,
    Button,
    Checkbox,
    /// Single-line text field. Text lives in `content`, caret in `cursor`.
    Input,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub kind: Kind,
    /// Form-style name token, used by checkboxes to carry the owner's identity.
    pub name: Option<String>,

    // Content
    pub content: Content,

    // Attributes
    pub checked: bool,
    /// Space separated class list.
    pub class: String,
    pub style: TextStyle,
    /// Fixed width in cells; `None` sizes to content.
    pub width: Option<u16>,
    /// Caret position (byte offset) for `Kind::Input`.
    pub cursor: usize,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// Set by the host from its `FocusState` before rendering.
    pub focused: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            kind: Kind::Column,
            name: None,
            content: Content::None,
            checked: false,
            class: String::new(),
            style: TextStyle::new(),
            width: None,
            cursor: 0,
            focusable: false,
            clickable: false,
            focused: false,
        }
    }
}

impl Element {
    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            kind: Kind::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            kind: Kind::Row,
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            kind: Kind::Text,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            kind: Kind::Button,
            content: Content::Text(label.into()),
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    pub fn checkbox(checked: bool) -> Self {
        Self {
            id: generate_id("checkbox"),
            kind: Kind::Checkbox,
            checked,
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    /// Create a text input element with the caret at the end of `value`.
    pub fn input(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            id: generate_id("input"),
            kind: Kind::Input,
            cursor: value.len(),
            content: Content::Text(value),
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // Attributes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self.push(child);
        }
        self
    }

    /// Append a child, turning any other content into an empty child list first.
    pub fn push(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            other => *other = Content::Children(vec![child]),
        }
    }

    /// Drop every child. Non-container content is left untouched.
    pub fn clear_children(&mut self) {
        if let Content::Children(children) = &mut self.content {
            children.clear();
        }
    }

    pub fn child_count(&self) -> usize {
        self.content.children().len()
    }

    pub fn child_at(&self, index: usize) -> Option<&Element> {
        self.content.children().get(index)
    }

    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut Element> {
        match &mut self.content {
            Content::Children(children) => children.get_mut(index),
            _ => None,
        }
    }

    /// Text of a text-bearing element (`Text`, `Button`, `Input`).
    pub fn text_content(&self) -> Option<&str> {
        self.content.text()
    }

    /// Replace the text of a text-bearing element.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }
}
