//! Key bindings that apply regardless of which control has focus.

use checkdom::{Key, Modifiers};
use checklist::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Notify(Notification),
    FocusNext,
    FocusPrev,
    Quit,
}

pub fn global_action(key: Key, modifiers: Modifiers) -> Option<Action> {
    if modifiers.ctrl {
        return match key {
            Key::Char('c') | Key::Char('q') => Some(Action::Quit),
            Key::Char('a') => Some(Action::Notify(Notification::MarkAll)),
            Key::Char('u') => Some(Action::Notify(Notification::ClearChecks)),
            Key::Char('d') => Some(Action::Notify(Notification::DeleteAll)),
            _ => None,
        };
    }

    match key {
        Key::Escape => Some(Action::Quit),
        Key::Tab if modifiers.shift => Some(Action::FocusPrev),
        Key::Tab | Key::Down => Some(Action::FocusNext),
        Key::BackTab | Key::Up => Some(Action::FocusPrev),
        _ => None,
    }
}

/// Whether the key activates the focused button or checkbox.
pub fn is_activation(key: Key, modifiers: Modifiers) -> bool {
    modifiers.none() && matches!(key, Key::Enter | Key::Char(' '))
}
