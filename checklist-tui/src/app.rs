//! The hosting shell: owns the checklist, draws the chrome around it and
//! turns terminal input into notifications.

use std::time::Duration;

use checkdom::{
    find_element, hit_test, Element, Event, FocusState, InputResult, Kind, LayoutResult,
    Terminal, TextInput, TextStyle,
};
use checklist::{Checklist, DomSurface, ItemId, Notification};

use crate::error::AppError;
use crate::keymap::{global_action, is_activation, Action};

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_WIDTH: u16 = 32;

const INPUT_ID: &str = "new-todo";
const SUBMIT_ID: &str = "submit";
const MARK_ALL_ID: &str = "mark-all";
const CLEAR_ID: &str = "clear";
const DELETE_ID: &str = "delete";
const LIST_ID: &str = "list";

const HELP: &str =
    "Enter post/toggle · Tab move · Ctrl+A mark all · Ctrl+U clear · Ctrl+D delete · Esc quit";

pub struct App {
    checklist: Checklist<DomSurface>,
    input: TextInput,
    focus: FocusState,
    quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let mut focus = FocusState::new();
        focus.focus(INPUT_ID);
        Self {
            checklist: Checklist::new(DomSurface::new(LIST_ID)),
            input: TextInput::default(),
            focus,
            quit: false,
        }
    }

    pub fn run(mut self, terminal: &mut Terminal) -> Result<(), AppError> {
        let mut root = self.view();
        terminal.render(&root)?;

        while !self.quit {
            for event in terminal.poll(POLL_INTERVAL)? {
                self.handle_event(event, &root, terminal.layout());
                if self.quit {
                    break;
                }
                // Later events in the batch hit-test against the new frame
                root = self.view();
                terminal.render(&root)?;
            }
        }
        Ok(())
    }

    /// Build the full element tree for the current state.
    pub fn view(&self) -> Element {
        let controls = Element::row()
            .id("controls")
            .child(self.input.element(INPUT_ID, INPUT_WIDTH))
            .child(Element::button("Post Todo").id(SUBMIT_ID))
            .child(Element::button("Mark All").id(MARK_ALL_ID))
            .child(Element::button("Clear").id(CLEAR_ID))
            .child(Element::button("Delete").id(DELETE_ID));

        let mut root = Element::col()
            .id("root")
            .child(Element::text("Todo").style(TextStyle::new().bold()))
            .child(controls)
            .child(Element::text(""))
            .child(self.checklist.surface().container().clone())
            .child(Element::text(""))
            .child(Element::text(HELP).style(TextStyle::new().dim()));

        self.focus.apply(&mut root);
        root
    }

    /// React to one event. `rendered` and `layout` describe the frame the
    /// user is looking at.
    pub fn handle_event(&mut self, event: Event, rendered: &Element, layout: &LayoutResult) {
        match event {
            Event::Key { key, modifiers } => {
                if let Some(action) = global_action(key, modifiers) {
                    self.perform(action);
                    return;
                }

                if self.focus.focused() == Some(INPUT_ID) {
                    match self.input.handle_key(key, modifiers) {
                        InputResult::Submitted => self.notify(Notification::Submit),
                        InputResult::Changed | InputResult::Handled | InputResult::Ignored => {}
                    }
                    return;
                }

                if is_activation(key, modifiers) {
                    if let Some(id) = self.focus.focused().map(str::to_string) {
                        self.activate(&id);
                    }
                }
            }
            Event::Click { x, y, .. } => {
                let Some(id) = hit_test(layout, rendered, x, y) else {
                    return;
                };
                if find_element(&self.view(), &id).is_none() {
                    log::debug!("ignoring click on removed element {id}");
                    return;
                }
                self.focus.focus(&id);
                self.activate(&id);
            }
            Event::Resize { width, height } => {
                log::debug!("resized to {width}x{height}");
            }
        }
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Notify(notification) => self.notify(notification),
            Action::FocusNext => {
                let root = self.view();
                self.focus.focus_next(&root);
            }
            Action::FocusPrev => {
                let root = self.view();
                self.focus.focus_prev(&root);
            }
            Action::Quit => {
                log::info!("quit requested");
                self.quit = true;
            }
        }
    }

    /// Activate the control with element id `id`.
    fn activate(&mut self, id: &str) {
        let notification = match id {
            INPUT_ID => return,
            SUBMIT_ID => Notification::Submit,
            MARK_ALL_ID => Notification::MarkAll,
            CLEAR_ID => Notification::ClearChecks,
            DELETE_ID => Notification::DeleteAll,
            other => match self.toggle_target(other) {
                Some(item) => Notification::Toggle(item),
                None => return,
            },
        };
        self.notify(notification);
    }

    /// The item a checkbox element belongs to, read from its name token.
    fn toggle_target(&self, element_id: &str) -> Option<ItemId> {
        let element = find_element(self.checklist.surface().container(), element_id)?;
        if element.kind != Kind::Checkbox {
            return None;
        }
        let token = element.name.as_deref()?;
        match token.parse() {
            Ok(id) => Some(id),
            Err(err) => {
                log::warn!("ignoring toggle from {element_id}: {err}");
                None
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        log::debug!("notification {notification:?}");
        self.checklist.dispatch(notification, &mut self.input);
        if notification == Notification::DeleteAll {
            // The focused checkbox may be gone
            let root = self.view();
            self.focus.retain_in(&root);
        }
    }
}
