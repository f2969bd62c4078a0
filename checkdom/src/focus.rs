use crate::element::Element;

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.step(root, 1)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.step(root, -1)
    }

    fn step(&mut self, root: &Element, delta: isize) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let len = focusable.len() as isize;
        let current = self
            .focused
            .as_ref()
            .and_then(|current| focusable.iter().position(|id| id == current));
        let new_focus = match current {
            Some(i) => focusable[(i as isize + delta).rem_euclid(len) as usize].clone(),
            None if delta < 0 => focusable[focusable.len() - 1].clone(),
            None => focusable[0].clone(),
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Drop focus if the focused element is no longer in the tree.
    pub fn retain_in(&mut self, root: &Element) {
        if let Some(current) = &self.focused {
            if !collect_focusable(root).contains(current) {
                log::debug!("focus target {current} left the tree");
                self.focused = None;
            }
        }
    }

    /// Mark the focused element in `root` so the renderer can highlight it.
    pub fn apply(&self, root: &mut Element) {
        root.focused = self.focused.as_deref() == Some(root.id.as_str());
        if let crate::element::Content::Children(children) = &mut root.content {
            for child in children {
                self.apply(child);
            }
        }
    }
}

/// IDs of all focusable elements in tree order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable {
        result.push(element.id.clone());
    }
    for child in element.content.children() {
        collect_focusable_recursive(child, result);
    }
}
