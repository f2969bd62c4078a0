use checkdom::{Element, Kind};

use crate::model::ItemId;
use crate::reconcile::{LabelClass, Surface};

const TOGGLE: usize = 0;
const LABEL: usize = 1;

/// Position of a node group inside the container.
///
/// Groups are only appended and only removed all together, so the index
/// stays valid until the next wipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomHandle {
    index: usize,
}

impl DomHandle {
    pub fn index(&self) -> usize {
        self.index
    }
}

/// [`Surface`] backed by a `checkdom` column. Each group is a row holding a
/// checkbox (named by the item id) and a text label.
#[derive(Debug, Clone)]
pub struct DomSurface {
    container: Element,
}

impl DomSurface {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container: Element::col().id(container_id),
        }
    }

    /// The container element, ready to be placed in a larger tree.
    pub fn container(&self) -> &Element {
        &self.container
    }

    fn part(&self, handle: &DomHandle, part: usize) -> Option<&Element> {
        self.container.child_at(handle.index)?.child_at(part)
    }

    fn part_mut(&mut self, handle: &DomHandle, part: usize) -> Option<&mut Element> {
        self.container
            .child_at_mut(handle.index)?
            .child_at_mut(part)
    }
}

impl Surface for DomSurface {
    type Handle = DomHandle;

    fn append_group(&mut self, id: ItemId, content: &str) -> DomHandle {
        let token = id.to_string();
        let class = LabelClass::Plain;
        let group = Element::row()
            .id(format!("{token}-row"))
            .child(
                Element::checkbox(false)
                    .id(format!("{token}-toggle"))
                    .name(token.clone()),
            )
            .child(
                Element::text(content)
                    .id(format!("{token}-label"))
                    .class(class.as_str())
                    .style(class.text_style()),
            );

        let index = self.container.child_count();
        self.container.push(group);
        DomHandle { index }
    }

    fn label_text(&self, handle: &DomHandle) -> Option<&str> {
        self.part(handle, LABEL)?.text_content()
    }

    fn set_label_text(&mut self, handle: &DomHandle, text: &str) {
        if let Some(label) = self.part_mut(handle, LABEL) {
            label.set_text(text);
        }
    }

    fn toggle_checked(&self, handle: &DomHandle) -> Option<bool> {
        self.part(handle, TOGGLE)
            .filter(|toggle| toggle.kind == Kind::Checkbox)
            .map(|toggle| toggle.checked)
    }

    fn set_toggle_checked(&mut self, handle: &DomHandle, checked: bool) {
        if let Some(toggle) = self.part_mut(handle, TOGGLE) {
            toggle.checked = checked;
        }
    }

    fn set_label_class(&mut self, handle: &DomHandle, class: LabelClass) {
        let Some(label) = self.part_mut(handle, LABEL) else {
            return;
        };
        if label.class != class.as_str() {
            label.class = class.as_str().to_string();
        }
        label.style = class.text_style();
    }

    fn clear(&mut self) {
        self.container.clear_children();
    }

    fn len(&self) -> usize {
        self.container.child_count()
    }
}
