use crate::model::ItemId;
use crate::reconcile::{LabelClass, Surface};

/// One node group as a [`MemorySurface`] stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryGroup {
    pub token: String,
    pub checked: bool,
    pub label: String,
    pub class: LabelClass,
}

/// A change that was visible on a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    Append(ItemId),
    SetLabelText { index: usize, text: String },
    SetChecked { index: usize, checked: bool },
    SetLabelClass { index: usize, class: LabelClass },
    Clear,
}

/// Headless [`Surface`] that journals every effective change.
///
/// Writes that leave a value as it was are not journaled, so an empty
/// journal after a pass means nothing visible happened.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    groups: Vec<MemoryGroup>,
    journal: Vec<SurfaceOp>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[MemoryGroup] {
        &self.groups
    }

    pub fn journal(&self) -> &[SurfaceOp] {
        &self.journal
    }

    pub fn take_journal(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.journal)
    }
}

impl Surface for MemorySurface {
    type Handle = usize;

    fn append_group(&mut self, id: ItemId, content: &str) -> usize {
        self.groups.push(MemoryGroup {
            token: id.to_string(),
            checked: false,
            label: content.to_string(),
            class: LabelClass::Plain,
        });
        self.journal.push(SurfaceOp::Append(id));
        self.groups.len() - 1
    }

    fn label_text(&self, handle: &usize) -> Option<&str> {
        self.groups.get(*handle).map(|group| group.label.as_str())
    }

    fn set_label_text(&mut self, handle: &usize, text: &str) {
        let Some(group) = self.groups.get_mut(*handle) else {
            return;
        };
        if group.label != text {
            group.label = text.to_string();
            self.journal.push(SurfaceOp::SetLabelText {
                index: *handle,
                text: text.to_string(),
            });
        }
    }

    fn toggle_checked(&self, handle: &usize) -> Option<bool> {
        self.groups.get(*handle).map(|group| group.checked)
    }

    fn set_toggle_checked(&mut self, handle: &usize, checked: bool) {
        let Some(group) = self.groups.get_mut(*handle) else {
            return;
        };
        if group.checked != checked {
            group.checked = checked;
            self.journal.push(SurfaceOp::SetChecked {
                index: *handle,
                checked,
            });
        }
    }

    fn set_label_class(&mut self, handle: &usize, class: LabelClass) {
        let Some(group) = self.groups.get_mut(*handle) else {
            return;
        };
        if group.class != class {
            group.class = class;
            self.journal.push(SurfaceOp::SetLabelClass {
                index: *handle,
                class,
            });
        }
    }

    fn clear(&mut self) {
        self.groups.clear();
        self.journal.push(SurfaceOp::Clear);
    }

    fn len(&self) -> usize {
        self.groups.len()
    }
}
