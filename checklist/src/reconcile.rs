//! Projection of the list model onto a rendering surface.
//!
//! The reconciler keeps a side-table from [`ItemId`] to the surface's own
//! handle type. Node groups are created lazily on the first pass that sees
//! an item and are never reordered or removed one by one; the only removal
//! is [`Reconciler::wipe`], which clears the surface wholesale.

use std::collections::HashMap;

use checkdom::TextStyle;

use crate::model::{Item, ItemId};

/// Style classification of an item's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelClass {
    #[default]
    Plain,
    Checked,
}

impl LabelClass {
    pub fn for_checked(checked: bool) -> Self {
        if checked { Self::Checked } else { Self::Plain }
    }

    /// Class list as it appears on the label node.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "lbl",
            Self::Checked => "lbl lbl-checked",
        }
    }

    /// Text attributes a terminal surface draws the label with.
    pub fn text_style(self) -> TextStyle {
        match self {
            Self::Plain => TextStyle::new(),
            Self::Checked => TextStyle::new().strikethrough().dim(),
        }
    }
}

/// A place item node groups are drawn into.
///
/// Each group is a toggle control named by the item id plus a text label.
/// Groups are appended in order and only ever removed all at once.
pub trait Surface {
    /// Opaque reference to one node group.
    type Handle;

    /// Append a new group at the end: unchecked toggle, label showing
    /// `content` with the plain class.
    fn append_group(&mut self, id: ItemId, content: &str) -> Self::Handle;

    /// Displayed label text, or `None` if the handle no longer resolves.
    fn label_text(&self, handle: &Self::Handle) -> Option<&str>;

    fn set_label_text(&mut self, handle: &Self::Handle, text: &str);

    /// Displayed toggle state, or `None` if the handle no longer resolves.
    fn toggle_checked(&self, handle: &Self::Handle) -> Option<bool>;

    fn set_toggle_checked(&mut self, handle: &Self::Handle, checked: bool);

    fn set_label_class(&mut self, handle: &Self::Handle, class: LabelClass);

    /// Remove every group.
    fn clear(&mut self);

    /// Number of groups on the surface.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What one reconciliation pass had to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileStats {
    pub created: usize,
    pub text_updates: usize,
    pub toggle_updates: usize,
}

impl ReconcileStats {
    pub fn changed(&self) -> bool {
        self.created + self.text_updates + self.toggle_updates > 0
    }
}

/// Drives a [`Surface`] so it mirrors a slice of items.
pub struct Reconciler<S: Surface> {
    surface: S,
    handles: HashMap<ItemId, S::Handle>,
}

impl<S: Surface> Reconciler<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            handles: HashMap::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct access to the surface. Edits made here are overwritten by the
    /// next [`reconcile`](Self::reconcile) wherever they disagree with the items.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Handle recorded for `id`, if its group has been drawn.
    pub fn handle(&self, id: ItemId) -> Option<&S::Handle> {
        self.handles.get(&id)
    }

    /// Bring the surface in line with `items`. O(n) in the number of items.
    pub fn reconcile(&mut self, items: &[Item]) -> ReconcileStats {
        let mut stats = ReconcileStats::default();

        for item in items {
            let surface = &mut self.surface;
            let handle = self.handles.entry(item.id()).or_insert_with(|| {
                stats.created += 1;
                surface.append_group(item.id(), item.content())
            });

            if surface.label_text(handle) != Some(item.content()) {
                surface.set_label_text(handle, item.content());
                stats.text_updates += 1;
            }

            if surface.toggle_checked(handle) != Some(item.checked()) {
                surface.set_toggle_checked(handle, item.checked());
                stats.toggle_updates += 1;
            }

            // Always recomputed, not only when the toggle changed.
            surface.set_label_class(handle, LabelClass::for_checked(item.checked()));
        }

        log::trace!("reconciled {} items: {stats:?}", items.len());
        stats
    }

    /// Remove every group from the surface and forget all handles.
    pub fn wipe(&mut self) {
        self.surface.clear();
        self.handles.clear();
    }
}
