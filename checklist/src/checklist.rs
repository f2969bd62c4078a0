use crate::controls::{Notification, ValueSource};
use crate::model::{Item, ItemId, TodoList};
use crate::reconcile::{ReconcileStats, Reconciler, Surface};

/// The list widget: model plus the reconciler that draws it.
///
/// Every mutator runs to completion, reconciliation included, before it
/// returns. Nothing here fails: empty input and unknown ids are ignored.
pub struct Checklist<S: Surface> {
    list: TodoList,
    reconciler: Reconciler<S>,
}

impl<S: Surface> Checklist<S> {
    pub fn new(surface: S) -> Self {
        Self {
            list: TodoList::new(),
            reconciler: Reconciler::new(surface),
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    pub fn surface(&self) -> &S {
        self.reconciler.surface()
    }

    pub fn reconciler(&self) -> &Reconciler<S> {
        &self.reconciler
    }

    /// Append an item and draw it. Empty or blank content is ignored and
    /// triggers no reconciliation.
    pub fn add(&mut self, content: &str) -> Option<ItemId> {
        let Some(id) = self.list.add(content) else {
            log::debug!("ignoring blank item content");
            return None;
        };
        log::debug!("added {id}");
        self.reconcile();
        Some(id)
    }

    /// Flip one item. Unknown ids are ignored; returns whether one matched.
    pub fn toggle_one(&mut self, id: ItemId) -> bool {
        if !self.list.toggle_one(id) {
            log::debug!("toggle for unknown item {id} ignored");
            return false;
        }
        self.reconcile();
        true
    }

    /// Check (`true`) or uncheck (`false`) every item.
    pub fn toggle_all(&mut self, checked: bool) {
        self.list.toggle_all(checked);
        self.reconcile();
    }

    /// Empty the list and wipe the surface directly, bypassing
    /// reconciliation. Ids keep counting from where they were.
    pub fn delete_all(&mut self) {
        log::debug!("deleting {} items", self.list.len());
        self.list.clear();
        self.reconciler.wipe();
    }

    pub fn reconcile(&mut self) -> ReconcileStats {
        self.reconciler.reconcile(self.list.items())
    }

    /// Route a notification from the shell's controls.
    ///
    /// `Submit` always empties `input`, even when its text is rejected.
    pub fn dispatch(&mut self, notification: Notification, input: &mut impl ValueSource) {
        match notification {
            Notification::Submit => {
                let content = input.value().to_string();
                input.clear();
                self.add(&content);
            }
            Notification::MarkAll => self.toggle_all(true),
            Notification::ClearChecks => self.toggle_all(false),
            Notification::DeleteAll => self.delete_all(),
            Notification::Toggle(id) => {
                self.toggle_one(id);
            }
        }
    }
}
