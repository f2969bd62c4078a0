use checklist::{
    Checklist, DomSurface, ItemId, LabelClass, MemorySurface, ReconcileStats, Reconciler, Surface,
    SurfaceOp, TodoList,
};

fn checklist(contents: &[&str]) -> Checklist<MemorySurface> {
    let mut checklist = Checklist::new(MemorySurface::new());
    for content in contents {
        checklist.add(content);
    }
    checklist
}

// ============================================================================
// Lazy creation
// ============================================================================

#[test]
fn test_groups_are_created_once_in_list_order() {
    let mut checklist = checklist(&["a", "b"]);
    checklist.add("c");

    let tokens: Vec<_> = checklist
        .surface()
        .groups()
        .iter()
        .map(|group| group.token.as_str())
        .collect();
    assert_eq!(tokens, ["todo-0", "todo-1", "todo-2"]);

    let appends = checklist
        .surface()
        .journal()
        .iter()
        .filter(|op| matches!(op, SurfaceOp::Append(_)))
        .count();
    assert_eq!(appends, 3);
}

#[test]
fn test_handles_are_recorded_in_side_table() {
    let checklist = checklist(&["a", "b"]);

    assert_eq!(checklist.reconciler().handle(ItemId::new(0)), Some(&0));
    assert_eq!(checklist.reconciler().handle(ItemId::new(1)), Some(&1));
    assert_eq!(checklist.reconciler().handle(ItemId::new(2)), None);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_second_reconcile_is_a_noop() {
    let mut checklist = checklist(&["a", "b", "c"]);
    checklist.toggle_one(ItemId::new(1));
    checklist.reconcile();
    let groups = checklist.surface().groups().to_vec();

    let journal_len = checklist.surface().journal().len();

    let stats = checklist.reconcile();

    assert_eq!(stats, ReconcileStats::default());
    assert!(!stats.changed());
    assert_eq!(checklist.surface().groups(), groups.as_slice());
    assert_eq!(checklist.surface().journal().len(), journal_len);
}

#[test]
fn test_toggle_updates_only_the_changed_group() {
    let mut checklist = checklist(&["a", "b", "c"]);
    let before = checklist.surface().journal().len();

    checklist.toggle_one(ItemId::new(2));

    assert_eq!(
        &checklist.surface().journal()[before..],
        &[
            SurfaceOp::SetChecked {
                index: 2,
                checked: true
            },
            SurfaceOp::SetLabelClass {
                index: 2,
                class: LabelClass::Checked
            },
        ]
    );
}

#[test]
fn test_mutators_leave_nothing_for_an_explicit_pass() {
    let mut checklist = checklist(&["a", "b"]);
    checklist.toggle_all(true);
    checklist.add("c");

    // Everything was already drawn by the mutators above
    assert_eq!(checklist.reconcile(), ReconcileStats::default());
}

// ============================================================================
// Unknown ids and blank input
// ============================================================================

#[test]
fn test_unknown_toggle_triggers_no_surface_change() {
    let mut checklist = checklist(&["a"]);
    let before = checklist.surface().journal().len();

    assert!(!checklist.toggle_one(ItemId::new(7)));

    assert_eq!(checklist.surface().journal().len(), before);
}

#[test]
fn test_blank_add_triggers_no_surface_change() {
    let mut checklist = checklist(&["a"]);
    let before = checklist.surface().journal().len();

    assert_eq!(checklist.add(" "), None);

    assert_eq!(checklist.surface().journal().len(), before);
    assert_eq!(checklist.items().len(), 1);
}

// ============================================================================
// delete_all
// ============================================================================

#[test]
fn test_delete_all_wipes_surface_without_reconciling() {
    let mut checklist = checklist(&["a", "b"]);
    let before = checklist.surface().journal().len();

    checklist.delete_all();

    assert!(checklist.items().is_empty());
    assert!(checklist.surface().is_empty());
    assert_eq!(
        &checklist.surface().journal()[before..],
        &[SurfaceOp::Clear]
    );
    assert_eq!(checklist.reconciler().handle(ItemId::new(0)), None);
}

#[test]
fn test_items_added_after_delete_get_fresh_groups() {
    let mut checklist = checklist(&["a", "b"]);
    checklist.delete_all();

    let id = checklist.add("c").unwrap();

    assert_eq!(id, ItemId::new(2));
    assert_eq!(checklist.surface().len(), 1);
    assert_eq!(checklist.surface().groups()[0].token, "todo-2");
    assert_eq!(checklist.reconciler().handle(id), Some(&0));
}

// ============================================================================
// DomSurface
// ============================================================================

#[test]
fn test_dom_surface_builds_row_per_item() {
    let mut checklist = Checklist::new(DomSurface::new("todo-list"));
    checklist.add("buy milk");

    let container = checklist.surface().container();
    assert_eq!(container.id, "todo-list");
    assert_eq!(container.child_count(), 1);

    let row = container.child_at(0).unwrap();
    let toggle = row.child_at(0).unwrap();
    let label = row.child_at(1).unwrap();
    assert_eq!(toggle.name.as_deref(), Some("todo-0"));
    assert_eq!(toggle.id, "todo-0-toggle");
    assert!(!toggle.checked);
    assert_eq!(label.text_content(), Some("buy milk"));
    assert_eq!(label.class, "lbl");
    assert!(!label.style.strikethrough);
}

#[test]
fn test_dom_surface_checked_label_is_struck_through() {
    let mut checklist = Checklist::new(DomSurface::new("todo-list"));
    let id = checklist.add("buy milk").unwrap();

    checklist.toggle_one(id);

    let row = checklist.surface().container().child_at(0).unwrap();
    assert!(row.child_at(0).unwrap().checked);
    let label = row.child_at(1).unwrap();
    assert_eq!(label.class, "lbl lbl-checked");
    assert!(label.has_class("lbl-checked"));
    assert!(label.style.strikethrough);
}

#[test]
fn test_dom_surface_second_reconcile_leaves_tree_equal() {
    let mut checklist = Checklist::new(DomSurface::new("todo-list"));
    checklist.add("a");
    checklist.add("b");
    checklist.toggle_one(ItemId::new(0));
    let before = checklist.surface().container().clone();

    let stats = checklist.reconcile();

    assert!(!stats.changed());
    assert_eq!(checklist.surface().container(), &before);
}

#[test]
fn test_dom_surface_stale_handle_reads_nothing() {
    let mut surface = DomSurface::new("todo-list");
    let handle = surface.append_group(ItemId::new(0), "a");
    surface.clear();

    assert_eq!(surface.label_text(&handle), None);
    assert_eq!(surface.toggle_checked(&handle), None);
    // Writes through a stale handle are dropped
    surface.set_toggle_checked(&handle, true);
    assert!(surface.is_empty());
}

// ============================================================================
// Repairing a drifted surface
// ============================================================================

/// Surface whose groups can be edited behind the reconciler's back.
#[derive(Default)]
struct EditableSurface {
    groups: Vec<(String, bool, LabelClass)>,
}

impl Surface for EditableSurface {
    type Handle = usize;

    fn append_group(&mut self, _id: ItemId, content: &str) -> usize {
        self.groups.push((content.to_string(), false, LabelClass::Plain));
        self.groups.len() - 1
    }

    fn label_text(&self, handle: &usize) -> Option<&str> {
        self.groups.get(*handle).map(|group| group.0.as_str())
    }

    fn set_label_text(&mut self, handle: &usize, text: &str) {
        if let Some(group) = self.groups.get_mut(*handle) {
            group.0 = text.to_string();
        }
    }

    fn toggle_checked(&self, handle: &usize) -> Option<bool> {
        self.groups.get(*handle).map(|group| group.1)
    }

    fn set_toggle_checked(&mut self, handle: &usize, checked: bool) {
        if let Some(group) = self.groups.get_mut(*handle) {
            group.1 = checked;
        }
    }

    fn set_label_class(&mut self, handle: &usize, class: LabelClass) {
        if let Some(group) = self.groups.get_mut(*handle) {
            group.2 = class;
        }
    }

    fn clear(&mut self) {
        self.groups.clear();
    }

    fn len(&self) -> usize {
        self.groups.len()
    }
}

fn drawn(contents: &[&str]) -> (TodoList, Reconciler<EditableSurface>) {
    let mut list = TodoList::new();
    for content in contents {
        list.add(content);
    }
    let mut reconciler = Reconciler::new(EditableSurface::default());
    reconciler.reconcile(list.items());
    (list, reconciler)
}

#[test]
fn test_drifted_label_text_is_restored() {
    let (list, mut reconciler) = drawn(&["a", "b"]);
    reconciler.surface_mut().set_label_text(&1, "edited");

    let stats = reconciler.reconcile(list.items());

    assert_eq!(
        stats,
        ReconcileStats {
            text_updates: 1,
            ..Default::default()
        }
    );
    assert_eq!(reconciler.surface().label_text(&1), Some("b"));
    assert_eq!(reconciler.reconcile(list.items()), ReconcileStats::default());
}

#[test]
fn test_drifted_toggle_is_restored() {
    let (list, mut reconciler) = drawn(&["a", "b"]);
    reconciler.surface_mut().set_toggle_checked(&0, true);

    let stats = reconciler.reconcile(list.items());

    assert_eq!(
        stats,
        ReconcileStats {
            toggle_updates: 1,
            ..Default::default()
        }
    );
    assert_eq!(reconciler.surface().toggle_checked(&0), Some(false));
    assert_eq!(reconciler.reconcile(list.items()), ReconcileStats::default());
}

#[test]
fn test_drifted_class_is_recomputed() {
    let (mut list, mut reconciler) = drawn(&["a"]);
    list.toggle_all(true);
    reconciler.reconcile(list.items());
    reconciler.surface_mut().set_label_class(&0, LabelClass::Plain);

    // The toggle already agrees, the class is still rewritten
    assert_eq!(reconciler.reconcile(list.items()), ReconcileStats::default());
    assert_eq!(reconciler.surface().groups[0].2, LabelClass::Checked);
}
