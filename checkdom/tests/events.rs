use checkdom::{
    collect_focusable, find_element, find_element_mut, hit_test, Element, FocusState, LayoutResult,
    Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn tree() -> Element {
    Element::col()
        .id("root")
        .child(Element::input("").id("field"))
        .child(
            Element::row()
                .id("controls")
                .child(Element::button("Post").id("post"))
                .child(Element::text("hint").id("hint")),
        )
        .child(Element::checkbox(false).id("box"))
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_finds_deepest_clickable() {
    let root = tree();
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 3)),
        ("field", Rect::new(0, 0, 10, 1)),
        ("controls", Rect::new(0, 1, 20, 1)),
        ("post", Rect::new(0, 1, 8, 1)),
        ("hint", Rect::new(9, 1, 4, 1)),
        ("box", Rect::new(0, 2, 3, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 2, 1), Some("post".to_string()));
    assert_eq!(hit_test(&layout, &root, 1, 2), Some("box".to_string()));
    // Text is not clickable and neither are its containers
    assert_eq!(hit_test(&layout, &root, 10, 1), None);
    assert_eq!(hit_test(&layout, &root, 50, 50), None);
}

#[test]
fn test_hit_test_skips_elements_without_layout() {
    let root = tree();
    let layout = create_layout(&[("root", Rect::new(0, 0, 20, 3))]);

    assert_eq!(hit_test(&layout, &root, 1, 2), None);
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_collect_focusable_in_tree_order() {
    assert_eq!(collect_focusable(&tree()), vec!["field", "post", "box"]);
}

#[test]
fn test_focus_next_and_prev_wrap() {
    let root = tree();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("field".to_string()));
    assert_eq!(focus.focus_next(&root), Some("post".to_string()));
    assert_eq!(focus.focus_next(&root), Some("box".to_string()));
    assert_eq!(focus.focus_next(&root), Some("field".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("box".to_string()));
}

#[test]
fn test_focus_prev_from_nothing_goes_to_last() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_prev(&tree()), Some("box".to_string()));
}

#[test]
fn test_retain_in_drops_missing_focus() {
    let mut focus = FocusState::new();
    focus.focus("gone");

    focus.retain_in(&tree());

    assert_eq!(focus.focused(), None);
}

#[test]
fn test_apply_marks_only_focused_element() {
    let mut root = tree();
    let mut focus = FocusState::new();
    focus.focus("post");

    focus.apply(&mut root);

    assert!(find_element(&root, "post").unwrap().focused);
    assert!(!find_element(&root, "field").unwrap().focused);
    assert!(!root.focused);
}

#[test]
fn test_find_element_mut_updates_in_place() {
    let mut root = tree();

    find_element_mut(&mut root, "box").unwrap().checked = true;

    assert!(find_element(&root, "box").unwrap().checked);
    assert!(find_element_mut(&mut root, "missing").is_none());
}
