use htmldom::{collect_tabbable, is_tabbable, Document, Element, FocusState, NodeRef};

// ============================================================================
// Tabbability
// ============================================================================

#[test]
fn test_negative_tab_index_is_not_tabbable() {
    let mut doc = Document::new();
    let node = doc.mount(Element::div().tab_index(-1));
    assert!(!is_tabbable(&doc, node));
}

#[test]
fn test_div_without_tab_index_is_not_tabbable() {
    let mut doc = Document::new();
    let node = doc.mount(Element::div());
    assert!(!is_tabbable(&doc, node));
}

#[test]
fn test_native_controls_are_tabbable() {
    let mut doc = Document::new();
    let button = doc.mount(Element::button());
    let link = doc.mount(Element::new("a").attr("href", "#"));
    let anchor = doc.mount(Element::new("a"));

    assert!(is_tabbable(&doc, button));
    assert!(is_tabbable(&doc, link));
    assert!(!is_tabbable(&doc, anchor));
}

#[test]
fn test_disabled_button_is_not_tabbable() {
    let mut doc = Document::new();
    let node = doc.mount(Element::button().attr("disabled", ""));
    assert!(!is_tabbable(&doc, node));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_positive_tab_indexes_come_first() {
    let a = NodeRef::new();
    let b = NodeRef::new();
    let c = NodeRef::new();
    let d = NodeRef::new();

    let mut doc = Document::new();
    let root = doc.mount(
        Element::div()
            .child(Element::button().node_ref(a.clone()))
            .child(Element::div().tab_index(2).node_ref(b.clone()))
            .child(Element::div().tab_index(1).node_ref(c.clone()))
            .child(Element::div().tab_index(0).node_ref(d.clone())),
    );

    let order = collect_tabbable(&doc, root);
    let expected: Vec<_> = [c, b, a, d].iter().map(|r| r.get().unwrap()).collect();
    assert_eq!(order, expected);
}

#[test]
fn test_focus_next_and_prev_wrap() {
    let mut doc = Document::new();
    let root = doc.mount(
        Element::div()
            .child(Element::button().id("one"))
            .child(Element::button().id("two")),
    );
    let one = doc.get_element_by_id("one").unwrap();
    let two = doc.get_element_by_id("two").unwrap();

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&doc, root), Some(one));
    assert_eq!(focus.focus_next(&doc, root), Some(two));
    assert_eq!(focus.focus_next(&doc, root), Some(one));
    assert_eq!(focus.focus_prev(&doc, root), Some(two));
    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_focus_next_with_nothing_tabbable() {
    let mut doc = Document::new();
    let root = doc.mount(Element::div().child(Element::div().tab_index(-1)));

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&doc, root), None);
    assert_eq!(focus.focus_prev(&doc, root), None);
}
