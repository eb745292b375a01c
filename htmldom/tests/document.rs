use std::cell::Cell;
use std::rc::Rc;

use htmldom::{Document, DomError, Element, EventKind, NodeRef};

fn table_body() -> (Document, NodeRef, NodeRef, NodeRef) {
    let first = NodeRef::new();
    let second = NodeRef::new();
    let body = NodeRef::new();
    let mut doc = Document::new();
    doc.mount(
        Element::tbody()
            .node_ref(body.clone())
            .child(Element::tr().id("first").node_ref(first.clone()))
            .child("\n")
            .child(Element::tr().id("second").node_ref(second.clone())),
    );
    (doc, body, first, second)
}

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn test_mount_fills_node_refs() {
    let (doc, body, first, second) = table_body();

    assert!(body.is_mounted());
    assert!(first.is_mounted());
    assert_eq!(doc.tag(second.get().unwrap()), Some("tr"));
    assert_eq!(doc.parent(first.get().unwrap()), body.get());
}

#[test]
fn test_mount_into_text_node_fails() {
    let mut doc = Document::new();
    let div = doc.mount(Element::div().text("hello"));
    let text = doc.children(div)[0];

    assert_eq!(
        doc.mount_into(text, Element::span()),
        Err(DomError::NotAnElement(text))
    );
}

#[test]
fn test_unmount_clears_refs() {
    let (mut doc, body, first, _) = table_body();
    let body_id = body.get().unwrap();

    doc.unmount(body_id).unwrap();

    assert!(!body.is_mounted());
    assert!(!first.is_mounted());
    assert!(!doc.is_attached(body_id));
    assert!(doc.get_element_by_id("first").is_none());
    assert_eq!(doc.unmount(body_id), Err(DomError::Detached(body_id)));
}

#[test]
fn test_unmount_root_rejected() {
    let mut doc = Document::new();
    let root = doc.root();
    assert_eq!(doc.unmount(root), Err(DomError::RootNode));
}

// ============================================================================
// Siblings
// ============================================================================

#[test]
fn test_previous_element_sibling_skips_text() {
    let (doc, _, first, second) = table_body();
    let second_id = second.get().unwrap();

    assert_eq!(doc.previous_element_sibling(second_id), first.get());
    // The raw previous sibling is the whitespace text node
    let raw = doc.previous_sibling(second_id).unwrap();
    assert!(!doc.is_element(raw));
}

#[test]
fn test_first_child_has_no_previous_sibling() {
    let (doc, _, first, second) = table_body();
    let first_id = first.get().unwrap();

    assert_eq!(doc.previous_element_sibling(first_id), None);
    assert_eq!(doc.next_element_sibling(first_id), second.get());
}

// ============================================================================
// Attributes & classes
// ============================================================================

#[test]
fn test_attribute_roundtrip() {
    let mut doc = Document::new();
    let node = doc.mount(Element::div().id("box").attr("aria-hidden", "true"));

    assert_eq!(doc.attribute(node, "id"), Some("box"));
    assert_eq!(doc.attribute(node, "ARIA-HIDDEN"), Some("true"));

    doc.set_attribute(node, "title", "Box").unwrap();
    assert_eq!(doc.attribute(node, "title"), Some("Box"));
    assert_eq!(doc.remove_attribute(node, "title"), Ok(true));
    assert_eq!(doc.remove_attribute(node, "title"), Ok(false));
}

#[test]
fn test_class_list_mut() {
    let mut doc = Document::new();
    let node = doc.mount(Element::div().class("a b"));

    doc.class_list_mut(node).unwrap().add("c");
    doc.class_list_mut(node).unwrap().remove("a");

    let classes = doc.class_list(node).unwrap();
    assert_eq!(classes.to_string(), "b c");
}

#[test]
fn test_queries() {
    let mut doc = Document::new();
    doc.mount(
        Element::div()
            .child(Element::div().data("child-row", "true").class("x"))
            .child(Element::div().class("x"))
            .child(Element::div().data("child-row", "true")),
    );

    assert_eq!(doc.query_by_attribute("data-child-row").len(), 2);
    assert_eq!(doc.query_by_class("x").len(), 2);
}

#[test]
fn test_text_content() {
    let mut doc = Document::new();
    let node = doc.mount(
        Element::div()
            .child("a")
            .child(Element::span().text("b"))
            .child("c"),
    );
    assert_eq!(doc.text_content(node), "abc");
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_runs_matching_handlers_in_order() {
    let log = Rc::new(std::cell::RefCell::new(Vec::new()));
    let first = Rc::clone(&log);
    let second = Rc::clone(&log);

    let mut doc = Document::new();
    let node = doc.mount(
        Element::div()
            .on(EventKind::MouseEnter, move |_| first.borrow_mut().push("first"))
            .on(EventKind::MouseLeave, |_| panic!("wrong kind"))
            .on(EventKind::MouseEnter, move |_| second.borrow_mut().push("second")),
    );

    assert_eq!(doc.dispatch(node, EventKind::MouseEnter), 2);
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn test_handler_can_mutate_document() {
    let mut doc = Document::new();
    let node = doc.mount(Element::div().on(EventKind::Click, |cx| {
        let target = cx.target();
        cx.document_mut()
            .class_list_mut(target)
            .unwrap()
            .add("clicked");
    }));

    doc.dispatch(node, EventKind::Click);
    assert!(doc.class_list(node).unwrap().contains("clicked"));
}

#[test]
fn test_dispatch_on_detached_node_is_ignored() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let mut doc = Document::new();
    let node = doc.mount(Element::div().on(EventKind::Click, move |_| {
        counter.set(counter.get() + 1)
    }));
    doc.unmount(node).unwrap();

    assert_eq!(doc.dispatch(node, EventKind::Click), 0);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_class_attribute_follows_class_list() {
    let mut doc = Document::new();
    let styled = doc.mount(Element::div().class("a b"));
    let plain = doc.mount(Element::div());

    assert_eq!(doc.class_name(styled).as_deref(), Some("a b"));
    assert_eq!(doc.class_name(plain), None);
    assert!(doc.has_attribute(styled, "class"));
    assert!(!doc.has_attribute(plain, "class"));
    assert_eq!(doc.query_by_attribute("class"), vec![styled]);

    doc.class_list_mut(styled).unwrap().remove("a");
    doc.class_list_mut(styled).unwrap().remove("b");
    assert!(!doc.has_attribute(styled, "class"));
    assert!(!doc.to_html(styled).contains("class"));
}
