use htmldom::{render_to_string, Attributes, Document, NodeRef};
use trellis::components::{Component, FieldContainer, MenuChildren, MenuContainer, MenuItem};
use trellis::error::ValidationError;
use trellis::validate::{Validate, ValidationMode};
use trellis::RenderContext;

fn cx() -> RenderContext {
    RenderContext::default()
}

// ============================================================================
// FieldContainer
// ============================================================================

#[test]
fn test_disabled_field_is_never_tabbable() {
    for requested in [None, Some(0), Some(3), Some(-5)] {
        let mut field = FieldContainer::new().disabled(true);
        if let Some(index) = requested {
            field = field.tab_index(index);
        }
        let el = field.render(&cx());
        assert_eq!(el.get_attr("tabindex"), Some("-1"));
    }
}

#[test]
fn test_enabled_field_honors_truthy_tab_index() {
    let el = FieldContainer::new().tab_index(3).render(&cx());
    assert_eq!(el.get_attr("tabindex"), Some("3"));
}

#[test]
fn test_enabled_field_treats_zero_as_unset() {
    let el = FieldContainer::new().tab_index(0).render(&cx());
    assert_eq!(el.get_attr("tabindex"), Some("-1"));

    let el = FieldContainer::new().render(&cx());
    assert_eq!(el.get_attr("tabindex"), Some("-1"));
}

#[test]
fn test_effective_tab_index() {
    assert_eq!(FieldContainer::effective_tab_index(true, Some(3)), -1);
    assert_eq!(FieldContainer::effective_tab_index(false, Some(3)), 3);
    assert_eq!(FieldContainer::effective_tab_index(false, Some(0)), -1);
    assert_eq!(FieldContainer::effective_tab_index(false, None), -1);
    // Negative values are truthy and pass through on an enabled field
    assert_eq!(FieldContainer::effective_tab_index(false, Some(-5)), -5);
    assert_eq!(FieldContainer::effective_tab_index(true, Some(-5)), -1);
}

#[test]
fn test_field_forwards_aria_attributes() {
    let el = FieldContainer::new()
        .aria("haspopup", "listbox")
        .attr("role", "combobox")
        .child("Choose")
        .render(&cx());

    assert_eq!(
        render_to_string(&el),
        r#"<div class="cds--list-box__field" aria-haspopup="listbox" role="combobox" tabindex="-1">Choose</div>"#
    );
}

#[test]
fn test_field_tab_index_cannot_be_passed_through() {
    let attrs = Attributes::new().with("tabindex", "0");
    let el = FieldContainer::new().disabled(true).attrs(attrs).render(&cx());
    assert_eq!(el.get_attr("tabindex"), Some("-1"));
}

#[test]
fn test_disabled_field_is_skipped_by_focus_order() {
    let mut doc = Document::new();
    let root = doc.mount(
        htmldom::Element::div()
            .child(FieldContainer::new().disabled(true).tab_index(1).render(&cx()))
            .child(FieldContainer::new().tab_index(1).render(&cx())),
    );

    let order = htmldom::collect_tabbable(&doc, root);
    assert_eq!(order.len(), 1);
}

// ============================================================================
// MenuContainer
// ============================================================================

#[test]
fn test_menu_role_and_id() {
    let el = MenuContainer::new("menu-1").render(&cx());

    assert_eq!(
        render_to_string(&el),
        r#"<ul id="menu-1" class="cds--list-box__menu" role="listbox"></ul>"#
    );
}

#[test]
fn test_menu_items_in_order() {
    let el = MenuContainer::new("menu-1")
        .children(vec![MenuItem::labeled("one"), MenuItem::labeled("two")])
        .render(&cx());

    let items: Vec<_> = el.element_children().collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].text_content(), "one");
    assert_eq!(items[1].text_content(), "two");
    assert!(items.iter().all(|i| i.tag == "li"));
}

#[test]
fn test_menu_single_item_and_appending() {
    let single = MenuContainer::new("m").children(MenuItem::labeled("a")).render(&cx());
    assert_eq!(single.element_children().count(), 1);

    let appended = MenuContainer::new("m")
        .item(MenuItem::labeled("a"))
        .item(MenuItem::labeled("b"))
        .item(MenuItem::labeled("c"))
        .render(&cx());
    assert_eq!(appended.text_content(), "abc");
}

#[test]
fn test_menu_boolean_children_render_empty() {
    for flag in [true, false] {
        let el = MenuContainer::new("menu-1").children(flag).render(&cx());
        assert_eq!(el.element_children().count(), 0);
        assert_eq!(el.get_attr("role"), Some("listbox"));
    }
}

#[test]
fn test_menu_pass_through_cannot_replace_structure() {
    let attrs = Attributes::new()
        .with("id", "other")
        .with("role", "menu")
        .with("class", "extra")
        .with("aria-labelledby", "label-1");
    let el = MenuContainer::new("menu-1").attrs(attrs).render(&cx());

    assert_eq!(el.id.as_deref(), Some("menu-1"));
    assert_eq!(el.get_attr("role"), Some("listbox"));
    assert_eq!(el.classes.to_string(), "cds--list-box__menu");
    assert_eq!(el.get_attr("aria-labelledby"), Some("label-1"));
}

#[test]
fn test_menu_forwards_node_ref() {
    let menu_ref = NodeRef::new();
    let mut doc = Document::new();
    let node = doc.mount(
        MenuContainer::new("menu-1")
            .node_ref(menu_ref.clone())
            .render(&cx()),
    );

    assert_eq!(menu_ref.get(), Some(node));
    assert_eq!(doc.get_element_by_id("menu-1"), Some(node));
}

#[test]
fn test_menu_children_into_items() {
    assert!(MenuChildren::None.into_items().is_empty());
    assert!(MenuChildren::Bool(true).into_items().is_empty());
    assert_eq!(MenuChildren::from(MenuItem::new()).into_items().len(), 1);
}

#[test]
fn test_menu_id_validation() {
    assert_eq!(
        MenuContainer::new("").validate(),
        Err(ValidationError::EmptyId {
            component: "MenuContainer"
        })
    );
    assert!(matches!(
        MenuContainer::new("menu 1").validate(),
        Err(ValidationError::InvalidId { .. })
    ));
    assert!(MenuContainer::new("menu-1").validate().is_ok());
}

#[test]
fn test_menu_empty_id_still_renders_outside_strict() {
    let el = MenuContainer::new("")
        .render(&cx().validation(ValidationMode::Warn));
    assert_eq!(el.get_attr("role"), Some("listbox"));

    let strict = cx().validation(ValidationMode::Strict);
    assert!(MenuContainer::new("").try_render(&strict).is_err());

    let off = cx().validation(ValidationMode::Off);
    assert!(MenuContainer::new("").try_render(&off).is_ok());
}

// ============================================================================
// MenuItem
// ============================================================================

#[test]
fn test_menu_item_markup() {
    let el = MenuItem::labeled("Option 1").render(&cx());
    assert_eq!(
        render_to_string(&el),
        concat!(
            r#"<li class="cds--list-box__menu-item" role="option" aria-selected="false" title="Option 1">"#,
            r#"<div class="cds--list-box__menu-item__option">Option 1</div></li>"#
        )
    );
}

#[test]
fn test_menu_item_states() {
    let el = MenuItem::new()
        .active(true)
        .highlighted(true)
        .disabled(true)
        .render(&cx());

    assert!(el.classes.contains("cds--list-box__menu-item--active"));
    assert!(el.classes.contains("cds--list-box__menu-item--highlighted"));
    assert_eq!(el.get_attr("aria-selected"), Some("true"));
    assert_eq!(el.get_attr("aria-disabled"), Some("true"));
}
