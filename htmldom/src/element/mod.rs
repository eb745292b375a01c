//! Declarative element tree and lookups over it.

mod attributes;
mod class_list;
mod content;
mod node;

pub use attributes::Attributes;
pub use class_list::ClassList;
pub use content::{Content, Node};
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    for child in root.element_children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect every element carrying the given attribute, in document order.
pub fn find_by_attribute<'a>(root: &'a Element, name: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_attribute(root, name, &mut found);
    found
}

fn collect_by_attribute<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    if element.has_attr(name) {
        found.push(element);
    }
    for child in element.element_children() {
        collect_by_attribute(child, name, found);
    }
}
