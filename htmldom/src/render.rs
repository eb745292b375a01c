//! HTML serialization.
//!
//! Attribute order is `id`, then `class`, then the remaining attributes in
//! insertion order. Attributes with an empty value are written bare.

use crate::document::{Document, ElementData, NodeId, NodeKind};
use crate::element::{Attributes, ClassList, Content, Element, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Serialize an unmounted element description.
pub fn render_to_string(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

pub(crate) fn document_to_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_document_node(&mut out, doc, node);
    out
}

fn write_element(out: &mut String, element: &Element) {
    write_open_tag(
        out,
        &element.tag,
        element.id.as_deref(),
        &element.classes,
        &element.attributes,
    );
    if is_void(&element.tag) {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => escape_text(out, text),
        Content::Children(children) => {
            for child in children {
                match child {
                    Node::Element(el) => write_element(out, el),
                    Node::Text(text) => escape_text(out, text),
                }
            }
        }
    }

    write_close_tag(out, &element.tag);
}

fn write_document_node(out: &mut String, doc: &Document, node: NodeId) {
    match doc.kind(node) {
        None => {}
        Some(NodeKind::Root) => {
            for child in doc.children(node) {
                write_document_node(out, doc, *child);
            }
        }
        Some(NodeKind::Text(text)) => escape_text(out, text),
        Some(NodeKind::Element(ElementData {
            tag,
            id,
            classes,
            attributes,
            ..
        })) => {
            write_open_tag(out, tag, id.as_deref(), classes, attributes);
            if is_void(tag) {
                return;
            }
            for child in doc.children(node) {
                write_document_node(out, doc, *child);
            }
            write_close_tag(out, tag);
        }
    }
}

fn write_open_tag(
    out: &mut String,
    tag: &str,
    id: Option<&str>,
    classes: &ClassList,
    attributes: &Attributes,
) {
    out.push('<');
    out.push_str(tag);
    if let Some(id) = id {
        write_attr(out, "id", id);
    }
    if !classes.is_empty() {
        write_attr(out, "class", &classes.to_string());
    }
    for (name, value) in attributes.iter() {
        write_attr(out, name, value);
    }
    out.push('>');
}

fn write_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if value.is_empty() {
        return;
    }
    out.push_str("=\"");
    escape_attr(out, value);
    out.push('"');
}

fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
