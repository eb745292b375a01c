//! The [`Element`] builder.

use super::{Attributes, ClassList, Content, Node};
use crate::document::NodeRef;
use crate::event::{EventContext, EventKind, Handlers};

/// Declarative description of an HTML element.
///
/// Elements are cheap to build and are realized into a
/// [`Document`](crate::Document) by mounting.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,

    // Markup
    pub classes: ClassList,
    pub attributes: Attributes,
    pub content: Content,

    // Behavior
    pub handlers: Handlers,
    /// Filled with the realized node when this element is mounted.
    pub node_ref: Option<NodeRef>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: ClassList::new(),
            attributes: Attributes::new(),
            content: Content::None,
            handlers: Handlers::default(),
            node_ref: None,
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn td() -> Self {
        Self::new("td")
    }

    pub fn ul() -> Self {
        Self::new("ul")
    }

    pub fn li() -> Self {
        Self::new("li")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Classes
    /// Add one or more whitespace-separated class tokens.
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        self.classes.extend_str(classes.as_ref());
        self
    }

    pub fn class_if(self, condition: bool, classes: impl AsRef<str>) -> Self {
        if condition {
            self.class(classes)
        } else {
            self
        }
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes.extend(&classes);
        self
    }

    // Attributes
    /// Set an attribute. `id` and `class` are routed to their dedicated fields.
    pub fn attr(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set_attr(name.as_ref(), value.into());
        self
    }

    /// Apply a set of pass-through attributes.
    pub fn attrs(mut self, attributes: Attributes) -> Self {
        for (name, value) in attributes.iter() {
            self.set_attr(name, value.to_string());
        }
        self
    }

    fn set_attr(&mut self, name: &str, value: String) {
        match name.to_ascii_lowercase().as_str() {
            "id" => self.id = Some(value),
            "class" => self.classes.extend_str(&value),
            _ => self.attributes.set(name, value),
        }
    }

    /// Set a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    /// Set an `aria-*` attribute.
    pub fn aria(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("aria-{key}"), value)
    }

    pub fn role(self, role: impl Into<String>) -> Self {
        self.attr("role", role)
    }

    pub fn tab_index(self, index: i32) -> Self {
        self.attr("tabindex", index.to_string())
    }

    /// Read a stored attribute. Classes live in [`Element::class_name`].
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case("id") {
            return self.id.as_deref();
        }
        self.attributes.get(name)
    }

    /// Whether rendering this element would write the attribute.
    pub fn has_attr(&self, name: &str) -> bool {
        if name.eq_ignore_ascii_case("class") {
            return !self.classes.is_empty();
        }
        self.get_attr(name).is_some()
    }

    /// The `class` attribute value, or `None` when there are no classes.
    pub fn class_name(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.to_string())
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.attributes.get(&format!("data-{key}"))
    }

    // Behavior
    /// Bind a handler for the given event kind. Handlers run in binding order.
    pub fn on(mut self, kind: EventKind, handler: impl Fn(&mut EventContext<'_>) + 'static) -> Self {
        self.handlers.push(kind, handler);
        self
    }

    /// Append previously collected handlers after the ones already bound.
    pub fn handlers(mut self, handlers: Handlers) -> Self {
        self.handlers.extend(handlers);
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                // Keep existing text as the first child
                let text = Node::Text(std::mem::take(text));
                self.content = Content::Children(vec![text, child]);
            }
        }
        self
    }

    pub fn children<I, N>(mut self, new_children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        for child in new_children {
            self = self.child(child);
        }
        self
    }

    /// Iterate over element children, skipping text.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        let children: &[Node] = match &self.content {
            Content::Children(children) => children,
            _ => &[],
        };
        children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                match child {
                    Node::Element(el) => collect_text(el, out),
                    Node::Text(text) => out.push_str(text),
                }
            }
        }
    }
}
