//! Mounted element trees.
//!
//! A [`Document`] is an arena of realized nodes. Mounting an [`Element`]
//! assigns every node a stable [`NodeId`], records parent and sibling
//! relations, and fills any [`NodeRef`] attached to the description so
//! handlers can find their own node later.

mod node_ref;

use std::fmt;

pub use node_ref::NodeRef;

use crate::element::{Attributes, ClassList, Content, Element, Node};
use crate::error::DomError;
use crate::event::{EventContext, EventKind, Handlers};

/// Stable identifier of a node inside one [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub(crate) struct ElementData {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: ClassList,
    pub(crate) attributes: Attributes,
    pub(crate) handlers: Handlers,
    pub(crate) node_ref: Option<NodeRef>,
}

#[derive(Debug)]
pub(crate) enum NodeKind {
    Root,
    Element(ElementData),
    Text(String),
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attached: bool,
}

#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
                attached: true,
            }],
        }
    }

    /// The document root. It is not an element and is never serialized.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    // =========================================================================
    // Mounting
    // =========================================================================

    /// Mount an element tree as the last child of the document root.
    pub fn mount(&mut self, element: Element) -> NodeId {
        let root = self.root();
        self.insert_element(root, element)
    }

    /// Mount an element tree as the last child of `parent`.
    pub fn mount_into(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        let data = self.node(parent)?;
        if !data.attached {
            return Err(DomError::Detached(parent));
        }
        if matches!(data.kind, NodeKind::Text(_)) {
            return Err(DomError::NotAnElement(parent));
        }
        Ok(self.insert_element(parent, element))
    }

    /// Detach a subtree. Its node refs are cleared; ids are never reused.
    pub fn unmount(&mut self, node: NodeId) -> Result<(), DomError> {
        if node == self.root() {
            return Err(DomError::RootNode);
        }
        let data = self.node(node)?;
        if !data.attached {
            return Err(DomError::Detached(node));
        }
        let parent = data.parent;

        if let Some(parent) = parent {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
        self.nodes[node.0].parent = None;

        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            let data = &mut self.nodes[current.0];
            data.attached = false;
            if let NodeKind::Element(el) = &data.kind {
                if let Some(node_ref) = &el.node_ref {
                    node_ref.set(None);
                }
            }
            stack.extend(data.children.iter().copied());
        }

        log::debug!("[document] unmounted {node}");
        Ok(())
    }

    fn insert_element(&mut self, parent: NodeId, element: Element) -> NodeId {
        let Element {
            tag,
            id,
            classes,
            attributes,
            content,
            handlers,
            node_ref,
        } = element;

        let node = self.push_node(
            parent,
            NodeKind::Element(ElementData {
                tag,
                id,
                classes,
                attributes,
                handlers,
                node_ref: node_ref.clone(),
            }),
        );

        match content {
            Content::None => {}
            Content::Text(text) => {
                self.push_node(node, NodeKind::Text(text));
            }
            Content::Children(children) => {
                for child in children {
                    match child {
                        Node::Element(el) => {
                            self.insert_element(node, el);
                        }
                        Node::Text(text) => {
                            self.push_node(node, NodeKind::Text(text));
                        }
                    }
                }
            }
        }

        if let Some(node_ref) = node_ref {
            node_ref.set(Some(node));
        }
        node
    }

    fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            attached: true,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    // =========================================================================
    // Structure
    // =========================================================================

    fn node(&self, id: NodeId) -> Result<&NodeData, DomError> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
    }

    fn element(&self, id: NodeId) -> Result<&ElementData, DomError> {
        match &self.node(id)?.kind {
            NodeKind::Element(el) => Ok(el),
            _ => Err(DomError::NotAnElement(id)),
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        let data = self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))?;
        match &mut data.kind {
            NodeKind::Element(el) => Ok(el),
            _ => Err(DomError::NotAnElement(id)),
        }
    }

    pub(crate) fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|n| &n.kind)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(|n| n.attached)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_ok()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Element children only, skipping text nodes.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.is_element(*c))
            .collect()
    }

    fn position_in_parent(&self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(id)?;
        let idx = self.children(parent).iter().position(|c| *c == id)?;
        Some((parent, idx))
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let (parent, idx) = self.position_in_parent(id)?;
        idx.checked_sub(1).map(|i| self.children(parent)[i])
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let (parent, idx) = self.position_in_parent(id)?;
        self.children(parent).get(idx + 1).copied()
    }

    /// Nearest preceding sibling that is an element.
    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let (parent, idx) = self.position_in_parent(id)?;
        self.children(parent)[..idx]
            .iter()
            .rev()
            .copied()
            .find(|c| self.is_element(*c))
    }

    /// Nearest following sibling that is an element.
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let (parent, idx) = self.position_in_parent(id)?;
        self.children(parent)[idx + 1..]
            .iter()
            .copied()
            .find(|c| self.is_element(*c))
    }

    /// Descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    // =========================================================================
    // Element data
    // =========================================================================

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).ok().map(|el| el.tag.as_str())
    }

    /// Read a stored attribute. `id` is served from the element identity.
    /// `class` is derived from the class list, read it with
    /// [`Document::class_name`].
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let el = self.element(id).ok()?;
        if name.eq_ignore_ascii_case("id") {
            return el.id.as_deref();
        }
        el.attributes.get(name)
    }

    /// Whether serializing the node would write this attribute.
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        if name.eq_ignore_ascii_case("class") {
            return self.class_name(id).is_some();
        }
        self.attribute(id, name).is_some()
    }

    /// The `class` attribute value, or `None` when the element has no classes.
    pub fn class_name(&self, id: NodeId) -> Option<String> {
        let classes = self.class_list(id)?;
        (!classes.is_empty()).then(|| classes.to_string())
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        let el = self.element_mut(id)?;
        match name.to_ascii_lowercase().as_str() {
            "id" => el.id = Some(value.into()),
            "class" => el.classes = ClassList::from(value.into().as_str()),
            _ => el.attributes.set(name, value),
        }
        Ok(())
    }

    /// Remove an attribute. Returns whether it was present.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<bool, DomError> {
        let el = self.element_mut(id)?;
        let removed = match name.to_ascii_lowercase().as_str() {
            "id" => el.id.take().is_some(),
            "class" => {
                let had = !el.classes.is_empty();
                el.classes = ClassList::new();
                had
            }
            _ => el.attributes.remove(name).is_some(),
        };
        Ok(removed)
    }

    pub fn class_list(&self, id: NodeId) -> Option<&ClassList> {
        self.element(id).ok().map(|el| &el.classes)
    }

    pub fn class_list_mut(&mut self, id: NodeId) -> Result<&mut ClassList, DomError> {
        self.element_mut(id).map(|el| &mut el.classes)
    }

    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(NodeKind::Text(text)) = self.kind(id) {
            out.push_str(text);
        }
        for node in self.descendants(id) {
            if let Some(NodeKind::Text(text)) = self.kind(node) {
                out.push_str(text);
            }
        }
        out
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// First attached element with the given id, in document order.
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|n| matches!(self.element(*n), Ok(el) if el.id.as_deref() == Some(element_id)))
    }

    /// All attached elements carrying the attribute, in document order.
    pub fn query_by_attribute(&self, name: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|n| self.has_attribute(*n, name))
            .collect()
    }

    /// All attached elements carrying the class token, in document order.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|n| self.class_list(*n).is_some_and(|c| c.contains(class)))
            .collect()
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Deliver an event to `target`, running its handlers for `kind` in
    /// binding order. Returns how many handlers ran.
    ///
    /// Detached nodes and text nodes have no handlers.
    pub fn dispatch(&mut self, target: NodeId, kind: EventKind) -> usize {
        if !self.is_attached(target) {
            log::debug!("[dispatch] {kind:?} on detached/unknown {target}, ignored");
            return 0;
        }
        let handlers = match self.element(target) {
            Ok(el) => el.handlers.for_kind(kind),
            Err(_) => return 0,
        };

        log::debug!("[dispatch] {kind:?} -> {target} ({} handlers)", handlers.len());

        let mut cx = EventContext::new(self, target, kind);
        for handler in &handlers {
            handler(&mut cx);
        }
        handlers.len()
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Serialize a mounted subtree. The root serializes its children.
    pub fn to_html(&self, id: NodeId) -> String {
        crate::render::document_to_html(self, id)
    }
}
