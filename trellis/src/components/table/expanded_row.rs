//! Expansion row for data tables.
//!
//! An expansion row sits directly after the row that toggles it. While the
//! pointer is over the expansion content, the toggling row keeps its hover
//! highlight: entering adds `{prefix}--expandable-row--hover` to the previous
//! element sibling, leaving removes it.

use htmldom::{Attributes, ClassList, Document, Element, EventKind, Handlers, Node, NodeRef};

use super::TableCell;
use crate::components::Component;
use crate::context::RenderContext;
use crate::error::ValidationError;
use crate::prefix::Prefix;
use crate::validate::Validate;

/// Marker attribute composite tables use to find expansion rows.
pub const CHILD_ROW_ATTR: &str = "data-child-row";

#[derive(Debug, Clone)]
pub struct ExpandableRow {
    col_span: u32,
    class_name: Option<String>,
    attributes: Attributes,
    handlers: Handlers,
    children: Vec<Node>,
}

impl ExpandableRow {
    /// `col_span` must match the number of columns in the parent table.
    pub fn new(col_span: u32) -> Self {
        Self {
            col_span,
            class_name: None,
            attributes: Attributes::new(),
            handlers: Handlers::new(),
            children: Vec::new(),
        }
    }

    /// Extra classes appended after the structural one.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Pass-through attributes for the `<tr>`. They cannot replace the
    /// structural class or the child-row marker.
    pub fn attrs(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Extra handler on the row. Runs after hover propagation.
    pub fn on(
        mut self,
        kind: EventKind,
        handler: impl Fn(&mut htmldom::EventContext<'_>) + 'static,
    ) -> Self {
        self.handlers.push(kind, handler);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Class applied to the toggling row while the expansion is hovered.
    ///
    /// Composites that track hover themselves can apply it directly instead
    /// of relying on sibling lookup.
    pub fn parent_hover_class(prefix: &Prefix) -> String {
        prefix.class("expandable-row--hover")
    }
}

/// Add or remove `class` on the element right before the row.
///
/// Does nothing if the row is not mounted or has no previous element sibling.
fn toggle_parent_hover(doc: &mut Document, row: &NodeRef, class: &str, hovered: bool) {
    let Some(row) = row.get() else {
        return;
    };
    let Some(parent_row) = doc.previous_element_sibling(row) else {
        return;
    };
    if let Ok(classes) = doc.class_list_mut(parent_row) {
        classes.toggle(class, Some(hovered));
    }
}

impl Validate for ExpandableRow {
    fn validate(&self) -> Result<(), ValidationError> {
        // The column span is required by `new`; any value is accepted.
        Ok(())
    }
}

impl Component for ExpandableRow {
    fn build(self, cx: &RenderContext) -> Element {
        let row_ref = NodeRef::new();
        let hover_class = Self::parent_hover_class(cx.prefix());
        let classes = ClassList::from_parts([
            Some(cx.class("expandable-row")),
            self.class_name,
        ]);

        let enter = (row_ref.clone(), hover_class.clone());
        let leave = (row_ref.clone(), hover_class);

        let inner = Element::div()
            .class(cx.class("child-row-inner-container"))
            .children(self.children);
        let cell = TableCell::new()
            .col_span(self.col_span)
            .child(inner)
            .render(cx);

        let mut row = Element::tr()
            .node_ref(row_ref)
            .on(EventKind::MouseEnter, move |ev| {
                toggle_parent_hover(ev.document_mut(), &enter.0, &enter.1, true);
            })
            .on(EventKind::MouseLeave, move |ev| {
                toggle_parent_hover(ev.document_mut(), &leave.0, &leave.1, false);
            })
            .handlers(self.handlers)
            .attrs(self.attributes);

        // Structural attributes win over pass-through ones
        row.classes = classes;
        row.attributes.remove(CHILD_ROW_ATTR);
        row.data("child-row", "true").child(cell)
    }
}
