//! Plain table data cell.

use htmldom::{Attributes, Element, Node};

use crate::components::Component;
use crate::context::RenderContext;
use crate::error::ValidationError;
use crate::validate::Validate;

/// A single `<td>` cell.
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    col_span: Option<u32>,
    attributes: Attributes,
    children: Vec<Node>,
}

impl TableCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn col_span(mut self, col_span: u32) -> Self {
        self.col_span = Some(col_span);
        self
    }

    pub fn attrs(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
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
}

impl Validate for TableCell {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Component for TableCell {
    fn build(self, _cx: &RenderContext) -> Element {
        let mut cell = Element::td().attrs(self.attributes);
        if let Some(col_span) = self.col_span {
            cell = cell.attr("colspan", col_span.to_string());
        }
        cell.children(self.children)
    }
}
