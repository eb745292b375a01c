//! Focusable field of a list box.
//!
//! The field always renders a `tabindex`. A disabled field, or one without a
//! requested index, gets `-1`.

use htmldom::{Attributes, Element, Node};

use crate::components::Component;
use crate::context::RenderContext;
use crate::error::ValidationError;
use crate::validate::Validate;

/// Tab index meaning "not reachable by sequential navigation".
pub const NOT_TABBABLE: i32 = -1;

/// Containing node for the field of a list-box control.
///
/// Accessibility attributes such as `aria-haspopup`, `aria-expanded` or
/// `role` are usually supplied by the owning control and are forwarded
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct FieldContainer {
    disabled: bool,
    tab_index: Option<i32>,
    attributes: Attributes,
    children: Vec<Node>,
}

impl FieldContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the owning list box is disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn attrs(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn aria(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(&format!("aria-{key}"), value)
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

    /// Tab index the field renders with.
    ///
    /// A disabled field is never tabbable. Otherwise a requested non-zero
    /// index is honored; `0` counts as "not requested".
    pub fn effective_tab_index(disabled: bool, requested: Option<i32>) -> i32 {
        match requested {
            Some(index) if !disabled && index != 0 => index,
            _ => NOT_TABBABLE,
        }
    }
}

impl Validate for FieldContainer {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Component for FieldContainer {
    fn build(self, cx: &RenderContext) -> Element {
        let tab_index = Self::effective_tab_index(self.disabled, self.tab_index);
        Element::div()
            .class(cx.class("list-box__field"))
            .attrs(self.attributes)
            .tab_index(tab_index)
            .children(self.children)
    }
}
