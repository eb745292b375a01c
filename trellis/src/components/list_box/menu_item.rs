//! Option entries for [`MenuContainer`](super::MenuContainer).

use htmldom::{Attributes, Element, EventContext, EventKind, Handlers, Node};

use crate::components::Component;
use crate::context::RenderContext;
use crate::error::ValidationError;
use crate::validate::Validate;

/// One option inside a [`MenuContainer`](super::MenuContainer).
#[derive(Debug, Clone, Default)]
pub struct MenuItem {
    active: bool,
    highlighted: bool,
    disabled: bool,
    title: Option<String>,
    attributes: Attributes,
    handlers: Handlers,
    children: Vec<Node>,
}

impl MenuItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item with a single text label, also used as its title.
    pub fn labeled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new().title(label.clone()).child(label)
    }

    /// The item is the current selection.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// The item has keyboard or pointer highlight.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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

    pub fn on(mut self, kind: EventKind, handler: impl Fn(&mut EventContext<'_>) + 'static) -> Self {
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
}

impl Validate for MenuItem {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Component for MenuItem {
    fn build(self, cx: &RenderContext) -> Element {
        let mut item = Element::li()
            .role("option")
            .attrs(self.attributes)
            .handlers(self.handlers)
            .class(cx.class("list-box__menu-item"))
            .class_if(self.active, cx.class("list-box__menu-item--active"))
            .class_if(self.highlighted, cx.class("list-box__menu-item--highlighted"))
            .aria("selected", self.active.to_string());

        if let Some(title) = self.title {
            item = item.attr("title", title);
        }
        if self.disabled {
            item = item.aria("disabled", "true");
        }

        item.child(
            Element::div()
                .class(cx.class("list-box__menu-item__option"))
                .children(self.children),
        )
    }
}
