//! Popup menu of a list box, rendered as a `role="listbox"` list.

use htmldom::{Attributes, ClassList, Element, NodeRef};

use super::MenuItem;
use crate::components::Component;
use crate::context::RenderContext;
use crate::error::ValidationError;
use crate::validate::Validate;

const COMPONENT: &str = "MenuContainer";

/// What a menu may contain.
#[derive(Debug, Clone, Default)]
pub enum MenuChildren {
    #[default]
    None,
    Item(MenuItem),
    Items(Vec<MenuItem>),
    /// A closed menu keeps its container but renders no options.
    Bool(bool),
}

impl MenuChildren {
    pub fn into_items(self) -> Vec<MenuItem> {
        match self {
            Self::None | Self::Bool(_) => Vec::new(),
            Self::Item(item) => vec![item],
            Self::Items(items) => items,
        }
    }

    fn push(&mut self, item: MenuItem) {
        *self = match std::mem::take(self) {
            Self::None | Self::Bool(_) => Self::Item(item),
            Self::Item(first) => Self::Items(vec![first, item]),
            Self::Items(mut items) => {
                items.push(item);
                Self::Items(items)
            }
        };
    }
}

impl From<MenuItem> for MenuChildren {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

impl From<Vec<MenuItem>> for MenuChildren {
    fn from(items: Vec<MenuItem>) -> Self {
        Self::Items(items)
    }
}

impl From<bool> for MenuChildren {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

/// The `listbox` element holding a list box's options.
///
/// The identifier is required and must be unique in the document; owning
/// controls point `aria-controls`/`aria-owns` at it.
#[derive(Debug, Clone)]
pub struct MenuContainer {
    id: String,
    node_ref: Option<NodeRef>,
    attributes: Attributes,
    children: MenuChildren,
}

impl MenuContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_ref: None,
            attributes: Attributes::new(),
            children: MenuChildren::None,
        }
    }

    /// Forward a handle that will point at the realized `<ul>`.
    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Pass-through attributes. They cannot replace `id`, `class` or `role`.
    pub fn attrs(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Replace the menu contents.
    pub fn children(mut self, children: impl Into<MenuChildren>) -> Self {
        self.children = children.into();
        self
    }

    /// Append one option.
    pub fn item(mut self, item: MenuItem) -> Self {
        self.children.push(item);
        self
    }
}

impl Validate for MenuContainer {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId {
                component: COMPONENT,
            });
        }
        if self.id.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidId {
                component: COMPONENT,
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

impl Component for MenuContainer {
    fn build(self, cx: &RenderContext) -> Element {
        let items: Vec<Element> = self
            .children
            .into_items()
            .into_iter()
            .map(|item| item.render(cx))
            .collect();

        let mut menu = Element::ul().attrs(self.attributes);
        // Pass-through classes are dropped; the menu class is structural
        menu.classes = ClassList::new();
        menu = menu
            .id(self.id)
            .class(cx.class("list-box__menu"))
            .role("listbox")
            .children(items);

        if let Some(node_ref) = self.node_ref {
            menu = menu.node_ref(node_ref);
        }
        menu
    }
}
