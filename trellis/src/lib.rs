pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod prefix;
pub mod validate;

pub use context::RenderContext;

pub mod prelude {
    pub use crate::components::{
        Component, ExpandableRow, FieldContainer, MenuChildren, MenuContainer, MenuItem, TableCell,
    };
    pub use crate::config::TrellisConfig;
    pub use crate::context::RenderContext;
    pub use crate::error::{ConfigError, ValidationError};
    pub use crate::prefix::Prefix;
    pub use crate::validate::{Validate, ValidationMode};

    pub use htmldom::{Attributes, Document, Element, EventKind, Node, NodeId, NodeRef};
}
