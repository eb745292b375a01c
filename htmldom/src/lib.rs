pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod render;

pub use document::{Document, NodeId, NodeRef};
pub use element::{find_by_attribute, find_element, Attributes, ClassList, Content, Element, Node};
pub use error::DomError;
pub use event::{EventContext, EventKind, Handler, Handlers};
pub use focus::{collect_tabbable, is_tabbable, FocusState};
pub use render::render_to_string;
