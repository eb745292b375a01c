//! Leaf components of the design system.
//!
//! Each component is a plain value built from its inputs and turned into an
//! [`htmldom::Element`] by [`Component::render`]. Components own no state
//! between renders.

pub mod list_box;
pub mod table;
mod traits;

pub use list_box::{FieldContainer, MenuChildren, MenuContainer, MenuItem};
pub use table::{ExpandableRow, TableCell};
pub use traits::Component;
