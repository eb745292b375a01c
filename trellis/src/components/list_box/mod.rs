//! List-box building blocks used by combo box, dropdown and multi-select
//! controls.
//!
//! - [`FieldContainer`] - the focusable field surface
//! - [`MenuContainer`] - the `listbox` element holding the options
//! - [`MenuItem`] - a single option

mod field;
mod menu;
mod menu_item;

pub use field::FieldContainer;
pub use menu::{MenuChildren, MenuContainer};
pub use menu_item::MenuItem;
