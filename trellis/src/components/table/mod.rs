//! Data table building blocks.

mod cell;
mod expanded_row;

pub use cell::TableCell;
pub use expanded_row::ExpandableRow;
