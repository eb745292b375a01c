use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::NodeId;

/// Handle to the realized node of an element.
///
/// Empty until the element is mounted, cleared again when it is unmounted.
/// Clones share the same slot.
#[derive(Clone, Default)]
pub struct NodeRef(Rc<Cell<Option<NodeId>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<NodeId> {
        self.0.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get().is_some()
    }

    /// True if both handles share the same slot.
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn set(&self, node: Option<NodeId>) {
        self.0.set(node);
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(id) => write!(f, "NodeRef({id})"),
            None => write!(f, "NodeRef(unmounted)"),
        }
    }
}
