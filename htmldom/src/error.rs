//! Errors returned by document operations.

use thiserror::Error;

use crate::document::NodeId;

/// Errors raised by [`Document`](crate::Document) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("node {0} does not exist in this document")]
    UnknownNode(NodeId),

    #[error("node {0} is detached from the document")]
    Detached(NodeId),

    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("the document root cannot be unmounted")]
    RootNode,
}
