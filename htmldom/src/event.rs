//! Event kinds, handlers and the context passed to them during dispatch.

use std::fmt;
use std::rc::Rc;

use crate::document::{Document, NodeId};

/// DOM event kinds that can be bound on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer entered the element
    MouseEnter,
    /// Pointer left the element
    MouseLeave,
    Click,
    /// Element gained focus
    Focus,
    /// Element lost focus
    Blur,
    KeyDown,
}

/// Handler invoked synchronously during dispatch.
pub type Handler = Rc<dyn Fn(&mut EventContext<'_>)>;

/// What a handler sees while an event is delivered.
pub struct EventContext<'a> {
    document: &'a mut Document,
    target: NodeId,
    kind: EventKind,
}

impl<'a> EventContext<'a> {
    pub(crate) fn new(document: &'a mut Document, target: NodeId, kind: EventKind) -> Self {
        Self {
            document,
            target,
            kind,
        }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn document(&self) -> &Document {
        &*self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut *self.document
    }
}

/// Event handlers bound to one element, kept in binding order.
#[derive(Clone, Default)]
pub struct Handlers {
    entries: Vec<(EventKind, Handler)>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EventKind, handler: impl Fn(&mut EventContext<'_>) + 'static) {
        let handler: Handler = Rc::new(handler);
        self.entries.push((kind, handler));
    }

    pub fn extend(&mut self, other: Handlers) {
        self.entries.extend(other.entries);
    }

    /// Handlers bound for `kind`, cloned so the caller can release its borrow
    /// of the document before invoking them.
    pub fn for_kind(&self, kind: EventKind) -> Vec<Handler> {
        self.entries
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, h)| Rc::clone(h))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(kind, _)| kind))
            .finish()
    }
}
