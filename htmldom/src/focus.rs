//! Sequential focus navigation.
//!
//! Positive tab indexes come first in ascending order, then elements with
//! `tabindex="0"` or native focusability in document order.

use crate::document::{Document, NodeId};

/// Tags that take part in sequential navigation without an explicit tabindex.
const NATIVELY_FOCUSABLE: &[&str] = &["button", "input", "select", "textarea"];

/// Parsed `tabindex` of an element, if present and numeric.
pub fn tab_index(doc: &Document, node: NodeId) -> Option<i32> {
    doc.attribute(node, "tabindex")?.trim().parse().ok()
}

/// Whether sequential keyboard navigation can reach `node`.
///
/// Disabled elements and negative tab indexes are never tabbable. An explicit
/// non-negative tab index makes any element tabbable; otherwise only
/// natively focusable tags (and `a[href]`) are.
pub fn is_tabbable(doc: &Document, node: NodeId) -> bool {
    let Some(tag) = doc.tag(node) else {
        return false;
    };
    if doc.has_attribute(node, "disabled") {
        return false;
    }

    match tab_index(doc, node) {
        Some(index) => index >= 0,
        None => {
            NATIVELY_FOCUSABLE.contains(&tag) || (tag == "a" && doc.has_attribute(node, "href"))
        }
    }
}

/// Collect tabbable nodes under `root` (inclusive) in navigation order.
///
/// Positive tab indexes come first in ascending order, ties broken by
/// document order; zero and native focusables follow in document order.
pub fn collect_tabbable(doc: &Document, root: NodeId) -> Vec<NodeId> {
    let mut candidates = Vec::new();
    candidates.push(root);
    candidates.extend(doc.descendants(root));

    let mut positive: Vec<(i32, usize, NodeId)> = Vec::new();
    let mut natural = Vec::new();

    for (order, node) in candidates.into_iter().enumerate() {
        if !is_tabbable(doc, node) {
            continue;
        }
        match tab_index(doc, node) {
            Some(index) if index > 0 => positive.push((index, order, node)),
            _ => natural.push(node),
        }
    }

    positive.sort_by_key(|(index, order, _)| (*index, *order));
    positive
        .into_iter()
        .map(|(_, _, node)| node)
        .chain(natural)
        .collect()
}

/// Tracks which node is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<NodeId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Programmatically focus a node.
    /// Returns true if focus changed.
    pub fn focus(&mut self, node: NodeId) -> bool {
        if self.focused == Some(node) {
            return false;
        }
        self.focused = Some(node);
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next tabbable node (Tab navigation), wrapping around.
    /// Returns the newly focused node if focus changed.
    pub fn focus_next(&mut self, doc: &Document, root: NodeId) -> Option<NodeId> {
        let tabbable = collect_tabbable(doc, root);
        if tabbable.is_empty() {
            return None;
        }

        let new_focus = match self.focused {
            None => tabbable[0],
            Some(current) => match tabbable.iter().position(|n| *n == current) {
                Some(i) => tabbable[(i + 1) % tabbable.len()],
                None => tabbable[0],
            },
        };

        self.focus(new_focus).then_some(new_focus)
    }

    /// Focus the previous tabbable node (Shift+Tab navigation), wrapping around.
    /// Returns the newly focused node if focus changed.
    pub fn focus_prev(&mut self, doc: &Document, root: NodeId) -> Option<NodeId> {
        let tabbable = collect_tabbable(doc, root);
        let last = *tabbable.last()?;

        let new_focus = match self.focused {
            None => last,
            Some(current) => match tabbable.iter().position(|n| *n == current) {
                Some(0) | None => last,
                Some(i) => tabbable[i - 1],
            },
        };

        self.focus(new_focus).then_some(new_focus)
    }
}
