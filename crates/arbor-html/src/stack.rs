//! The stack of open elements.
//!
//! The bottom entry is the document root. Every other entry is an element
//! that has been started but not yet closed; the top entry is the current
//! attachment point for new nodes. Entries are arena IDs only, the document
//! keeps sole ownership of its nodes.

use thiserror::Error;

use arbor_dom::{NodeId, NodeKind};

/// Misuse of the open-element stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// Popped or inspected a stack with no entries.
    #[error("the stack of open elements is empty")]
    EmptyStack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    id: NodeId,
    /// `None` for the document root.
    name: Option<String>,
}

/// Open elements, bottom (document root) to top (current node).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenElementStack {
    entries: Vec<Entry>,
}

impl OpenElementStack {
    /// An empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Push `id` if `kind` can own children.
    ///
    /// Void elements and leaves are never pushed, since nothing can be
    /// attached to them later. Returns whether the node became current.
    pub fn push(&mut self, id: NodeId, kind: &NodeKind) -> bool {
        if !kind.is_container() {
            return false;
        }
        self.entries.push(Entry {
            id,
            name: kind.as_element().map(|data| data.tag_name.clone()),
        });
        true
    }

    /// Remove and return the current node.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyStack`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<NodeId, StackError> {
        self.entries
            .pop()
            .map(|entry| entry.id)
            .ok_or(StackError::EmptyStack)
    }

    /// Whether an element named `name` is open. The root never matches.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .iter()
            .skip(1)
            .any(|entry| entry.name.as_deref() == Some(name))
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The bottom-most entry.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyStack`] if the stack has no entries.
    pub fn root(&self) -> Result<NodeId, StackError> {
        self.entries
            .first()
            .map(|entry| entry.id)
            .ok_or(StackError::EmptyStack)
    }

    /// The current attachment point.
    #[must_use]
    pub fn current(&self) -> Option<NodeId> {
        self.entries.last().map(|entry| entry.id)
    }

    /// Tag name of the current node; `None` for the root or an empty stack.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.entries.last().and_then(|entry| entry.name.as_deref())
    }

    /// Number of entries, the root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tag names of the open elements, bottom to top, without the root.
    pub fn open_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter_map(|entry| entry.name.as_deref())
    }
}
