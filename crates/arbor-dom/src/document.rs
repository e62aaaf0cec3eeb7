//! The document arena.

use crate::node::{Doctype, ElementData, InlineNode, Node, NodeId, NodeKind};
use crate::query::ElementRef;

/// An arena-based document tree.
///
/// All nodes are stored in one vector and refer to each other by [`NodeId`].
/// The Document node is always at index 0 ([`NodeId::ROOT`]). Each node is
/// owned by exactly one parent through that parent's child list.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    doctype: Option<Doctype>,
}

impl Document {
    /// Create an empty document holding just the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
            doctype: None,
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the arena, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The declaration set by the last doctype token, if any.
    #[must_use]
    pub const fn doctype(&self) -> Option<&Doctype> {
        self.doctype.as_ref()
    }

    /// Replace the doctype. Last write wins.
    pub fn set_doctype(&mut self, doctype: Doctype) {
        self.doctype = Some(doctype);
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// `parent` must be the document or a non-void element.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            self.get(parent).is_some_and(|node| node.kind.is_container()),
            "{parent:?} cannot own children"
        );
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Append an inline leaf to `parent`, coalescing it with its inline
    /// neighbours.
    ///
    /// If the last child of `parent` is a text run, the leaf joins that run;
    /// otherwise a new run is created and appended first. Returns the leaf's ID.
    pub fn append_inline(&mut self, parent: NodeId, leaf: impl Into<InlineNode>) -> NodeId {
        let run = match self.last_child(parent) {
            Some(last) if matches!(self.nodes[last.0].kind, NodeKind::TextRun) => last,
            _ => {
                let run = self.alloc(NodeKind::TextRun);
                self.append_child(parent, run);
                run
            }
        };

        let leaf: InlineNode = leaf.into();
        let id = self.alloc(leaf.into());
        self.nodes[run.0].children.push(id);
        self.nodes[id.0].parent = Some(run);
        id
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| n.kind.as_element())
    }

    /// A query handle for the element at `id`.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        ElementRef::new(self, id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
