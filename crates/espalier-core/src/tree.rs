//! The arena-backed tree that layout passes operate on.
//!
//! # Architecture
//!
//! The module provides:
//! - [`NodeId`]: type-safe handles to nodes stored in a tree
//! - [`Tree`]: the rooted, ordered tree arena itself
//!
//! Nodes live in a single `Vec` owned by the [`Tree`]; a [`NodeId`] is an
//! index into that arena. Child lists are small-vector backed and keep
//! insertion order, which is what determines left-to-right placement during
//! layout. Nodes are only ever created through [`Tree::add_child`] and never
//! re-linked, so a `Tree` is acyclic by construction.
//!
//! Each node carries two slots written by the layout passes: its grid
//! coordinate, and (for the width-first strategy only) the leaf count of its
//! subtree. Both are `None` until a pass has run.

use smallvec::SmallVec;

use crate::geometry::GridPoint;

/// Type-safe handle to a node stored in a [`Tree`].
///
/// A `NodeId` is only meaningful for the tree that issued it. Using it with
/// a different tree either panics or silently addresses an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Per-node record stored in the arena.
#[derive(Debug)]
struct NodeData {
    label: String,
    children: SmallVec<[NodeId; 4]>,
    coord: Option<GridPoint>,
    width: Option<usize>,
}

impl NodeData {
    fn new(label: String) -> Self {
        Self {
            label,
            children: SmallVec::new(),
            coord: None,
            width: None,
        }
    }
}

/// A rooted, ordered tree of labeled nodes.
///
/// The tree always has at least one node (the root, created by
/// [`Tree::new`]). Labels are opaque display strings; layout logic never
/// consults them.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<NodeData>,
}

impl Tree {
    /// Creates a tree consisting of a single root node with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            nodes: vec![NodeData::new(label.into())],
        }
    }

    /// Returns the handle of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a new child under `parent` and returns its handle.
    ///
    /// Children keep insertion order; the first child added is the leftmost
    /// one during layout.
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(label.into()));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Returns the label of a node.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.0].label
    }

    /// Returns the ordered child handles of a node (empty for leaves).
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Checks whether a node has no children.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].children.is_empty()
    }

    /// Returns the grid coordinate of a node, or `None` if no layout pass
    /// has run yet.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn coord(&self, id: NodeId) -> Option<GridPoint> {
        self.nodes[id.0].coord
    }

    /// Writes the grid coordinate of a node. Called by layout engines.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn set_coord(&mut self, id: NodeId, coord: GridPoint) {
        self.nodes[id.0].coord = Some(coord);
    }

    /// Returns the subtree leaf count of a node, or `None` if the
    /// width-first strategy has not run on this tree.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn width(&self, id: NodeId) -> Option<usize> {
        self.nodes[id.0].width
    }

    /// Writes the subtree leaf count of a node. Called by the width-first
    /// engine.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn set_width(&mut self, id: NodeId, width: usize) {
        self.nodes[id.0].width = Some(width);
    }

    /// Returns the total number of nodes in the tree.
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an iterator over all node handles in depth-first pre-order,
    /// visiting children left to right.
    ///
    /// Leaves are therefore yielded in left-to-right display order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![self.root()],
        }
    }
}

/// Depth-first pre-order traversal over a [`Tree`].
///
/// Created by [`Tree::iter`].
#[derive(Debug)]
pub struct PreOrder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Push in reverse so the leftmost child is popped first.
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
