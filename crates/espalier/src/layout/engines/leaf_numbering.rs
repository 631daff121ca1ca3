//! Leaf-numbering layout engine
//!
//! Numbers the leaves left-to-right in a single depth-first pass and
//! centers every internal node over the leaf range its subtree spans. The
//! pass threads "the next free leaf column" through the recursion: a leaf
//! takes that column and hands back the following one, an internal node
//! hands back whatever its rightmost child returned. No per-node width is
//! stored; the returned cursor carries the same information.

use log::debug;

use espalier_core::{
    geometry::GridPoint,
    tree::{NodeId, Tree},
};

use super::LayoutEngine;

/// Leaf-numbering coordinate assignment engine.
///
/// A single recursive pass assigns both coordinates. Since every leaf gets
/// a distinct column and internal nodes sit on the floor midpoint of their
/// leaf range, no two nodes can collide. Depth recursion is unbounded; a
/// pathologically deep chain can exhaust the call stack.
#[derive(Debug, Default)]
pub struct Engine;

impl Engine {
    /// Create a new leaf-numbering layout engine.
    pub fn new() -> Self {
        Self
    }

    /// Recursive placement pass.
    ///
    /// `min_x` is the leftmost column the first leaf under `id` may take and
    /// `depth` the row. Returns the leftmost column available to the next
    /// sibling subtree. For an internal node the return value equals
    /// `min_x` plus the subtree's leaf count, so `(min_x + returned) / 2`
    /// floors left exactly like the width-first midpoint.
    fn place(tree: &mut Tree, id: NodeId, min_x: usize, depth: usize) -> usize {
        if tree.is_leaf(id) {
            tree.set_coord(id, GridPoint::new(min_x, depth));
            return min_x + 1;
        }

        let mut next_min_x = min_x;
        for child in tree.children(id).to_vec() {
            next_min_x = Self::place(tree, child, next_min_x, depth + 1);
        }

        tree.set_coord(id, GridPoint::new((min_x + next_min_x) / 2, depth));
        next_min_x
    }
}

impl LayoutEngine for Engine {
    fn compute(&self, tree: &mut Tree) {
        let root = tree.root();
        let leaves = Self::place(tree, root, 0, 0);

        debug!(
            nodes = tree.nodes_count(),
            leaves = leaves;
            "Assigned coordinates with leaf-numbering strategy",
        );
    }
}
