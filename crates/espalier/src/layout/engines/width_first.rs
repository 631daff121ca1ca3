//! Width-first layout engine
//!
//! Counts the leaves under every node bottom-up (the node's "width"), then
//! walks the tree top-down handing each subtree a contiguous range of
//! unit-width leaf slots. A node sits at the floor midpoint of its range,
//! so sibling subtrees can never overlap: their slot ranges are disjoint
//! and contiguous by construction.

use log::debug;

use espalier_core::{
    geometry::GridPoint,
    tree::{NodeId, Tree},
};

use super::LayoutEngine;

/// Width-first coordinate assignment engine.
///
/// Two recursive passes: a post-order width pass that stores the leaf count
/// on every node, and a pre-order placement pass that threads a running left
/// offset through the siblings. Depth recursion is unbounded; a pathologically
/// deep chain can exhaust the call stack.
#[derive(Debug, Default)]
pub struct Engine;

impl Engine {
    /// Create a new width-first layout engine.
    pub fn new() -> Self {
        Self
    }

    /// Post-order width pass: a leaf has width 1, an internal node the sum
    /// of its children's widths. Returns the width written on `id`.
    fn compute_widths(tree: &mut Tree, id: NodeId) -> usize {
        let children = tree.children(id).to_vec();
        let width = if children.is_empty() {
            1
        } else {
            children
                .into_iter()
                .map(|child| Self::compute_widths(tree, child))
                .sum()
        };
        tree.set_width(id, width);
        width
    }

    /// Pre-order placement pass.
    ///
    /// `min_x` is the leftmost slot this subtree may occupy and `depth` the
    /// row; the node lands on `min_x + width / 2` (flooring left on odd
    /// widths) and each child receives a range starting where its previous
    /// sibling's ended. Requires the width pass to have run.
    fn place(tree: &mut Tree, id: NodeId, min_x: usize, depth: usize) {
        let width = tree.width(id).expect("width pass runs before placement");
        tree.set_coord(id, GridPoint::new(min_x + width / 2, depth));

        let mut child_min_x = min_x;
        for child in tree.children(id).to_vec() {
            Self::place(tree, child, child_min_x, depth + 1);
            child_min_x += tree.width(child).expect("width pass runs before placement");
        }
    }
}

impl LayoutEngine for Engine {
    fn compute(&self, tree: &mut Tree) {
        let root = tree.root();
        let total_width = Self::compute_widths(tree, root);
        Self::place(tree, root, 0, 0);

        debug!(
            nodes = tree.nodes_count(),
            leaves = total_width;
            "Assigned coordinates with width-first strategy",
        );
    }
}
