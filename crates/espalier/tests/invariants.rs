//! Property tests for the layout contract.
//!
//! Checks every invariant of a finished layout over randomly generated
//! trees, for both strategies, together with cross-strategy agreement and
//! idempotence.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use espalier::strategy::Strategy as LayoutStrategy;
use espalier::{LayoutEngine as _, create_engine};
use espalier::tree::{NodeId, Tree};

// ===================
// Strategies
// ===================

/// Structural skeleton of a tree; labels are filled in while building.
#[derive(Debug, Clone)]
struct Shape {
    children: Vec<Shape>,
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = Just(Shape {
        children: Vec::new(),
    });
    leaf.prop_recursive(5, 48, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(|children| Shape { children })
    })
}

fn build_tree(shape: &Shape) -> Tree {
    let mut tree = Tree::new("n0");
    let root = tree.root();
    let mut counter = 1usize;
    build_children(&mut tree, root, &shape.children, &mut counter);
    tree
}

fn build_children(tree: &mut Tree, parent: NodeId, shapes: &[Shape], counter: &mut usize) {
    for shape in shapes {
        let id = tree.add_child(parent, format!("n{counter}"));
        *counter += 1;
        build_children(tree, id, &shape.children, counter);
    }
}

fn coords(tree: &Tree) -> Vec<(usize, usize)> {
    tree.iter()
        .map(|id| {
            let coord = tree.coord(id).expect("layout has run");
            (coord.x(), coord.y())
        })
        .collect()
}

// ===================
// Checks
// ===================

fn check_layout_invariants(tree: &Tree) -> Result<(), TestCaseError> {
    // Root on row 0, leftmost node on column 0.
    let root_coord = tree.coord(tree.root()).expect("layout has run");
    prop_assert_eq!(root_coord.y(), 0);

    let min_x = coords(tree).into_iter().map(|(x, _)| x).min().unwrap();
    prop_assert_eq!(min_x, 0);

    for id in tree.iter() {
        let coord = tree.coord(id).expect("layout has run");
        let children = tree.children(id);

        // Every child one row below its parent.
        for &child in children {
            let child_coord = tree.coord(child).expect("layout has run");
            prop_assert_eq!(child_coord.y(), coord.y() + 1);
        }

        // Siblings strictly ordered left to right.
        for pair in children.windows(2) {
            let left = tree.coord(pair[0]).expect("layout has run");
            let right = tree.coord(pair[1]).expect("layout has run");
            prop_assert!(left.x() < right.x());
        }

        // Parent directly above, or above and between, its children.
        if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
            let first_x = tree.coord(first).expect("layout has run").x();
            let last_x = tree.coord(last).expect("layout has run").x();
            prop_assert!(first_x <= coord.x() && coord.x() <= last_x);
        }
    }

    // Leaves in pre-order take consecutive columns starting at 0.
    let leaf_columns: Vec<usize> = tree
        .iter()
        .filter(|&id| tree.is_leaf(id))
        .map(|id| tree.coord(id).expect("layout has run").x())
        .collect();
    let expected: Vec<usize> = (0..leaf_columns.len()).collect();
    prop_assert_eq!(leaf_columns, expected);

    // No two nodes share a cell.
    let distinct: HashSet<(usize, usize)> = coords(tree).into_iter().collect();
    prop_assert_eq!(distinct.len(), tree.nodes_count());

    Ok(())
}

// ===================
// Properties
// ===================

proptest! {
    #[test]
    fn width_first_satisfies_layout_invariants(shape in shape_strategy()) {
        let mut tree = build_tree(&shape);
        create_engine(LayoutStrategy::WidthFirst).compute(&mut tree);
        check_layout_invariants(&tree)?;
    }

    #[test]
    fn leaf_numbering_satisfies_layout_invariants(shape in shape_strategy()) {
        let mut tree = build_tree(&shape);
        create_engine(LayoutStrategy::LeafNumbering).compute(&mut tree);
        check_layout_invariants(&tree)?;
    }

    #[test]
    fn strategies_agree_on_every_node(shape in shape_strategy()) {
        let mut width_first = build_tree(&shape);
        let mut leaf_numbering = build_tree(&shape);

        create_engine(LayoutStrategy::WidthFirst).compute(&mut width_first);
        create_engine(LayoutStrategy::LeafNumbering).compute(&mut leaf_numbering);

        prop_assert_eq!(coords(&width_first), coords(&leaf_numbering));
    }

    #[test]
    fn recomputation_is_idempotent(shape in shape_strategy()) {
        for strategy in [LayoutStrategy::WidthFirst, LayoutStrategy::LeafNumbering] {
            let mut tree = build_tree(&shape);
            let engine = create_engine(strategy);

            engine.compute(&mut tree);
            let first = coords(&tree);
            engine.compute(&mut tree);

            prop_assert_eq!(first, coords(&tree));
        }
    }

    #[test]
    fn width_first_root_width_counts_leaves(shape in shape_strategy()) {
        let mut tree = build_tree(&shape);
        create_engine(LayoutStrategy::WidthFirst).compute(&mut tree);

        let leaves = tree.iter().filter(|&id| tree.is_leaf(id)).count();
        prop_assert_eq!(tree.width(tree.root()), Some(leaves));
    }
}
