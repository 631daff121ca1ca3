//! Layout engine factory module
//!
//! This module provides the system for selecting between the coordinate
//! assignment strategies. Both engines implement the same contract and
//! produce identical coordinates for every tree; which one runs is chosen
//! by the [`Strategy`] value carried in the configuration.

// Layout engine modules with different implementations
mod leaf_numbering;
mod width_first;

use espalier_core::{strategy::Strategy, tree::Tree};

/// Trait defining the interface for coordinate-assignment engines.
pub trait LayoutEngine {
    /// Assign a grid coordinate to every node reachable from the root.
    ///
    /// Reads the child structure and writes per-node scalar state only; the
    /// tree shape itself is never modified, and no node is created or
    /// destroyed. Running twice on an unchanged tree writes identical
    /// coordinates both times.
    fn compute(&self, tree: &mut Tree);
}

/// Create the engine implementing the given strategy.
pub fn create_engine(strategy: Strategy) -> Box<dyn LayoutEngine> {
    match strategy {
        Strategy::WidthFirst => Box::new(width_first::Engine::new()),
        Strategy::LeafNumbering => Box::new(leaf_numbering::Engine::new()),
    }
}
