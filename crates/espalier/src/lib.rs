//! Espalier - overlap-free grid layouts for rooted ordered trees.
//!
//! Espalier assigns integer grid coordinates (x, y) to every node of a
//! rooted, ordered tree so the tree can be displayed without overlap: the
//! root sits on row 0, every child one row below its parent, the leftmost
//! leaf on column 0, and every parent directly above or between its
//! children. Two interchangeable strategies implement the same contract and
//! produce identical coordinates; see [`strategy::Strategy`].

pub mod config;
pub mod export;

mod error;
mod layout;

pub use espalier_core::{geometry, strategy, tree};

pub use error::EspalierError;
pub use export::grid::TextGrid;
pub use layout::{LayoutEngine, create_engine};

use log::{debug, info};

use config::AppConfig;
use espalier_core::tree::Tree;

/// Facade for computing and rendering tree layouts.
///
/// Holds an [`AppConfig`] and drives the two stages: coordinate assignment
/// with the configured strategy, and the optional text-grid rendering.
///
/// # Examples
///
/// ```rust
/// use espalier::{LayoutBuilder, tree::Tree};
///
/// let mut tree = Tree::new("A");
/// let root = tree.root();
/// tree.add_child(root, "B");
/// tree.add_child(root, "C");
///
/// let builder = LayoutBuilder::default();
/// builder.compute_coordinates(&mut tree);
///
/// let grid = builder.render_grid(&tree).expect("tree is coordinated");
/// assert_eq!(grid, ". A\nB C\n");
/// ```
#[derive(Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including the strategy and
    ///   render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Assign grid coordinates to every node of `tree`.
    ///
    /// Runs the engine selected by the configuration. The pass only reads
    /// the child structure and writes per-node coordinates (plus subtree
    /// widths for the width-first strategy); ownership of the tree stays
    /// with the caller. Re-running on an unchanged tree reproduces the same
    /// coordinates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use espalier::{LayoutBuilder, tree::Tree};
    ///
    /// let mut tree = Tree::new("root");
    /// LayoutBuilder::default().compute_coordinates(&mut tree);
    ///
    /// let coord = tree.coord(tree.root()).expect("layout has run");
    /// assert_eq!((coord.x(), coord.y()), (0, 0));
    /// ```
    pub fn compute_coordinates(&self, tree: &mut Tree) {
        let strategy = self.config.layout().strategy();
        info!(strategy:? = strategy; "Computing coordinates");

        let engine = layout::create_engine(strategy);
        engine.compute(tree);

        debug!(nodes = tree.nodes_count(); "Coordinates computed");
    }

    /// Render the coordinated tree as a line-oriented text grid.
    ///
    /// One row per y level, columns in ascending x order, single-space
    /// separated tokens, and the configured placeholder in unoccupied
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns [`EspalierError::Export`] if any node has no coordinates,
    /// i.e. [`Self::compute_coordinates`] has not run on this tree.
    pub fn render_grid(&self, tree: &Tree) -> Result<String, EspalierError> {
        info!("Rendering text grid");

        let grid = TextGrid::new().with_placeholder(self.config.render().placeholder());
        let rendered = grid.render(tree)?;

        debug!(rows = rendered.lines().count(); "Grid rendered");
        Ok(rendered)
    }
}
