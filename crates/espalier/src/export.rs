//! Export of coordinated trees.
//!
//! The only exporter is the textual grid dump ([`grid::TextGrid`]), a
//! debugging aid that prints one token per grid cell. Exporters consume a
//! tree after a layout pass has run; they never modify it.

pub mod grid;

use thiserror::Error;

/// Errors produced while exporting a tree.
#[derive(Debug, Error)]
pub enum Error {
    /// A node has no coordinates; a layout pass must run before export.
    #[error("node '{0}' has no coordinates; run a layout pass before rendering")]
    MissingCoordinates(String),
}
