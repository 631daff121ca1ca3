//! Error types for Espalier operations.
//!
//! This module provides the main error type [`EspalierError`]. Coordinate
//! assignment itself is total and cannot fail; the fallible surface of the
//! library is rendering a tree that has not been laid out yet.

use thiserror::Error;

/// The main error type for Espalier operations.
#[derive(Debug, Error)]
pub enum EspalierError {
    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}
