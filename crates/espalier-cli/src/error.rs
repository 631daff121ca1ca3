//! Error types for the Espalier CLI.
//!
//! [`CliError`] unifies every failure the CLI pipeline can hit: I/O,
//! notation parsing, configuration loading, and library errors. The
//! `Parse` variant keeps the offending source text so the error adapter
//! can render a labeled snippet.

use std::io;

use thiserror::Error;

use espalier::EspalierError;

use crate::{config::ConfigError, parse::ParseError};

/// The main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Espalier(#[from] EspalierError),
}

impl CliError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
