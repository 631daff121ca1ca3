//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the CLI's standard error types
//! and miette's rich diagnostic formatting. Parse errors get a labeled
//! source snippet; every other error is rendered with a stable code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use crate::error::CliError;

/// A reportable error that can be rendered by miette.
///
/// Wraps a [`CliError`] and implements [`MietteDiagnostic`] to enable rich
/// error formatting in the CLI.
pub struct Reportable<'a> {
    err: &'a CliError,
}

impl<'a> Reportable<'a> {
    /// Create a new reportable wrapper.
    pub fn new(err: &'a CliError) -> Self {
        Self { err }
    }
}

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.err, f)
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.err.source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            CliError::Io(_) => "espalier::io",
            CliError::Parse { .. } => "espalier::parse",
            CliError::Config(_) => "espalier::config",
            CliError::Espalier(_) => "espalier::layout",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            CliError::Parse { .. } => Some(Box::new(
                "the notation is a parenthesized expression such as A(B(D,E),C(F))",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.err {
            CliError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self.err {
            CliError::Parse { err, .. } => {
                let span = SourceSpan::new(err.offset().into(), 0);
                Some(Box::new(std::iter::once(
                    LabeledSpan::new_primary_with_span(
                        Some("parsing stopped here".to_string()),
                        span,
                    ),
                )))
            }
            _ => None,
        }
    }
}
