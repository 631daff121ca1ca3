//! Command-line argument definitions for the Espalier CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, strategy and
//! configuration selection, and logging verbosity.

use clap::Parser;

use espalier_core::strategy::Strategy;

/// Command-line arguments for the Espalier layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input tree notation file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Layout strategy, overriding the configuration file
    /// (width-first, leaf-numbering)
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
