//! CLI logic for the Espalier layout tool.
//!
//! This module contains the core CLI logic for the Espalier layout tool.

pub mod error_adapter;
pub mod parse;

mod args;
mod config;
mod error;

pub use args::Args;
pub use config::ConfigError;
pub use error::CliError;

use std::fs;

use log::info;

use espalier::{
    LayoutBuilder,
    config::{AppConfig, LayoutConfig},
};

/// Run the Espalier CLI application
///
/// This function reads the input notation, computes coordinates with the
/// configured strategy, and writes the rendered grid to the output file or
/// to stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Notation parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(input_path = args.input; "Processing tree");

    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;

    // A strategy given on the command line wins over the configuration file
    if let Some(strategy) = args.strategy {
        app_config = AppConfig::new(LayoutConfig::new(strategy), app_config.render().clone());
    }

    // Read and parse the input notation
    let source = fs::read_to_string(&args.input)?;
    let mut tree =
        parse::parse(&source).map_err(|err| CliError::new_parse_error(err, source.as_str()))?;

    // Compute coordinates and render the grid
    let builder = LayoutBuilder::new(app_config);
    builder.compute_coordinates(&mut tree);
    let grid = builder.render_grid(&tree)?;

    // Write output
    match &args.output {
        Some(path) => {
            fs::write(path, grid)?;
            info!(output_file = path; "Grid written");
        }
        None => print!("{grid}"),
    }

    Ok(())
}
