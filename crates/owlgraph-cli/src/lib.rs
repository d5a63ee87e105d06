//! CLI logic for the owlgraph diagram tool.
//!
//! This module contains the core CLI logic: it loads configuration, decodes
//! the ontology file and writes the rendered diagram.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use owlgraph::{DiagramBuilder, OwlGraphError};

/// Run the owlgraph CLI application
///
/// This function processes the input ontology through the owlgraph pipeline
/// and writes the resulting image to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `OwlGraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Ontology decoding errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), OwlGraphError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing ontology"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    config::apply_overrides(
        &mut app_config,
        args.format.as_deref(),
        args.direction.as_deref(),
    )?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let ontology = builder.parse(&source)?;
    let image = builder.render(&ontology)?;

    fs::write(&args.output, image)?;

    info!(
        output_file = args.output,
        format:% = builder.config().renderer().format();
        "Diagram exported successfully"
    );

    Ok(())
}
