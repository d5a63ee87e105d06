//! Command-line argument definitions for the owlgraph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, rendering overrides and logging verbosity.

use clap::Parser;

/// Command-line arguments for the owlgraph diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input ontology (JSON)
    #[arg(help = "Path to the input ontology file")]
    pub input: String,

    /// Path to the output image file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (svg, png), overriding the configuration file
    #[arg(short, long)]
    pub format: Option<String>,

    /// Layout direction (top-to-bottom, left-to-right), overriding the configuration file
    #[arg(short, long)]
    pub direction: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
