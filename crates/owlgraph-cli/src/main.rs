//! owlgraph CLI entry point.

use std::{fs, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use owlgraph::OwlGraphError;
use owlgraph_cli::{Args, error_adapter::ErrorAdapter};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting owlgraph");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = owlgraph_cli::run(&args) {
        // Input errors point into the ontology file, so show it alongside.
        let source = match err {
            OwlGraphError::Input { .. } => fs::read_to_string(&args.input).ok(),
            _ => None,
        };
        let mut adapted_error = ErrorAdapter::new(&err);
        if let Some(source) = source.as_deref() {
            adapted_error = adapted_error.with_source(source);
        }

        let reporter = miette::GraphicalReportHandler::new();
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &adapted_error)
            .expect("Writing to String buffer is infallible");

        error!("Failed\n{writer}");
        process::exit(1);
    }

    info!("Completed successfully");
}
