//! Error types for owlgraph operations.
//!
//! This module provides the main error type [`OwlGraphError`] which wraps
//! the error conditions that can occur while turning an ontology into an
//! image.

use std::io;

use thiserror::Error;

use crate::{export, render::RenderError};

/// The main error type for owlgraph operations.
///
/// Unsupported ontology constructs are never an error; they are simply not
/// drawn.
#[derive(Debug, Error)]
pub enum OwlGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// The ontology input could not be decoded.
    #[error("Invalid ontology input: {message}")]
    Input {
        message: String,
        line: usize,
        column: usize,
    },
}

impl From<serde_json::Error> for OwlGraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Input {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
