//! Serialization of finished diagrams.
//!
//! - [`dot`] turns an element set into a Graphviz DOT document.
//! - [`svg`] post-processes the renderer's SVG output by embedding the symbol font.

pub mod dot;
pub mod svg;

use thiserror::Error;

/// Errors raised while producing or post-processing a document.
#[derive(Debug, Error)]
pub enum Error {
    /// The style configuration holds a value that cannot be emitted.
    #[error("Invalid style: {0}")]
    Style(String),

    /// The root `<svg>` opening tag was not found in the renderer output.
    #[error("Root <svg> opening tag not found in renderer output")]
    MissingRootTag,

    /// The renderer output is not UTF-8 text.
    #[error("Renderer output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
