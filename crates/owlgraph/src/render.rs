//! Invocation of the external layout renderer.
//!
//! The renderer reads a DOT document on standard input and writes the laid
//! out image on standard output. [`LayoutRenderer`] is the seam between the
//! pipeline and that process; [`GraphvizRenderer`] is the implementation
//! that spawns it.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

use log::{debug, info};
use thiserror::Error;

use crate::config::{Direction, OutputFormat, RendererConfig};

/// Errors raised while running the layout renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer executable could not be started.
    #[error("Failed to start renderer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Talking to the renderer process failed.
    #[error("Renderer I/O error: {0}")]
    Io(#[from] io::Error),

    /// The renderer ran but reported failure.
    #[error("Renderer {status}: {stderr}")]
    Exit { status: ExitStatus, stderr: String },
}

/// Turns a DOT document into image bytes.
pub trait LayoutRenderer {
    /// Renders `document` in the given format and direction.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the renderer cannot be run or fails.
    fn render(
        &self,
        document: &str,
        format: OutputFormat,
        direction: Direction,
    ) -> Result<Vec<u8>, RenderError>;
}

/// Runs Graphviz as a subprocess.
///
/// The document is written to the child's standard input, which is then
/// closed before standard output is read to completion. No timeout is
/// enforced.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: PathBuf,
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &RendererConfig) -> Self {
        Self::new(config.program())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the command line arguments for one invocation.
    pub fn arguments(format: OutputFormat, direction: Direction) -> [String; 2] {
        [
            format!("-T{}", format.as_str()),
            format!("-Grankdir={}", direction.rankdir()),
        ]
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::from_config(&RendererConfig::default())
    }
}

impl LayoutRenderer for GraphvizRenderer {
    fn render(
        &self,
        document: &str,
        format: OutputFormat,
        direction: Direction,
    ) -> Result<Vec<u8>, RenderError> {
        let arguments = Self::arguments(format, direction);
        info!(program:? = self.program, arguments:?; "Running layout renderer");

        let mut child = Command::new(&self.program)
            .args(&arguments)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RenderError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        // Dropping the handle closes the pipe so the renderer sees end of input.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(document.as_bytes()) {
                Ok(()) => {}
                // The child exited without reading; its exit status says why.
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
                Err(err) => return Err(err.into()),
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(RenderError::Exit {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(bytes = output.stdout.len(); "Renderer finished");
        Ok(output.stdout)
    }
}
