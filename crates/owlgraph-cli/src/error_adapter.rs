//! Error adapter for converting OwlGraphError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use owlgraph::{OwlGraphError, render::RenderError};

/// Adapter for [`OwlGraphError`].
///
/// Errors carry a stable code and, where one helps, a hint on how to fix the
/// problem. Input errors also point at the offending position when the
/// source text is attached with [`ErrorAdapter::with_source`].
pub struct ErrorAdapter<'a> {
    error: &'a OwlGraphError,
    src: Option<&'a str>,
}

impl<'a> ErrorAdapter<'a> {
    /// Create a new error adapter.
    pub fn new(error: &'a OwlGraphError) -> Self {
        Self { error, src: None }
    }

    /// Attach the ontology source so input errors can show a snippet.
    pub fn with_source(mut self, src: &'a str) -> Self {
        self.src = Some(src);
        self
    }

    /// Byte offset of the input error position, if any.
    fn input_offset(&self) -> Option<usize> {
        let OwlGraphError::Input { line, column, .. } = self.error else {
            return None;
        };
        let src = self.src?;
        if *line == 0 {
            return None;
        }

        let line_start: usize = src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        let offset = line_start + column.saturating_sub(1);
        Some(offset.min(src.len()))
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.error, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.error, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.error)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.error {
            OwlGraphError::Io(_) => "owlgraph::io",
            OwlGraphError::Config(_) => "owlgraph::config",
            OwlGraphError::Input { .. } => "owlgraph::input",
            OwlGraphError::Render(_) => "owlgraph::render",
            OwlGraphError::Export(_) => "owlgraph::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.error {
            OwlGraphError::Input { .. } => {
                "the input must be a JSON document with an `axioms` array"
            }
            OwlGraphError::Render(RenderError::Spawn { .. }) => {
                "install Graphviz or set `renderer.program` in the configuration file"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.input_offset()?;
        self.src
            .as_ref()
            .map(|src| src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let offset = self.input_offset()?;
        let span = SourceSpan::new(offset.into(), 0);
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use owlgraph::DiagramBuilder;

    use super::*;

    #[test]
    fn test_codes() {
        let cases = [
            (
                OwlGraphError::Io(io::Error::new(io::ErrorKind::NotFound, "gone")),
                "owlgraph::io",
            ),
            (
                OwlGraphError::Config("bad color".to_string()),
                "owlgraph::config",
            ),
            (
                OwlGraphError::Export(owlgraph::export::Error::MissingRootTag),
                "owlgraph::export",
            ),
        ];

        for (err, expected) in &cases {
            let adapter = ErrorAdapter::new(err);
            assert_eq!(adapter.code().unwrap().to_string(), *expected);
            assert!(adapter.help().is_none());
            assert!(adapter.labels().is_none());
        }
    }

    #[test]
    fn test_display_matches_error() {
        let err = OwlGraphError::Config("bad color".to_string());
        let adapter = ErrorAdapter::new(&err);
        assert_eq!(adapter.to_string(), "Configuration error: bad color");
    }

    #[test]
    fn test_input_error_points_at_position() {
        let src = "{\n  \"axioms\": [\n    {\"NoSuchAxiom\": 1}\n  ]\n}";
        let err = DiagramBuilder::default().parse(src).unwrap_err();
        let OwlGraphError::Input { line, .. } = &err else {
            panic!("Expected input error, got {err:?}");
        };
        assert_eq!(*line, 3);

        let adapter = ErrorAdapter::new(&err).with_source(src);
        assert_eq!(adapter.code().unwrap().to_string(), "owlgraph::input");
        assert!(adapter.help().is_some());
        assert!(adapter.source_code().is_some());

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        let third_line = src.find("    {").unwrap();
        assert!(labels[0].offset() >= third_line);
        assert!(labels[0].offset() <= src.len());
    }

    #[test]
    fn test_input_error_without_source_has_no_labels() {
        let err = DiagramBuilder::default().parse("not json").unwrap_err();
        let adapter = ErrorAdapter::new(&err);
        assert!(adapter.source_code().is_none());
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_missing_renderer_has_help() {
        let err = OwlGraphError::Render(RenderError::Spawn {
            program: "dot".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        });
        let adapter = ErrorAdapter::new(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "owlgraph::render");
        assert!(adapter.help().unwrap().to_string().contains("Graphviz"));
    }
}
