//! Integration tests for the DiagramBuilder API
//!
//! These tests drive the whole pipeline through the public API, with an
//! in-process layout renderer standing in for Graphviz unless noted.

use std::{cell::RefCell, process::Command};

use owlgraph::{
    DiagramBuilder, OwlGraphError,
    config::{AppConfig, Direction, LayoutConfig, OutputFormat, RendererConfig, StyleConfig},
    render::{LayoutRenderer, RenderError},
};

const SUBCLASS: &str = r#"{
    "iri": "http://example.org/zoo",
    "axioms": [
        {"SubClassOf": {
            "sub": {"Class": "http://example.org/zoo#Lion"},
            "sup": {"Class": "http://example.org/zoo#Animal"}
        }}
    ]
}"#;

/// Records the document it receives and answers with a fixed image.
struct FakeRenderer {
    image: Vec<u8>,
    seen: RefCell<Vec<(String, OutputFormat, Direction)>>,
}

impl FakeRenderer {
    fn new(image: &str) -> Self {
        Self {
            image: image.as_bytes().to_vec(),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl LayoutRenderer for FakeRenderer {
    fn render(
        &self,
        document: &str,
        format: OutputFormat,
        direction: Direction,
    ) -> Result<Vec<u8>, RenderError> {
        self.seen
            .borrow_mut()
            .push((document.to_string(), format, direction));
        Ok(self.image.clone())
    }
}

fn dot_available() -> bool {
    Command::new("dot").arg("-V").output().is_ok()
}

#[test]
fn test_parse_ontology() {
    let builder = DiagramBuilder::default();
    let ontology = builder.parse(SUBCLASS).expect("Failed to parse ontology");
    assert_eq!(ontology.axioms().len(), 1);
    assert_eq!(
        ontology.iri().map(|iri| iri.as_str()),
        Some("http://example.org/zoo")
    );
}

#[test]
fn test_parse_invalid_input_returns_error() {
    let builder = DiagramBuilder::default();
    let err = builder
        .parse(r#"{"axioms": [{"NoSuchAxiom": 1}]}"#)
        .unwrap_err();
    assert!(matches!(err, OwlGraphError::Input { line: 1, .. }));
}

#[test]
fn test_render_with_fake_renderer_embeds_font() {
    let builder = DiagramBuilder::default();
    let ontology = builder.parse(SUBCLASS).unwrap();
    let renderer = FakeRenderer::new("<svg xmlns=\"http://www.w3.org/2000/svg\"><g/></svg>");

    let image = builder.render_with(&ontology, &renderer).unwrap();
    let svg = String::from_utf8(image).unwrap();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\">\n<style"));
    assert!(svg.ends_with("<g/></svg>"));

    let seen = renderer.seen.borrow();
    assert_eq!(seen.len(), 1);
    let (document, format, direction) = &seen[0];
    assert!(document.contains("\"http://example.org/zoo#Lion::class\" [label=\"Lion\"];"));
    assert!(document.contains(
        "\"http://example.org/zoo#Lion::class\" -> \"http://example.org/zoo#Animal::class\" [arrowhead=empty];"
    ));
    assert_eq!(*format, OutputFormat::Svg);
    assert_eq!(*direction, Direction::TopToBottom);
}

#[test]
fn test_svg_without_root_tag_is_an_error() {
    let builder = DiagramBuilder::default();
    let ontology = builder.parse(SUBCLASS).unwrap();
    let renderer = FakeRenderer::new("not an image");

    let err = builder.render_with(&ontology, &renderer).unwrap_err();
    assert!(matches!(
        err,
        OwlGraphError::Export(owlgraph::export::Error::MissingRootTag)
    ));
}

#[test]
fn test_png_is_passed_through() {
    let config = AppConfig::new(
        LayoutConfig::new(Direction::LeftToRight),
        StyleConfig::default(),
        RendererConfig::new("dot", OutputFormat::Png),
    );
    let builder = DiagramBuilder::new(config);
    let ontology = builder.parse(SUBCLASS).unwrap();
    let renderer = FakeRenderer::new("\u{89}PNG");

    let image = builder.render_with(&ontology, &renderer).unwrap();
    assert_eq!(image, "\u{89}PNG".as_bytes());

    let seen = renderer.seen.borrow();
    assert_eq!(seen[0].1, OutputFormat::Png);
    assert_eq!(seen[0].2, Direction::LeftToRight);
    assert!(seen[0].0.contains("rankdir=LR"));
}

#[test]
fn test_missing_renderer_is_reported() {
    let config = AppConfig::new(
        LayoutConfig::default(),
        StyleConfig::default(),
        RendererConfig::new("owlgraph-missing-renderer", OutputFormat::Svg),
    );
    let builder = DiagramBuilder::new(config);
    let ontology = builder.parse(SUBCLASS).unwrap();

    let err = builder.render(&ontology).unwrap_err();
    assert!(matches!(
        err,
        OwlGraphError::Render(RenderError::Spawn { .. })
    ));
}

#[test]
fn test_render_with_graphviz() {
    if !dot_available() {
        eprintln!("skipping: Graphviz `dot` is not installed");
        return;
    }

    let builder = DiagramBuilder::default();
    let ontology = builder.parse(SUBCLASS).unwrap();
    let svg = String::from_utf8(builder.render(&ontology).unwrap()).unwrap();

    let root = svg.find("<svg").expect("Output should contain SVG tag");
    let style = svg.find("<style").expect("Output should contain the font");
    assert!(root < style);
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("Lion"));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();
    let renderer = FakeRenderer::new("<svg></svg>");

    let first = builder.parse(SUBCLASS).unwrap();
    let second = builder.parse(r#"{"axioms": []}"#).unwrap();
    assert!(builder.render_with(&first, &renderer).is_ok());
    assert!(builder.render_with(&second, &renderer).is_ok());
    assert_eq!(renderer.seen.borrow().len(), 2);
}
