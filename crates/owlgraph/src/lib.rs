//! owlgraph - Render OWL 2 ontologies as diagrams.
//!
//! Mapping, graph rewriting and rendering for ontology diagrams. An already
//! parsed ontology is mapped axiom by axiom to diagram nodes and edges, the
//! resulting graph is cleaned up by whole-graph rewrite passes, and the final
//! graph is written as Graphviz DOT and laid out by an external renderer.

pub mod config;
pub mod export;
pub mod mapping;
pub mod render;
pub mod transform;

mod error;

pub use owlgraph_core::{color, graph, identifier, naming, owl};

pub use error::OwlGraphError;

use log::{debug, info, trace};

use owlgraph_core::{
    graph::ElementSet,
    identifier::Identifier,
    naming::{FragmentNameMapper, LabelNameMapper, NameMapper},
    owl::Ontology,
};

use config::{AppConfig, OutputFormat};
use export::dot::DotWriter;
use mapping::Mapper;
use render::{GraphvizRenderer, LayoutRenderer};

/// Builder for mapping and rendering ontology diagrams.
///
/// This provides an API for processing ontologies through the mapping,
/// rewriting and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use owlgraph::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"{"axioms": [{"SubClassOf": {
///     "sub": {"Class": "http://example.org#Foo"},
///     "sup": {"Class": "http://example.org#Bar"}
/// }}]}"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Decode the ontology
/// let ontology = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render it through Graphviz
/// let svg = builder.render(&ontology)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout, style and renderer settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decode an ontology from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`OwlGraphError::Input`] if `source` is not a valid ontology document.
    pub fn parse(&self, source: &str) -> Result<Ontology, OwlGraphError> {
        info!("Decoding ontology");
        let ontology: Ontology = serde_json::from_str(source)?;
        debug!(axioms = ontology.axioms().len(); "Ontology decoded");
        Ok(ontology)
    }

    /// Map an ontology to its final diagram graph.
    ///
    /// Synthetic ids are random, so two calls give structurally equal graphs
    /// with different ids. Use [`Self::build_graph_with`] to control them.
    pub fn build_graph(&self, ontology: &Ontology) -> ElementSet {
        let mut identifier = Identifier::new();
        self.build_graph_with(ontology, &mut identifier)
    }

    /// Map an ontology to its final diagram graph, allocating ids from `identifier`.
    pub fn build_graph_with(&self, ontology: &Ontology, identifier: &mut Identifier) -> ElementSet {
        info!(axioms = ontology.axioms().len(); "Mapping ontology");

        let style = self.config.style();
        let names: Box<dyn NameMapper> = if style.use_labels() {
            Box::new(LabelNameMapper::from_ontology(
                ontology,
                style.label_language(),
            ))
        } else {
            Box::new(FragmentNameMapper)
        };

        let elements = Mapper::new(identifier, names.as_ref()).map_ontology(ontology);
        let elements = transform::run_all(elements);

        info!(elements = elements.len(); "Diagram graph built");
        trace!(elements:?; "Final diagram graph");
        elements
    }

    /// Serialize a diagram graph as a DOT document.
    ///
    /// # Errors
    ///
    /// Returns [`OwlGraphError::Config`] if the style configuration is invalid.
    pub fn render_dot(&self, elements: &ElementSet) -> Result<String, OwlGraphError> {
        let writer = DotWriter::new(&self.config).map_err(|err| match err {
            export::Error::Style(message) => OwlGraphError::Config(message),
            other => OwlGraphError::Export(other),
        })?;
        Ok(writer.write(elements))
    }

    /// Render an ontology to image bytes with the configured Graphviz executable.
    ///
    /// # Errors
    ///
    /// Returns `OwlGraphError` for configuration, rendering or font embedding errors.
    pub fn render(&self, ontology: &Ontology) -> Result<Vec<u8>, OwlGraphError> {
        let renderer = GraphvizRenderer::from_config(self.config.renderer());
        self.render_with(ontology, &renderer)
    }

    /// Render an ontology to image bytes with the given layout renderer.
    ///
    /// SVG output gets the symbol font embedded; other formats are returned
    /// exactly as the renderer produced them.
    ///
    /// # Errors
    ///
    /// Returns `OwlGraphError` for configuration, rendering or font embedding errors.
    pub fn render_with(
        &self,
        ontology: &Ontology,
        renderer: &dyn LayoutRenderer,
    ) -> Result<Vec<u8>, OwlGraphError> {
        let elements = self.build_graph(ontology);
        let document = self.render_dot(&elements)?;
        trace!(document; "DOT document");

        let format = self.config.renderer().format();
        let direction = self.config.layout().direction();
        info!(format:% = format, direction:% = direction; "Rendering diagram");
        let image = renderer.render(&document, format, direction)?;

        match format {
            OutputFormat::Svg => {
                let svg = String::from_utf8(image).map_err(export::Error::from)?;
                let svg = export::svg::embed_font(&svg)?;
                info!("SVG rendered successfully");
                Ok(svg.into_bytes())
            }
            OutputFormat::Png => {
                info!(bytes = image.len(); "Image rendered successfully");
                Ok(image)
            }
        }
    }
}
