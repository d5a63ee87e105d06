//! Graphviz DOT serialization.
//!
//! Every element of the final set becomes one statement, independently of
//! the others: one rule per node kind fixes its label, shape and font, one
//! rule per edge type fixes its arrowheads and line style. Node and edge
//! statements are sorted before they are spliced into the document template,
//! so the output does not depend on axiom order.

use log::debug;

use owlgraph_core::{
    graph::{Edge, EdgeLabel, EdgeType, ElementSet, GraphElement, Node},
    identifier::Id,
};

use crate::{
    config::{AppConfig, SYMBOL_FONT_FAMILY},
    export::Error,
};

/// Writes element sets as DOT documents using one configuration.
#[derive(Debug, Clone)]
pub struct DotWriter {
    rankdir: &'static str,
    font_family: String,
    font_size: f32,
    node_font_family: String,
    node_font_size: f32,
    node_shape: String,
    node_style: String,
    node_margin: String,
    background: String,
    foreground: String,
}

impl DotWriter {
    /// Resolves the configuration into document attributes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`] if a configured color is invalid.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let style = config.style();
        Ok(Self {
            rankdir: config.layout().direction().rankdir(),
            font_family: style.font_family().to_string(),
            font_size: style.font_size(),
            node_font_family: style.node_font_family().to_string(),
            node_font_size: style.node_font_size(),
            node_shape: style.node_shape().to_string(),
            node_style: style.node_style().to_string(),
            node_margin: style.node_margin().to_string(),
            background: style.background_color().map_err(Error::Style)?.to_hex(),
            foreground: style.foreground_color().map_err(Error::Style)?.to_hex(),
        })
    }

    /// Serializes `elements` into a complete DOT document.
    pub fn write(&self, elements: &ElementSet) -> String {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for element in elements {
            match element {
                GraphElement::Node(node) => nodes.push(node_statement(node)),
                GraphElement::Edge(edge) => edges.push(edge_statement(edge)),
            }
        }
        nodes.sort();
        edges.sort();
        debug!(nodes = nodes.len(), edges = edges.len(); "Writing DOT document");

        format!(
            "digraph ontology {{
    graph [rankdir={rankdir}, bgcolor={background}, fontname={font}, fontsize={font_size}, fontcolor={foreground}];
    node [shape={shape}, style={style}, margin={margin}, fontname={node_font}, fontsize={node_font_size}, color={foreground}, fontcolor={foreground}];
    edge [fontname={font}, fontsize={font_size}, color={foreground}, fontcolor={foreground}];

{nodes}

{edges}
}}
",
            rankdir = self.rankdir,
            background = quote(&self.background),
            font = quote(&self.font_family),
            font_size = self.font_size,
            foreground = quote(&self.foreground),
            shape = quote(&self.node_shape),
            style = quote(&self.node_style),
            margin = quote(&self.node_margin),
            node_font = quote(&self.node_font_family),
            node_font_size = self.node_font_size,
            nodes = indent(&nodes),
            edges = indent(&edges),
        )
    }
}

/// Returns the DOT statement for one node.
pub fn node_statement(node: &Node) -> String {
    let attributes = match node {
        Node::Class { name, .. } => format!("label={}", quote(name)),
        Node::ObjectProperty { name, .. } => {
            format!("label={}, shape=hexagon, style=solid", quote(name))
        }
        Node::DataProperty { name, .. } => {
            format!("label={}, shape=hexagon, style=dashed", quote(name))
        }
        Node::AnnotationProperty { name, .. } => {
            format!("label={}, shape=hexagon, style=dotted", quote(name))
        }
        Node::Individual { name, .. } => {
            format!("label={}, shape=ellipse, style=solid", quote(name))
        }
        Node::Datatype { name, .. } => format!("label={}, style=dashed", quote(name)),
        Node::Literal { value, .. } => format!("label={}, shape=plaintext", quote(value)),
        Node::PropertyChain { value, .. } => {
            format!("label={}, shape=plaintext", quote(value))
        }
        Node::Rule { value, .. } => format!("label={}, shape=note, style=solid", quote(value)),
        Node::Cardinality { n, kind, .. } => {
            let label = format!("{} {n}", kind.bound.symbol());
            let peripheries = if kind.qualified { 2 } else { 1 };
            symbol(&label, &format!("peripheries={peripheries}"))
        }
        Node::ExistentialRestriction { .. } => symbol("∃", ""),
        Node::UniversalRestriction { .. } => symbol("∀", ""),
        Node::ValueRestriction { .. } => symbol("∋", ""),
        Node::SelfRestriction { .. } => symbol("self", ""),
        Node::Intersection { .. } => symbol("⊓", ""),
        Node::Union { .. } => symbol("⊔", ""),
        Node::Complement { .. } => symbol("¬", ""),
        Node::ClosedClass { .. } => symbol("{ }", ""),
        Node::Disjointness { .. } => symbol("⊥", ""),
        Node::DisjointUnion { .. } => symbol("⨄", ""),
        Node::Equality { .. } => symbol("=", ""),
        Node::Inequality { .. } => symbol("≠", ""),
        Node::Inverse { .. } => symbol("⁻¹", ""),
        Node::Invisible { .. } => "label=\"\", shape=point, width=0.05".to_string(),
        Node::PropertyMarker { kinds, .. } => {
            let label = kinds
                .iter()
                .map(|kind| kind.abbreviation())
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "label={}, shape=plaintext, fontname={}",
                quote(&label),
                quote(SYMBOL_FONT_FAMILY)
            )
        }
        Node::IriReference { iri, .. } => {
            format!("label={}, style=dotted", quote(iri.as_str()))
        }
    };
    format!("{} [{attributes}];", quote_id(node.id()))
}

/// Returns the DOT statement for one edge.
pub fn edge_statement(edge: &Edge) -> String {
    let mut attributes = match edge.edge_type() {
        EdgeType::DefaultArrow => "arrowhead=normal".to_string(),
        EdgeType::HollowArrow => "arrowhead=empty".to_string(),
        EdgeType::DoubleEndedHollowArrow => {
            "dir=both, arrowhead=empty, arrowtail=empty".to_string()
        }
        EdgeType::DashedArrow => "arrowhead=open, style=dashed".to_string(),
        EdgeType::NoArrow => "arrowhead=none".to_string(),
    };
    if let Some(label) = edge.label() {
        attributes.push_str(&format!(", class={}", quote(label.as_str())));
        if matches!(label, EdgeLabel::Domain | EdgeLabel::Range) {
            attributes.push_str(&format!(", label={}", quote(label.as_str())));
        }
    }
    format!(
        "{} -> {} [{attributes}];",
        quote_id(edge.source()),
        quote_id(edge.target())
    )
}

/// Attributes of a small symbol node drawn in the symbol font.
fn symbol(label: &str, extra: &str) -> String {
    let mut attributes = format!(
        "label={}, shape=circle, style=solid, margin=0.02, fontname={}",
        quote(label),
        quote(SYMBOL_FONT_FAMILY)
    );
    if !extra.is_empty() {
        attributes.push_str(", ");
        attributes.push_str(extra);
    }
    attributes
}

fn quote_id(id: &Id) -> String {
    quote(id.key())
}

/// Quotes a DOT string, escaping quotes, backslashes and line breaks.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn indent(statements: &[String]) -> String {
    statements
        .iter()
        .map(|statement| format!("    {statement}"))
        .collect::<Vec<_>>()
        .join("\n")
}
