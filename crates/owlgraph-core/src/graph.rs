//! Diagram graph data model.
//!
//! This module provides the value types that the mapping engine produces and
//! the rewrite passes and renderer consume.
//!
//! # Architecture
//!
//! - [`Node`]: A diagram node (named entity, value carrier, restriction, connective, marker, reference)
//! - [`Edge`]: A directed edge between two node ids, optionally decorated with an [`EdgeLabel`]
//! - [`GraphElement`]: Either a node or an edge
//! - [`Graph`]: Intermediate builder pairing a head node with auxiliary elements
//! - [`ElementSet`]: A finished diagram; structurally equal elements collapse on insertion
//!
//! Sub-results are composed bottom-up with [`Graph::and`] and finally flattened
//! into an [`ElementSet`]. The set keeps insertion order, so everything built
//! on top of it iterates deterministically.

mod edge;
mod node;

pub use edge::{Edge, EdgeLabel, EdgeType};
pub use node::{Bound, CardinalityKind, Characteristic, Node, PropertyRole};

use indexmap::IndexSet;

use crate::identifier::Id;

/// A finished diagram: the set of all nodes and edges.
pub type ElementSet = IndexSet<GraphElement>;

/// A node or an edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphElement {
    Node(Node),
    Edge(Edge),
}

impl GraphElement {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Self::Node(_) => None,
            Self::Edge(edge) => Some(edge),
        }
    }
}

impl From<Node> for GraphElement {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Edge> for GraphElement {
    fn from(edge: Edge) -> Self {
        Self::Edge(edge)
    }
}

/// Intermediate result of mapping one construct.
///
/// The head node represents the construct itself; the elements are whatever
/// child nodes and edges are needed to render it. A graph without a head is
/// empty: the construct has no visual form.
///
/// # Examples
///
/// ```
/// use owlgraph_core::{
///     graph::{Edge, EdgeType, Graph, Node},
///     identifier::Id,
/// };
///
/// let foo = Graph::new(Node::Class { id: Id::new("foo"), name: "Foo".into() });
/// let bar = Graph::new(Node::Class { id: Id::new("bar"), name: "Bar".into() });
/// let edge = Edge::plain(EdgeType::HollowArrow, Id::new("foo"), Id::new("bar"));
///
/// let graph = foo.and(bar).with_edge(edge);
/// assert_eq!(graph.head_id(), Some(&Id::new("foo")));
/// assert_eq!(graph.into_elements().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    head: Option<Node>,
    elements: Vec<GraphElement>,
}

impl Graph {
    /// Creates a graph consisting of a single head node.
    pub fn new(head: Node) -> Self {
        Self {
            head: Some(head),
            elements: Vec::new(),
        }
    }

    /// Creates the empty graph.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if the graph has neither a head nor elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.elements.is_empty()
    }

    pub fn head(&self) -> Option<&Node> {
        self.head.as_ref()
    }

    pub fn head_id(&self) -> Option<&Id> {
        self.head.as_ref().map(Node::id)
    }

    /// Returns the auxiliary elements, without the head.
    pub fn elements(&self) -> &[GraphElement] {
        &self.elements
    }

    /// Merges two graphs, keeping the head of `self`.
    ///
    /// The head of `other` becomes an ordinary element of the result.
    pub fn and(mut self, other: Graph) -> Self {
        self.elements.extend(other.into_elements());
        self
    }

    /// Adds an element.
    pub fn with(mut self, element: impl Into<GraphElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Adds an edge.
    pub fn with_edge(self, edge: Edge) -> Self {
        self.with(edge)
    }

    /// Adds an element in place.
    pub fn push(&mut self, element: impl Into<GraphElement>) {
        self.elements.push(element.into());
    }

    /// Flattens the graph into its elements, head first.
    pub fn into_elements(self) -> Vec<GraphElement> {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        if let Some(head) = self.head {
            elements.push(GraphElement::Node(head));
        }
        elements.extend(self.elements);
        elements
    }
}

/// Iterates over the nodes of an element set.
pub fn nodes(elements: &ElementSet) -> impl Iterator<Item = &Node> {
    elements.iter().filter_map(GraphElement::as_node)
}

/// Iterates over the edges of an element set.
pub fn edges(elements: &ElementSet) -> impl Iterator<Item = &Edge> {
    elements.iter().filter_map(GraphElement::as_edge)
}
