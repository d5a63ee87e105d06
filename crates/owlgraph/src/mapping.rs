//! Mapping of ontology constructs to diagram graphs.
//!
//! This module turns the typed ontology model into diagram elements. There is
//! one mapping function per closed construct family (axioms, class
//! expressions, data ranges, individuals, property expressions, entities,
//! annotation values, rule atoms), and each one matches its family
//! exhaustively. A construct kind with no visual form maps to an empty
//! [`Graph`] on purpose; it is never an error.
//!
//! Composite constructs map their operands first and splice the operand
//! graphs into their own result, so every call returns a [`Graph`] whose head
//! represents the construct itself.
//!
//! Mapping is a pure function of the ontology apart from synthetic id
//! allocation, which goes through the [`Identifier`] owned by the caller.

mod annotation;
mod axiom;
mod class_expression;
mod data_range;
mod entity;
mod individual;
mod property;
mod rule;

use indexmap::IndexSet;
use log::{debug, trace};

use owlgraph_core::{
    graph::{Edge, EdgeLabel, EdgeType, ElementSet, Graph, Node},
    identifier::{Id, Identifier},
    naming::NameMapper,
    owl::Ontology,
};

/// Maps ontology constructs to [`Graph`]s.
///
/// A `Mapper` borrows the id allocator and the name mapper for the duration
/// of one mapping run.
///
/// # Examples
///
/// ```
/// use owlgraph::mapping::Mapper;
/// use owlgraph_core::{
///     identifier::Identifier,
///     naming::FragmentNameMapper,
///     owl::{Axiom, Class, ClassExpression, Ontology},
/// };
///
/// let ontology = Ontology::new(vec![Axiom::SubClassOf {
///     sub: ClassExpression::Class(Class::new("http://example.org#Foo")),
///     sup: ClassExpression::Class(Class::new("http://example.org#Bar")),
/// }]);
///
/// let mut identifier = Identifier::new();
/// let mut mapper = Mapper::new(&mut identifier, &FragmentNameMapper);
/// let elements = mapper.map_ontology(&ontology);
/// assert_eq!(elements.len(), 3);
/// ```
pub struct Mapper<'a> {
    identifier: &'a mut Identifier,
    names: &'a dyn NameMapper,
}

impl<'a> Mapper<'a> {
    /// Creates a mapper allocating ids from `identifier` and naming entities with `names`.
    pub fn new(identifier: &'a mut Identifier, names: &'a dyn NameMapper) -> Self {
        Self { identifier, names }
    }

    /// Maps every axiom of the ontology and flattens the results into one set.
    pub fn map_ontology(&mut self, ontology: &Ontology) -> ElementSet {
        let mut elements = ElementSet::new();
        for axiom in ontology.axioms() {
            let graph = self.map_axiom(axiom);
            trace!(axiom:?, graph:?; "Mapped axiom");
            elements.extend(graph.into_elements());
        }
        debug!(
            axioms = ontology.axioms().len(),
            elements = elements.len();
            "Mapped ontology"
        );
        elements
    }

    fn synthetic_id(&mut self) -> Id {
        self.identifier.synthetic_id()
    }
}

/// Builds a plain or decorated edge.
fn edge(edge_type: EdgeType, from: Id, to: Id, label: Option<EdgeLabel>) -> Edge {
    match label {
        Some(label) => Edge::decorated(edge_type, from, to, label),
        None => Edge::plain(edge_type, from, to),
    }
}

/// Links the head of `graph` to the head of `target` and merges `target` in.
///
/// No edge is added when either side is empty.
fn attach(mut graph: Graph, target: Graph, edge_type: EdgeType, label: Option<EdgeLabel>) -> Graph {
    if let (Some(from), Some(to)) = (graph.head_id(), target.head_id()) {
        let link = edge(edge_type, from.clone(), to.clone(), label);
        graph.push(link);
    }
    graph.and(target)
}

/// Links the head of `source` to the head of `graph` and merges `source` in,
/// keeping the head of `graph`.
fn attach_from(
    graph: Graph,
    source: Graph,
    edge_type: EdgeType,
    label: Option<EdgeLabel>,
) -> Graph {
    let mut graph = graph;
    if let (Some(from), Some(to)) = (source.head_id(), graph.head_id()) {
        let link = edge(edge_type, from.clone(), to.clone(), label);
        graph.push(link);
    }
    graph.and(source)
}

/// Builds a connective: `head` linked to each operand with a default arrow.
fn connective(head: Node, operands: Vec<Graph>, label: Option<EdgeLabel>) -> Graph {
    operands
        .into_iter()
        .fold(Graph::new(head), |graph, operand| {
            attach(graph, operand, EdgeType::DefaultArrow, label)
        })
}

/// Builds a hub node linked to each operand with a dashed arrow.
fn hub(head: Node, operands: Vec<Graph>, label: Option<EdgeLabel>) -> Graph {
    operands
        .into_iter()
        .fold(Graph::new(head), |graph, operand| {
            attach(graph, operand, EdgeType::DashedArrow, label)
        })
}

/// Links already-mapped operands pairwise as equivalent.
///
/// Each unordered pair of distinct heads gets exactly one double-ended hollow
/// arrow, directed from the lexicographically smaller id to the larger one,
/// so `n` distinct operands give `n·(n−1)/2` edges whatever their order. The
/// head of the result is the head of the first operand.
fn pairwise_equivalent(operands: Vec<Graph>) -> Graph {
    let heads: Vec<Id> = operands
        .iter()
        .filter_map(|operand| operand.head_id().cloned())
        .collect();

    let mut pairs: IndexSet<(Id, Id)> = IndexSet::new();
    for a in &heads {
        for b in &heads {
            if a == b {
                continue;
            }
            let pair = if a < b {
                (a.clone(), b.clone())
            } else {
                (b.clone(), a.clone())
            };
            pairs.insert(pair);
        }
    }

    let graph = operands
        .into_iter()
        .reduce(Graph::and)
        .unwrap_or_default();

    pairs.into_iter().fold(graph, |graph, (from, to)| {
        graph.with_edge(Edge::plain(EdgeType::DoubleEndedHollowArrow, from, to))
    })
}

/// Deduplicates operands by equality, keeping first occurrences in order.
fn unique<T: Eq + std::hash::Hash>(operands: &[T]) -> IndexSet<&T> {
    operands.iter().collect()
}
