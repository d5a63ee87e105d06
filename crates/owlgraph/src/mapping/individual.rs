//! Individuals and literals.

use owlgraph_core::{
    graph::{Graph, Node},
    identifier::Id,
    owl::{AnonymousIndividual, Individual, Literal},
};

use super::Mapper;

impl Mapper<'_> {
    pub fn map_individual(&mut self, individual: &Individual) -> Graph {
        match individual {
            Individual::Named(named) => self.map_named_individual(named),
            Individual::Anonymous(anonymous) => self.map_anonymous_individual(anonymous),
        }
    }

    /// Maps an anonymous individual to a node keyed by its blank node id.
    ///
    /// Anonymous individuals have no IRI, so they never take part in punning
    /// or reference resolution.
    pub fn map_anonymous_individual(&mut self, individual: &AnonymousIndividual) -> Graph {
        let node_id = individual.node_id();
        Graph::new(Node::Individual {
            id: Id::new(&format!("_:anonymous::{node_id}")),
            name: node_id.to_string(),
        })
    }

    /// Maps a literal to a value node with a fresh id.
    pub fn map_literal(&mut self, literal: &Literal) -> Graph {
        Graph::new(Node::Literal {
            id: self.synthetic_id(),
            value: literal.to_string(),
        })
    }
}
