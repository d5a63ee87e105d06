//! Punning: one IRI naming entities of several kinds.
//!
//! Entity nodes are keyed by IRI and kind, so a punned IRI yields several
//! nodes. Any edge pointing at one of them is copied to point at each of
//! them, so the diagram shows every role the IRI plays.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use log::trace;

use owlgraph_core::{
    graph::{ElementSet, GraphElement, nodes},
    identifier::Id,
    owl::Iri,
};

/// Fans edges out across every node that shares an entity IRI.
///
/// Only named-entity nodes are grouped. Reference placeholders and
/// render-only nodes never take part.
pub fn apply(elements: ElementSet) -> ElementSet {
    let mut groups: IndexMap<&Iri, IndexSet<Id>> = IndexMap::new();
    for node in nodes(&elements) {
        if let Some(iri) = node.source_iri() {
            groups.entry(iri).or_default().insert(node.id().clone());
        }
    }

    let mut fan_out: HashMap<Id, Vec<Id>> = HashMap::new();
    for (iri, members) in &groups {
        if members.len() < 2 {
            continue;
        }
        trace!(iri = iri.as_str(), nodes = members.len(); "Punned IRI");
        let members: Vec<Id> = members.iter().cloned().collect();
        for member in &members {
            fan_out.insert(member.clone(), members.clone());
        }
    }

    if fan_out.is_empty() {
        return elements;
    }

    let mut result = ElementSet::with_capacity(elements.len());
    for element in elements {
        match element {
            GraphElement::Edge(edge) => match fan_out.get(edge.target()) {
                Some(targets) => {
                    for target in targets {
                        result.insert(edge.with_target(target.clone()).into());
                    }
                }
                None => {
                    result.insert(GraphElement::Edge(edge));
                }
            },
            node => {
                result.insert(node);
            }
        }
    }
    result
}
