//! Whole-graph rewrite passes.
//!
//! Mapping works one axiom at a time, so a few things can only be fixed up
//! once every axiom has been mapped. Each pass here is a pure function from
//! an [`ElementSet`] to a new [`ElementSet`], and each is idempotent. They
//! run in a fixed order:
//!
//! 1. [`punning`] fans edges out to every node that shares an IRI.
//! 2. [`iri_reference`] replaces bare IRI placeholders with the entity nodes
//!    they name.
//! 3. [`property_marker`] merges the characteristic markers of each property
//!    into one.
//!
//! Reference resolution runs after punning so that a placeholder naming a
//! punned IRI is rewritten to every node of that IRI.

pub mod iri_reference;
pub mod property_marker;
pub mod punning;

use log::debug;

use owlgraph_core::graph::ElementSet;

/// A rewrite pass over a finished element set.
pub type Pass = fn(ElementSet) -> ElementSet;

/// All passes, in the order they run.
pub const PASSES: [(&str, Pass); 3] = [
    ("punning", punning::apply),
    ("iri_reference", iri_reference::apply),
    ("property_marker", property_marker::apply),
];

/// Runs every pass in order.
pub fn run_all(elements: ElementSet) -> ElementSet {
    PASSES.iter().fold(elements, |elements, (name, pass)| {
        let before = elements.len();
        let elements = pass(elements);
        debug!(pass = *name, before, after = elements.len(); "Applied rewrite pass");
        elements
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use owlgraph_core::{
        graph::{Characteristic, Edge, EdgeType, GraphElement, Node},
        identifier::Id,
        owl::Iri,
    };

    use super::*;

    fn entity_id(iri: &str, kind: &str) -> Id {
        Id::with_iri(iri, Iri::new(iri)).nested(kind)
    }

    fn sample() -> ElementSet {
        let iri = "http://a.org#x";
        let class = entity_id(iri, "class");
        let individual = entity_id(iri, "individual");
        let property = entity_id("http://a.org#p", "object_property");
        let reference = entity_id(iri, "ref");
        let marker_a = Id::new("m1");
        let marker_b = Id::new("m2");

        let elements: Vec<GraphElement> = vec![
            Node::Class {
                id: class.clone(),
                name: "x".to_string(),
            }
            .into(),
            Node::Individual {
                id: individual.clone(),
                name: "x".to_string(),
            }
            .into(),
            Node::ObjectProperty {
                id: property.clone(),
                name: "p".to_string(),
            }
            .into(),
            Node::IriReference {
                id: reference.clone(),
                iri: Iri::new(iri),
            }
            .into(),
            Node::PropertyMarker {
                id: marker_a.clone(),
                kinds: BTreeSet::from([Characteristic::Functional]),
            }
            .into(),
            Node::PropertyMarker {
                id: marker_b.clone(),
                kinds: BTreeSet::from([Characteristic::Transitive]),
            }
            .into(),
            Edge::plain(EdgeType::DefaultArrow, property.clone(), class).into(),
            Edge::plain(EdgeType::DefaultArrow, property.clone(), reference).into(),
            Edge::plain(EdgeType::DashedArrow, property.clone(), marker_a).into(),
            Edge::plain(EdgeType::DashedArrow, property, marker_b).into(),
        ];
        elements.into_iter().collect()
    }

    #[test]
    fn test_run_all_is_idempotent() {
        let once = run_all(sample());
        let twice = run_all(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_each_pass_is_idempotent() {
        for (name, pass) in PASSES {
            let once = pass(sample());
            let twice = pass(once.clone());
            assert_eq!(once, twice, "pass `{name}` is not idempotent");
        }
    }

    #[test]
    fn test_run_all_on_empty_set() {
        assert!(run_all(ElementSet::new()).is_empty());
    }
}
