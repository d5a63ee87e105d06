//! Resolution of bare IRI references.
//!
//! Annotation axioms and built-in rule atoms mention IRIs without saying what
//! kind of entity they name, so mapping emits a placeholder node for them.
//! This pass swaps each placeholder for the entity nodes carrying the same
//! IRI. A placeholder with no matching entity stays in the diagram as is.

use indexmap::{IndexMap, IndexSet};
use log::trace;

use owlgraph_core::{
    graph::{Edge, ElementSet, GraphElement, nodes},
    identifier::Id,
    owl::Iri,
};

pub fn apply(elements: ElementSet) -> ElementSet {
    let mut entities: IndexMap<&Iri, IndexSet<Id>> = IndexMap::new();
    for node in nodes(&elements) {
        if let Some(iri) = node.source_iri() {
            entities.entry(iri).or_default().insert(node.id().clone());
        }
    }

    let mut resolved: IndexMap<Id, Vec<Id>> = IndexMap::new();
    for node in nodes(&elements) {
        let Some(iri) = node.as_iri_reference() else {
            continue;
        };
        if let Some(matches) = entities.get(iri) {
            trace!(iri = iri.as_str(), matches = matches.len(); "Resolved IRI reference");
            resolved.insert(node.id().clone(), matches.iter().cloned().collect());
        }
    }

    if resolved.is_empty() {
        return elements;
    }

    let mut result = ElementSet::with_capacity(elements.len());
    for element in elements {
        match element {
            GraphElement::Node(node) if resolved.contains_key(node.id()) => {}
            GraphElement::Edge(edge) => {
                for edge in rewrite(&edge, &resolved) {
                    result.insert(edge.into());
                }
            }
            node => {
                result.insert(node);
            }
        }
    }
    result
}

/// Rewrites both endpoints of an edge, producing one edge per combination
/// of replacements.
fn rewrite(edge: &Edge, resolved: &IndexMap<Id, Vec<Id>>) -> Vec<Edge> {
    let sources = match resolved.get(edge.source()) {
        Some(ids) => ids.clone(),
        None => vec![edge.source().clone()],
    };
    let targets = match resolved.get(edge.target()) {
        Some(ids) => ids.clone(),
        None => vec![edge.target().clone()],
    };

    let mut edges = Vec::with_capacity(sources.len() * targets.len());
    for source in &sources {
        for target in &targets {
            edges.push(
                edge.with_source(source.clone())
                    .with_target(target.clone()),
            );
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use owlgraph_core::graph::{EdgeLabel, EdgeType, Node, edges};

    use super::*;

    const X: &str = "http://a.org#x";

    fn id(iri: &str, kind: &str) -> Id {
        Id::with_iri(iri, Iri::new(iri)).nested(kind)
    }

    fn reference(iri: &str) -> Node {
        Node::IriReference {
            id: id(iri, "ref"),
            iri: Iri::new(iri),
        }
    }

    #[test]
    fn test_reference_replaced_by_entity() {
        let class = id(X, "class");
        let property = Id::new("p");
        let elements: ElementSet = vec![
            GraphElement::from(Node::Class {
                id: class.clone(),
                name: "x".to_string(),
            }),
            reference(X).into(),
            Edge::decorated(
                EdgeType::DefaultArrow,
                property.clone(),
                id(X, "ref"),
                EdgeLabel::Domain,
            )
            .into(),
        ]
        .into_iter()
        .collect();

        let result = apply(elements);
        assert!(nodes(&result).all(|node| !node.is_iri_reference()));
        let edges: Vec<&Edge> = edges(&result).collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source(), &property);
        assert_eq!(edges[0].target(), &class);
        assert_eq!(edges[0].label(), Some(EdgeLabel::Domain));
    }

    #[test]
    fn test_reference_fans_out_over_punned_entities() {
        let class = id(X, "class");
        let individual = id(X, "individual");
        let elements: ElementSet = vec![
            GraphElement::from(Node::Class {
                id: class.clone(),
                name: "x".to_string(),
            }),
            Node::Individual {
                id: individual.clone(),
                name: "x".to_string(),
            }
            .into(),
            reference(X).into(),
            Edge::plain(EdgeType::NoArrow, id(X, "ref"), Id::new("helper")).into(),
        ]
        .into_iter()
        .collect();

        let result = apply(elements);
        let sources: Vec<&Id> = edges(&result).map(Edge::source).collect();
        assert_eq!(sources, vec![&class, &individual]);
    }

    #[test]
    fn test_unmatched_reference_is_kept() {
        let elements: ElementSet = vec![
            GraphElement::from(reference(X)),
            Edge::plain(EdgeType::DefaultArrow, Id::new("p"), id(X, "ref")).into(),
        ]
        .into_iter()
        .collect();
        assert_eq!(apply(elements.clone()), elements);
    }

    #[test]
    fn test_edge_between_two_references() {
        let y = "http://a.org#y";
        let elements: ElementSet = vec![
            GraphElement::from(Node::Class {
                id: id(X, "class"),
                name: "x".to_string(),
            }),
            Node::Datatype {
                id: id(y, "datatype"),
                name: "y".to_string(),
            }
            .into(),
            reference(X).into(),
            reference(y).into(),
            Edge::plain(EdgeType::DefaultArrow, id(X, "ref"), id(y, "ref")).into(),
        ]
        .into_iter()
        .collect();

        let result = apply(elements);
        let edges: Vec<&Edge> = edges(&result).collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source(), &id(X, "class"));
        assert_eq!(edges[0].target(), &id(y, "datatype"));
    }
}
