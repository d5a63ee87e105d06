//! Consolidation of property characteristic markers.
//!
//! Every characteristic axiom hangs its own marker off the property. This
//! pass collapses all markers of one property into a single marker holding
//! the union of their characteristics, reached by a single dashed edge.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;
use log::trace;

use owlgraph_core::{
    graph::{Characteristic, Edge, EdgeType, ElementSet, GraphElement, Node, edges},
    identifier::Id,
};

pub fn apply(elements: ElementSet) -> ElementSet {
    let markers: IndexMap<&Id, &BTreeSet<Characteristic>> = elements
        .iter()
        .filter_map(GraphElement::as_node)
        .filter_map(|node| Some((node.id(), node.as_property_marker()?)))
        .collect();

    // Property id -> markers hanging off it.
    let mut groups: IndexMap<Id, Vec<(Id, &BTreeSet<Characteristic>)>> = IndexMap::new();
    for edge in edges(&elements) {
        if edge.edge_type() != EdgeType::DashedArrow {
            continue;
        }
        if let Some(kinds) = markers.get(edge.target()) {
            groups
                .entry(edge.source().clone())
                .or_default()
                .push((edge.target().clone(), kinds));
        }
    }

    let mut replaced: HashSet<Id> = HashSet::new();
    let mut merged: Vec<GraphElement> = Vec::new();
    for (property, group) in &groups {
        if group.len() < 2 {
            continue;
        }
        let Some(id) = group.iter().map(|(id, _)| id).min().cloned() else {
            continue;
        };
        let kinds: BTreeSet<Characteristic> = group
            .iter()
            .flat_map(|(_, kinds)| kinds.iter().copied())
            .collect();
        trace!(property:% = property, markers = group.len(); "Merged property markers");

        replaced.extend(group.iter().map(|(id, _)| id.clone()));
        merged.push(
            Node::PropertyMarker {
                id: id.clone(),
                kinds,
            }
            .into(),
        );
        merged.push(Edge::plain(EdgeType::DashedArrow, property.clone(), id).into());
    }

    if replaced.is_empty() {
        return elements;
    }

    let mut result: ElementSet = elements
        .iter()
        .filter(|element| match element {
            GraphElement::Node(node) => !replaced.contains(node.id()),
            GraphElement::Edge(edge) => !replaced.contains(edge.target()),
        })
        .cloned()
        .collect();
    result.extend(merged);
    result
}
