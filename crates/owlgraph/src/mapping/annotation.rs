//! Annotation subjects, values and bare IRI references.

use owlgraph_core::{
    graph::{EdgeLabel, Graph, Node},
    owl::{AnnotationSubject, AnnotationValue, Iri},
};

use super::Mapper;

impl Mapper<'_> {
    /// Maps a bare IRI to a reference placeholder.
    ///
    /// The placeholder is resolved to the matching entity nodes, if any, once
    /// the whole ontology has been mapped.
    pub fn map_iri_reference(&mut self, iri: &Iri) -> Graph {
        Graph::new(Node::IriReference {
            id: self.identifier.id_for_iri(iri).nested("ref"),
            iri: iri.clone(),
        })
    }

    pub fn map_annotation_subject(&mut self, subject: &AnnotationSubject) -> Graph {
        match subject {
            AnnotationSubject::Iri(iri) => self.map_iri_reference(iri),
            AnnotationSubject::AnonymousIndividual(individual) => {
                self.map_anonymous_individual(individual)
            }
        }
    }

    /// Maps an annotation value together with the label of the edge that
    /// should point at it.
    pub fn map_annotation_value(&mut self, value: &AnnotationValue) -> (Graph, Option<EdgeLabel>) {
        match value {
            AnnotationValue::Iri(iri) => (self.map_iri_reference(iri), None),
            AnnotationValue::Literal(literal) => {
                (self.map_literal(literal), Some(EdgeLabel::Literal))
            }
            AnnotationValue::AnonymousIndividual(individual) => (
                self.map_anonymous_individual(individual),
                Some(EdgeLabel::Individual),
            ),
        }
    }
}
