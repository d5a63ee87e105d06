//! Display names for named entities.
//!
//! A [`NameMapper`] turns an entity IRI into the label printed in its diagram
//! node. [`FragmentNameMapper`] uses the IRI's local fragment;
//! [`LabelNameMapper`] prefers `rdfs:label` annotations found in the ontology.

use std::collections::HashMap;

use crate::owl::{AnnotationSubject, AnnotationValue, Axiom, Iri, Ontology, RDFS_LABEL};

/// Derives the display label of a named entity.
pub trait NameMapper {
    fn name(&self, iri: &Iri) -> String;
}

/// Names entities by the local fragment of their IRI.
#[derive(Debug, Default, Clone, Copy)]
pub struct FragmentNameMapper;

impl NameMapper for FragmentNameMapper {
    fn name(&self, iri: &Iri) -> String {
        iri.fragment().to_string()
    }
}

/// Names entities by their `rdfs:label`, falling back to the IRI fragment.
///
/// When an entity has several labels, one in the preferred language wins,
/// then an untagged one, then the first one seen.
///
/// # Examples
///
/// ```
/// use owlgraph_core::{
///     naming::{LabelNameMapper, NameMapper},
///     owl::{AnnotationProperty, AnnotationSubject, AnnotationValue, Axiom, Iri, Literal, Ontology, RDFS_LABEL},
/// };
///
/// let lion = Iri::new("http://example.org/zoo#Lion");
/// let ontology = Ontology::new(vec![Axiom::AnnotationAssertion {
///     property: AnnotationProperty::new(RDFS_LABEL),
///     subject: AnnotationSubject::Iri(lion.clone()),
///     value: AnnotationValue::Literal(Literal::tagged("Big cat", "en")),
/// }]);
///
/// let names = LabelNameMapper::from_ontology(&ontology, Some("en"));
/// assert_eq!(names.name(&lion), "Big cat");
/// assert_eq!(names.name(&Iri::new("http://example.org/zoo#Tiger")), "Tiger");
/// ```
#[derive(Debug, Default, Clone)]
pub struct LabelNameMapper {
    labels: HashMap<Iri, String>,
}

impl LabelNameMapper {
    /// Collects labels from the ontology's `rdfs:label` annotation assertions.
    pub fn from_ontology(ontology: &Ontology, language: Option<&str>) -> Self {
        // Rank: 0 = preferred language, 1 = untagged, 2 = anything else.
        let mut ranked: HashMap<Iri, (u8, String)> = HashMap::new();

        for axiom in ontology.axioms() {
            let Axiom::AnnotationAssertion {
                property,
                subject: AnnotationSubject::Iri(subject),
                value: AnnotationValue::Literal(literal),
            } = axiom
            else {
                continue;
            };
            if property.iri().as_str() != RDFS_LABEL {
                continue;
            }

            let rank = match (literal.language(), language) {
                (Some(tag), Some(wanted)) if tag.eq_ignore_ascii_case(wanted) => 0,
                (None, _) => 1,
                _ => 2,
            };
            let better = ranked
                .get(subject)
                .is_none_or(|(existing, _)| rank < *existing);
            if better {
                ranked.insert(subject.clone(), (rank, literal.lexical().to_string()));
            }
        }

        Self {
            labels: ranked
                .into_iter()
                .map(|(iri, (_, label))| (iri, label))
                .collect(),
        }
    }

    /// Returns the number of entities with a label.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl NameMapper for LabelNameMapper {
    fn name(&self, iri: &Iri) -> String {
        self.labels
            .get(iri)
            .cloned()
            .unwrap_or_else(|| FragmentNameMapper.name(iri))
    }
}
