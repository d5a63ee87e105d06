//! Typed OWL 2 ontology object model.
//!
//! This module holds the already-parsed form of an ontology: named entities,
//! the closed expression families (class expressions, data ranges, property
//! expressions, individuals, annotation values, rule atoms) and the closed set
//! of axiom kinds. Nothing here parses ontology syntax; an upstream parser or
//! any caller builds these values directly.
//!
//! # Overview
//!
//! - [`Ontology`] - An optional ontology IRI and the list of [`Axiom`]s.
//! - [`Iri`] - A cheaply clonable IRI string.
//! - [`entity`] - Named entities and the [`Entity`] union.
//! - [`expression`] - Class expressions, data ranges, property expressions and individuals.
//! - [`annotation`] - Annotation subjects and values.
//! - [`rule`] - Rules with their atoms and arguments.
//! - [`axiom`] - The closed set of axiom kinds.
//!
//! Every type implements [`serde::Serialize`] and [`serde::Deserialize`] so a
//! model can be exchanged as JSON between processes.
//!
//! # Example
//!
//! ```
//! use owlgraph_core::owl::{Axiom, Class, ClassExpression, Ontology};
//!
//! let foo = Class::new("http://example.org/zoo#Foo");
//! let bar = Class::new("http://example.org/zoo#Bar");
//!
//! let ontology = Ontology::new(vec![Axiom::SubClassOf {
//!     sub: ClassExpression::Class(foo),
//!     sup: ClassExpression::Class(bar),
//! }]);
//! assert_eq!(ontology.axioms().len(), 1);
//! ```

pub mod annotation;
pub mod axiom;
pub mod entity;
pub mod expression;
pub mod rule;

mod literal;

pub use annotation::{AnnotationSubject, AnnotationValue};
pub use axiom::Axiom;
pub use entity::{
    AnnotationProperty, Class, DataProperty, Datatype, Entity, EntityKind, NamedIndividual,
    ObjectProperty,
};
pub use expression::{
    AnonymousIndividual, ClassExpression, DataRange, FacetRestriction, Individual,
    ObjectPropertyExpression, SubObjectPropertyExpression,
};
pub use literal::Literal;
pub use rule::{Atom, DArgument, IArgument, Rule, Variable};

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// IRI of the `rdfs:label` annotation property.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// An Internationalized Resource Identifier.
///
/// Cloning an `Iri` only bumps a reference count, so IRIs can be copied freely
/// into graph identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Creates an IRI from its string form.
    pub fn new(iri: &str) -> Self {
        Self(Arc::from(iri))
    }

    /// Returns the IRI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the local fragment of the IRI.
    ///
    /// The fragment is the part after the last `#`, or after the last `/` when
    /// there is no `#`. An IRI without either separator, or one that ends with
    /// a separator, is returned whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use owlgraph_core::owl::Iri;
    ///
    /// assert_eq!(Iri::new("http://example.org/zoo#Lion").fragment(), "Lion");
    /// assert_eq!(Iri::new("http://example.org/zoo/Tiger").fragment(), "Tiger");
    /// assert_eq!(Iri::new("urn:x").fragment(), "urn:x");
    /// ```
    pub fn fragment(&self) -> &str {
        let iri = self.as_str();
        let split_at = iri.rfind('#').or_else(|| iri.rfind('/'));
        match split_at {
            Some(idx) if idx + 1 < iri.len() => &iri[idx + 1..],
            _ => iri,
        }
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// An ontology: an optional IRI plus its axioms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ontology {
    #[serde(default)]
    iri: Option<Iri>,
    #[serde(default)]
    axioms: Vec<Axiom>,
}

impl Ontology {
    /// Creates an anonymous ontology holding the given axioms.
    pub fn new(axioms: Vec<Axiom>) -> Self {
        Self { iri: None, axioms }
    }

    /// Sets the ontology IRI.
    pub fn with_iri(mut self, iri: Iri) -> Self {
        self.iri = Some(iri);
        self
    }

    /// Returns the ontology IRI, if any.
    pub fn iri(&self) -> Option<&Iri> {
        self.iri.as_ref()
    }

    /// Returns the axioms in declaration order.
    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    /// Appends an axiom.
    pub fn add_axiom(&mut self, axiom: Axiom) {
        self.axioms.push(axiom);
    }
}

impl FromIterator<Axiom> for Ontology {
    fn from_iter<T: IntoIterator<Item = Axiom>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment() {
        assert_eq!(Iri::new("http://a.org/b#C").fragment(), "C");
        assert_eq!(Iri::new("http://a.org/b/C").fragment(), "C");
        assert_eq!(Iri::new("http://a.org/b/").fragment(), "http://a.org/b/");
        assert_eq!(Iri::new("plain").fragment(), "plain");
    }

    #[test]
    fn test_iri_equality() {
        let a = Iri::new("http://a.org/x");
        let b = Iri::from("http://a.org/x");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "http://a.org/x");
    }

    #[test]
    fn test_ontology_json_round_trip() {
        let ontology: Ontology = vec![Axiom::Declaration(Entity::Class(Class::new(
            "http://a.org/x#A",
        )))]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&ontology).unwrap();
        let back: Ontology = serde_json::from_str(&json).unwrap();
        assert_eq!(ontology, back);
    }

    #[test]
    fn test_ontology_json_shape() {
        let json = r#"{
            "iri": "http://a.org/x",
            "axioms": [
                {"SubClassOf": {"sub": {"Class": "http://a.org/x#A"}, "sup": {"Class": "http://a.org/x#B"}}}
            ]
        }"#;
        let ontology: Ontology = serde_json::from_str(json).unwrap();
        assert_eq!(ontology.iri(), Some(&Iri::new("http://a.org/x")));
        assert_eq!(ontology.axioms().len(), 1);
    }
}
