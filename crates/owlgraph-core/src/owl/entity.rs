//! Named OWL entities.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Iri;

macro_rules! named_entity {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Iri);

        impl $name {
            /// Creates the entity from its IRI string.
            pub fn new(iri: &str) -> Self {
                Self(Iri::new(iri))
            }

            /// Returns the IRI naming this entity.
            pub fn iri(&self) -> &Iri {
                &self.0
            }
        }

        impl From<Iri> for $name {
            fn from(iri: Iri) -> Self {
                Self(iri)
            }
        }
    };
}

named_entity!(
    /// A named class (`owl:Class`).
    Class
);
named_entity!(
    /// A named object property (`owl:ObjectProperty`).
    ObjectProperty
);
named_entity!(
    /// A named data property (`owl:DatatypeProperty`).
    DataProperty
);
named_entity!(
    /// A named annotation property (`owl:AnnotationProperty`).
    AnnotationProperty
);
named_entity!(
    /// A named individual (`owl:NamedIndividual`).
    NamedIndividual
);
named_entity!(
    /// A named datatype (`rdfs:Datatype`).
    Datatype
);

/// The kind of a named entity.
///
/// One IRI may name entities of several kinds at once (punning), so the kind
/// is part of what distinguishes entity nodes in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
    Datatype,
}

impl EntityKind {
    /// Returns a short lowercase name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::ObjectProperty => "object_property",
            Self::DataProperty => "data_property",
            Self::AnnotationProperty => "annotation_property",
            Self::NamedIndividual => "individual",
            Self::Datatype => "datatype",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any named entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    Class(Class),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    AnnotationProperty(AnnotationProperty),
    NamedIndividual(NamedIndividual),
    Datatype(Datatype),
}

impl Entity {
    /// Returns the IRI naming this entity.
    pub fn iri(&self) -> &Iri {
        match self {
            Self::Class(e) => e.iri(),
            Self::ObjectProperty(e) => e.iri(),
            Self::DataProperty(e) => e.iri(),
            Self::AnnotationProperty(e) => e.iri(),
            Self::NamedIndividual(e) => e.iri(),
            Self::Datatype(e) => e.iri(),
        }
    }

    /// Returns the kind of this entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Class(_) => EntityKind::Class,
            Self::ObjectProperty(_) => EntityKind::ObjectProperty,
            Self::DataProperty(_) => EntityKind::DataProperty,
            Self::AnnotationProperty(_) => EntityKind::AnnotationProperty,
            Self::NamedIndividual(_) => EntityKind::NamedIndividual,
            Self::Datatype(_) => EntityKind::Datatype,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_and_iri() {
        let entity = Entity::NamedIndividual(NamedIndividual::new("http://a.org#x"));
        assert_eq!(entity.kind(), EntityKind::NamedIndividual);
        assert_eq!(entity.iri().as_str(), "http://a.org#x");
    }

    #[test]
    fn test_same_iri_different_kinds_are_distinct() {
        let class = Entity::Class(Class::new("http://a.org#x"));
        let individual = Entity::NamedIndividual(NamedIndividual::new("http://a.org#x"));
        assert_ne!(class, individual);
        assert_eq!(class.iri(), individual.iri());
    }
}
