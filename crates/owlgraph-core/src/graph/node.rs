//! Diagram nodes.

use std::{collections::BTreeSet, fmt};

use crate::{identifier::Id, owl::Iri};

/// A characteristic an object or data property can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Characteristic {
    Functional,
    InverseFunctional,
    Transitive,
    Symmetric,
    Asymmetric,
    Reflexive,
    Irreflexive,
}

impl Characteristic {
    /// Returns the short marker text shown for this characteristic.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Functional => "F",
            Self::InverseFunctional => "IF",
            Self::Transitive => "T",
            Self::Symmetric => "S",
            Self::Asymmetric => "AS",
            Self::Reflexive => "R",
            Self::Irreflexive => "IR",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Whether a restriction is about an object or a data property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyRole {
    Object,
    Data,
}

/// Which bound a cardinality restriction places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bound {
    Min,
    Max,
    Exact,
}

impl Bound {
    /// Returns the relation symbol printed before the cardinality.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Min => "≥",
            Self::Max => "≤",
            Self::Exact => "=",
        }
    }
}

/// The shape of a cardinality restriction: property role × bound × qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardinalityKind {
    pub role: PropertyRole,
    pub bound: Bound,
    pub qualified: bool,
}

impl CardinalityKind {
    pub fn new(role: PropertyRole, bound: Bound, qualified: bool) -> Self {
        Self {
            role,
            bound,
            qualified,
        }
    }
}

/// A diagram node.
///
/// Named entities carry their display name; value carriers carry text;
/// restrictions and connectives are purely structural and only carry an id.
/// Equality and hashing are structural, so identical occurrences produced by
/// independent mapping calls collapse in an element set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Named entities
    Class { id: Id, name: String },
    ObjectProperty { id: Id, name: String },
    DataProperty { id: Id, name: String },
    AnnotationProperty { id: Id, name: String },
    Individual { id: Id, name: String },
    Datatype { id: Id, name: String },

    // Value carriers
    Literal { id: Id, value: String },
    PropertyChain { id: Id, value: String },
    Rule { id: Id, value: String },

    // Cardinality restrictions
    Cardinality {
        id: Id,
        n: u32,
        kind: CardinalityKind,
    },

    // Structural nodes
    ExistentialRestriction { id: Id },
    UniversalRestriction { id: Id },
    ValueRestriction { id: Id },
    SelfRestriction { id: Id },
    Intersection { id: Id },
    Union { id: Id },
    Complement { id: Id },
    ClosedClass { id: Id },
    Disjointness { id: Id },
    DisjointUnion { id: Id },
    Equality { id: Id },
    Inequality { id: Id },
    Inverse { id: Id },
    Invisible { id: Id },

    // Property characteristics
    PropertyMarker {
        id: Id,
        kinds: BTreeSet<Characteristic>,
    },

    // Unresolved reference to an IRI
    IriReference { id: Id, iri: Iri },
}

impl Node {
    /// Returns the node id.
    pub fn id(&self) -> &Id {
        match self {
            Self::Class { id, .. }
            | Self::ObjectProperty { id, .. }
            | Self::DataProperty { id, .. }
            | Self::AnnotationProperty { id, .. }
            | Self::Individual { id, .. }
            | Self::Datatype { id, .. }
            | Self::Literal { id, .. }
            | Self::PropertyChain { id, .. }
            | Self::Rule { id, .. }
            | Self::Cardinality { id, .. }
            | Self::ExistentialRestriction { id }
            | Self::UniversalRestriction { id }
            | Self::ValueRestriction { id }
            | Self::SelfRestriction { id }
            | Self::Intersection { id }
            | Self::Union { id }
            | Self::Complement { id }
            | Self::ClosedClass { id }
            | Self::Disjointness { id }
            | Self::DisjointUnion { id }
            | Self::Equality { id }
            | Self::Inequality { id }
            | Self::Inverse { id }
            | Self::Invisible { id }
            | Self::PropertyMarker { id, .. }
            | Self::IriReference { id, .. } => id,
        }
    }

    /// Returns `true` for nodes that stand for a named ontology entity.
    pub fn is_named_entity(&self) -> bool {
        matches!(
            self,
            Self::Class { .. }
                | Self::ObjectProperty { .. }
                | Self::DataProperty { .. }
                | Self::AnnotationProperty { .. }
                | Self::Individual { .. }
                | Self::Datatype { .. }
        )
    }

    /// Returns the IRI of the entity this node stands for.
    ///
    /// Only named-entity nodes have one; render-only nodes never do.
    pub fn source_iri(&self) -> Option<&Iri> {
        if !self.is_named_entity() || self.id().is_render_only() {
            return None;
        }
        self.id().iri()
    }

    pub fn is_complement(&self) -> bool {
        matches!(self, Self::Complement { .. })
    }

    pub fn is_invisible(&self) -> bool {
        matches!(self, Self::Invisible { .. })
    }

    pub fn is_property_marker(&self) -> bool {
        matches!(self, Self::PropertyMarker { .. })
    }

    pub fn is_iri_reference(&self) -> bool {
        matches!(self, Self::IriReference { .. })
    }

    /// Returns the characteristic set if this node is a property marker.
    pub fn as_property_marker(&self) -> Option<&BTreeSet<Characteristic>> {
        match self {
            Self::PropertyMarker { kinds, .. } => Some(kinds),
            _ => None,
        }
    }

    /// Returns the referenced IRI if this node is an IRI reference.
    pub fn as_iri_reference(&self) -> Option<&Iri> {
        match self {
            Self::IriReference { iri, .. } => Some(iri),
            _ => None,
        }
    }
}
