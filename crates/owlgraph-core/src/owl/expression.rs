//! Class expressions, data ranges, property expressions and individuals.

use serde::{Deserialize, Serialize};

use super::{Class, DataProperty, Datatype, Iri, Literal, NamedIndividual, ObjectProperty};

/// A blank-node individual, identified by its node id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnonymousIndividual(String);

impl AnonymousIndividual {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self(node_id.into())
    }

    /// Returns the blank node id.
    pub fn node_id(&self) -> &str {
        &self.0
    }
}

/// A named or anonymous individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Individual {
    Named(NamedIndividual),
    Anonymous(AnonymousIndividual),
}

/// An object property or the inverse of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectPropertyExpression {
    ObjectProperty(ObjectProperty),
    InverseObjectProperty(ObjectProperty),
}

impl ObjectPropertyExpression {
    /// Returns the named property underneath the expression.
    pub fn named(&self) -> &ObjectProperty {
        match self {
            Self::ObjectProperty(p) | Self::InverseObjectProperty(p) => p,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(property: ObjectProperty) -> Self {
        Self::ObjectProperty(property)
    }
}

/// The left-hand side of a sub-object-property axiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubObjectPropertyExpression {
    Expression(ObjectPropertyExpression),
    Chain(Vec<ObjectPropertyExpression>),
}

/// A (possibly composite) description of a set of individuals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassExpression {
    Class(Class),
    ObjectIntersectionOf(Vec<ClassExpression>),
    ObjectUnionOf(Vec<ClassExpression>),
    ObjectComplementOf(Box<ClassExpression>),
    ObjectOneOf(Vec<Individual>),
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectHasValue {
        property: ObjectPropertyExpression,
        value: Individual,
    },
    ObjectHasSelf(ObjectPropertyExpression),
    ObjectMinCardinality {
        n: u32,
        property: ObjectPropertyExpression,
        #[serde(default)]
        filler: Option<Box<ClassExpression>>,
    },
    ObjectMaxCardinality {
        n: u32,
        property: ObjectPropertyExpression,
        #[serde(default)]
        filler: Option<Box<ClassExpression>>,
    },
    ObjectExactCardinality {
        n: u32,
        property: ObjectPropertyExpression,
        #[serde(default)]
        filler: Option<Box<ClassExpression>>,
    },
    DataSomeValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },
    DataAllValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },
    DataHasValue {
        property: DataProperty,
        value: Literal,
    },
    DataMinCardinality {
        n: u32,
        property: DataProperty,
        #[serde(default)]
        filler: Option<DataRange>,
    },
    DataMaxCardinality {
        n: u32,
        property: DataProperty,
        #[serde(default)]
        filler: Option<DataRange>,
    },
    DataExactCardinality {
        n: u32,
        property: DataProperty,
        #[serde(default)]
        filler: Option<DataRange>,
    },
}

impl From<Class> for ClassExpression {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

/// One facet constraint of a datatype restriction, e.g. `xsd:minInclusive 5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetRestriction {
    pub facet: Iri,
    pub value: Literal,
}

/// A set of data values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataRange {
    Datatype(Datatype),
    DataIntersectionOf(Vec<DataRange>),
    DataUnionOf(Vec<DataRange>),
    DataComplementOf(Box<DataRange>),
    DataOneOf(Vec<Literal>),
    DatatypeRestriction {
        datatype: Datatype,
        restrictions: Vec<FacetRestriction>,
    },
}

impl From<Datatype> for DataRange {
    fn from(datatype: Datatype) -> Self {
        Self::Datatype(datatype)
    }
}
