//! SWRL rules.

use serde::{Deserialize, Serialize};

use super::{
    ClassExpression, DataProperty, DataRange, Individual, Iri, Literal, ObjectPropertyExpression,
};

/// A rule variable, named by an IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(Iri);

impl Variable {
    pub fn new(iri: &str) -> Self {
        Self(Iri::new(iri))
    }

    pub fn iri(&self) -> &Iri {
        &self.0
    }
}

/// An argument standing for an individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IArgument {
    Variable(Variable),
    Individual(Individual),
}

/// An argument standing for a data value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DArgument {
    Variable(Variable),
    Literal(Literal),
}

/// One atom of a rule body or head.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Atom {
    Class {
        predicate: ClassExpression,
        argument: IArgument,
    },
    DataRange {
        predicate: DataRange,
        argument: DArgument,
    },
    ObjectProperty {
        predicate: ObjectPropertyExpression,
        subject: IArgument,
        object: IArgument,
    },
    DataProperty {
        predicate: DataProperty,
        subject: IArgument,
        object: DArgument,
    },
    BuiltIn {
        predicate: Iri,
        arguments: Vec<DArgument>,
    },
    SameIndividual(IArgument, IArgument),
    DifferentIndividuals(IArgument, IArgument),
}

/// A rule `body → head`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub body: Vec<Atom>,
    pub head: Vec<Atom>,
}

impl Rule {
    pub fn new(body: Vec<Atom>, head: Vec<Atom>) -> Self {
        Self { body, head }
    }
}
