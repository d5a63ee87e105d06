//! The closed set of axiom kinds.

use serde::{Deserialize, Serialize};

use super::{
    AnnotationProperty, AnnotationSubject, AnnotationValue, Class, ClassExpression, DataProperty,
    DataRange, Datatype, Entity, Individual, Iri, Literal, ObjectPropertyExpression, Rule,
    SubObjectPropertyExpression,
};

/// One logical statement of an ontology.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axiom {
    // Declarations and ontology-level statements
    Declaration(Entity),
    Import(Iri),
    OntologyAnnotation {
        property: AnnotationProperty,
        value: AnnotationValue,
    },

    // Class axioms
    SubClassOf {
        sub: ClassExpression,
        sup: ClassExpression,
    },
    EquivalentClasses(Vec<ClassExpression>),
    DisjointClasses(Vec<ClassExpression>),
    DisjointUnion {
        class: Class,
        operands: Vec<ClassExpression>,
    },

    // Object property axioms
    SubObjectPropertyOf {
        sub: SubObjectPropertyExpression,
        sup: ObjectPropertyExpression,
    },
    EquivalentObjectProperties(Vec<ObjectPropertyExpression>),
    DisjointObjectProperties(Vec<ObjectPropertyExpression>),
    InverseObjectProperties(ObjectPropertyExpression, ObjectPropertyExpression),
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },
    FunctionalObjectProperty(ObjectPropertyExpression),
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    ReflexiveObjectProperty(ObjectPropertyExpression),
    IrreflexiveObjectProperty(ObjectPropertyExpression),
    SymmetricObjectProperty(ObjectPropertyExpression),
    AsymmetricObjectProperty(ObjectPropertyExpression),
    TransitiveObjectProperty(ObjectPropertyExpression),

    // Data property axioms
    SubDataPropertyOf {
        sub: DataProperty,
        sup: DataProperty,
    },
    EquivalentDataProperties(Vec<DataProperty>),
    DisjointDataProperties(Vec<DataProperty>),
    DataPropertyDomain {
        property: DataProperty,
        domain: ClassExpression,
    },
    DataPropertyRange {
        property: DataProperty,
        range: DataRange,
    },
    FunctionalDataProperty(DataProperty),

    // Datatype and key axioms
    DatatypeDefinition {
        datatype: Datatype,
        range: DataRange,
    },
    HasKey {
        class: ClassExpression,
        object_properties: Vec<ObjectPropertyExpression>,
        data_properties: Vec<DataProperty>,
    },

    // Assertions
    SameIndividual(Vec<Individual>),
    DifferentIndividuals(Vec<Individual>),
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },
    ObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Individual,
        object: Individual,
    },
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Individual,
        object: Individual,
    },
    DataPropertyAssertion {
        property: DataProperty,
        subject: Individual,
        value: Literal,
    },
    NegativeDataPropertyAssertion {
        property: DataProperty,
        subject: Individual,
        value: Literal,
    },

    // Annotation axioms
    AnnotationAssertion {
        property: AnnotationProperty,
        subject: AnnotationSubject,
        value: AnnotationValue,
    },
    SubAnnotationPropertyOf {
        sub: AnnotationProperty,
        sup: AnnotationProperty,
    },
    AnnotationPropertyDomain {
        property: AnnotationProperty,
        domain: Iri,
    },
    AnnotationPropertyRange {
        property: AnnotationProperty,
        range: Iri,
    },

    // Rules
    Rule(Rule),
}
