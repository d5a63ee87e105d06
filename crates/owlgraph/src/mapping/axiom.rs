//! Axioms.

use std::collections::BTreeSet;

use owlgraph_core::{
    graph::{Characteristic, EdgeLabel, EdgeType, Graph, Node},
    owl::{Axiom, DataProperty, Individual, Literal, ObjectPropertyExpression},
};

use super::{Mapper, attach, attach_from, hub, pairwise_equivalent, unique};

impl Mapper<'_> {
    /// Maps one axiom.
    ///
    /// Imports, ontology annotations and keys have no visual form and map to
    /// the empty graph.
    pub fn map_axiom(&mut self, axiom: &Axiom) -> Graph {
        match axiom {
            Axiom::Declaration(entity) => self.map_entity(entity),
            Axiom::Import(_) | Axiom::OntologyAnnotation { .. } | Axiom::HasKey { .. } => {
                Graph::empty()
            }

            Axiom::SubClassOf { sub, sup } => {
                let sub = self.map_class_expression(sub);
                let sup = self.map_class_expression(sup);
                attach(sub, sup, EdgeType::HollowArrow, None)
            }
            Axiom::EquivalentClasses(operands) => {
                let operands = unique(operands)
                    .into_iter()
                    .map(|operand| self.map_class_expression(operand))
                    .collect();
                pairwise_equivalent(operands)
            }
            Axiom::DisjointClasses(operands) => {
                let head = Node::Disjointness {
                    id: self.synthetic_id(),
                };
                let operands = self.map_class_expressions(operands);
                hub(head, operands, Some(EdgeLabel::Class))
            }
            Axiom::DisjointUnion { class, operands } => {
                let head = Graph::new(Node::DisjointUnion {
                    id: self.synthetic_id(),
                });
                let class = self.map_class(class);
                let graph = attach_from(head, class, EdgeType::DoubleEndedHollowArrow, None);
                self.map_class_expressions(operands)
                    .into_iter()
                    .fold(graph, |graph, operand| {
                        attach(graph, operand, EdgeType::DefaultArrow, None)
                    })
            }

            Axiom::SubObjectPropertyOf { sub, sup } => {
                let sub = self.map_sub_object_property_expression(sub);
                let sup = self.map_object_property_expression(sup);
                attach(sub, sup, EdgeType::HollowArrow, None)
            }
            Axiom::EquivalentObjectProperties(operands) => {
                let operands = unique(operands)
                    .into_iter()
                    .map(|operand| self.map_object_property_expression(operand))
                    .collect();
                pairwise_equivalent(operands)
            }
            Axiom::DisjointObjectProperties(operands) => {
                let head = Node::Disjointness {
                    id: self.synthetic_id(),
                };
                let operands = operands
                    .iter()
                    .map(|operand| self.map_object_property_expression(operand))
                    .collect();
                hub(head, operands, Some(EdgeLabel::ObjectProperty))
            }
            Axiom::InverseObjectProperties(first, second) => {
                let head = Node::Inverse {
                    id: self.synthetic_id(),
                };
                let operands = vec![
                    self.map_object_property_expression(first),
                    self.map_object_property_expression(second),
                ];
                hub(head, operands, Some(EdgeLabel::ObjectProperty))
            }
            Axiom::ObjectPropertyDomain { property, domain } => {
                let property = self.map_object_property_expression(property);
                let domain = self.map_class_expression(domain);
                attach(
                    property,
                    domain,
                    EdgeType::DefaultArrow,
                    Some(EdgeLabel::Domain),
                )
            }
            Axiom::ObjectPropertyRange { property, range } => {
                let property = self.map_object_property_expression(property);
                let range = self.map_class_expression(range);
                attach(
                    property,
                    range,
                    EdgeType::DefaultArrow,
                    Some(EdgeLabel::Range),
                )
            }
            Axiom::FunctionalObjectProperty(property) => {
                self.object_characteristic(property, Characteristic::Functional)
            }
            Axiom::InverseFunctionalObjectProperty(property) => {
                self.object_characteristic(property, Characteristic::InverseFunctional)
            }
            Axiom::ReflexiveObjectProperty(property) => {
                self.object_characteristic(property, Characteristic::Reflexive)
            }
            Axiom::IrreflexiveObjectProperty(property) => {
                self.object_characteristic(property, Characteristic::Irreflexive)
            }
            Axiom::SymmetricObjectProperty(property) => {
                self.object_characteristic(property, Characteristic::Symmetric)
            }
            Axiom::AsymmetricObjectProperty(property) => {
                self.object_characteristic(property, Characteristic::Asymmetric)
            }
            Axiom::TransitiveObjectProperty(property) => {
                self.object_characteristic(property, Characteristic::Transitive)
            }

            Axiom::SubDataPropertyOf { sub, sup } => {
                let sub = self.map_data_property(sub);
                let sup = self.map_data_property(sup);
                attach(sub, sup, EdgeType::HollowArrow, None)
            }
            Axiom::EquivalentDataProperties(operands) => {
                let operands = unique(operands)
                    .into_iter()
                    .map(|operand| self.map_data_property(operand))
                    .collect();
                pairwise_equivalent(operands)
            }
            Axiom::DisjointDataProperties(operands) => {
                let head = Node::Disjointness {
                    id: self.synthetic_id(),
                };
                let operands = operands
                    .iter()
                    .map(|operand| self.map_data_property(operand))
                    .collect();
                hub(head, operands, Some(EdgeLabel::DataProperty))
            }
            Axiom::DataPropertyDomain { property, domain } => {
                let property = self.map_data_property(property);
                let domain = self.map_class_expression(domain);
                attach(
                    property,
                    domain,
                    EdgeType::DefaultArrow,
                    Some(EdgeLabel::Domain),
                )
            }
            Axiom::DataPropertyRange { property, range } => {
                let property = self.map_data_property(property);
                let range = self.map_data_range(range);
                attach(
                    property,
                    range,
                    EdgeType::DefaultArrow,
                    Some(EdgeLabel::Range),
                )
            }
            Axiom::FunctionalDataProperty(property) => {
                let property = self.map_data_property(property);
                self.characteristic(property, Characteristic::Functional)
            }

            Axiom::DatatypeDefinition { datatype, range } => {
                let operands = vec![self.map_datatype(datatype), self.map_data_range(range)];
                pairwise_equivalent(operands)
            }

            Axiom::SameIndividual(individuals) => {
                let head = Node::Equality {
                    id: self.synthetic_id(),
                };
                let individuals = individuals
                    .iter()
                    .map(|individual| self.map_individual(individual))
                    .collect();
                hub(head, individuals, Some(EdgeLabel::Individual))
            }
            Axiom::DifferentIndividuals(individuals) => {
                let head = Node::Inequality {
                    id: self.synthetic_id(),
                };
                let individuals = individuals
                    .iter()
                    .map(|individual| self.map_individual(individual))
                    .collect();
                hub(head, individuals, Some(EdgeLabel::Individual))
            }
            Axiom::ClassAssertion { class, individual } => {
                let individual = self.map_individual(individual);
                let class = self.map_class_expression(class);
                attach(
                    individual,
                    class,
                    EdgeType::DefaultArrow,
                    Some(EdgeLabel::Class),
                )
            }
            Axiom::ObjectPropertyAssertion {
                property,
                subject,
                object,
            } => {
                let helper = Node::Invisible {
                    id: self.synthetic_id(),
                };
                self.object_assertion(helper, property, subject, object)
            }
            Axiom::NegativeObjectPropertyAssertion {
                property,
                subject,
                object,
            } => {
                let helper = Node::Complement {
                    id: self.synthetic_id(),
                };
                self.object_assertion(helper, property, subject, object)
            }
            Axiom::DataPropertyAssertion {
                property,
                subject,
                value,
            } => {
                let helper = Node::Invisible {
                    id: self.synthetic_id(),
                };
                self.data_assertion(helper, property, subject, value)
            }
            Axiom::NegativeDataPropertyAssertion {
                property,
                subject,
                value,
            } => {
                let helper = Node::Complement {
                    id: self.synthetic_id(),
                };
                self.data_assertion(helper, property, subject, value)
            }

            Axiom::AnnotationAssertion {
                property,
                subject,
                value,
            } => {
                let helper = Node::Invisible {
                    id: self.synthetic_id(),
                };
                let subject = self.map_annotation_subject(subject);
                let property = self.map_annotation_property(property);
                let (value, label) = self.map_annotation_value(value);
                assertion(helper, subject, (property, None), (value, label))
            }
            Axiom::SubAnnotationPropertyOf { sub, sup } => {
                let sub = self.map_annotation_property(sub);
                let sup = self.map_annotation_property(sup);
                attach(sub, sup, EdgeType::HollowArrow, None)
            }
            Axiom::AnnotationPropertyDomain { property, domain } => {
                let property = self.map_annotation_property(property);
                let domain = self.map_iri_reference(domain);
                attach(
                    property,
                    domain,
                    EdgeType::DefaultArrow,
                    Some(EdgeLabel::Domain),
                )
            }
            Axiom::AnnotationPropertyRange { property, range } => {
                let property = self.map_annotation_property(property);
                let range = self.map_iri_reference(range);
                attach(
                    property,
                    range,
                    EdgeType::DefaultArrow,
                    Some(EdgeLabel::Range),
                )
            }

            Axiom::Rule(rule) => self.map_rule(rule),
        }
    }

    fn object_characteristic(
        &mut self,
        property: &ObjectPropertyExpression,
        kind: Characteristic,
    ) -> Graph {
        let property = self.map_object_property_expression(property);
        self.characteristic(property, kind)
    }

    /// Hangs a single-characteristic marker off the property with a dashed edge.
    fn characteristic(&mut self, property: Graph, kind: Characteristic) -> Graph {
        let marker = Node::PropertyMarker {
            id: self.synthetic_id(),
            kinds: BTreeSet::from([kind]),
        };
        attach(property, Graph::new(marker), EdgeType::DashedArrow, None)
    }

    fn object_assertion(
        &mut self,
        helper: Node,
        property: &ObjectPropertyExpression,
        subject: &Individual,
        object: &Individual,
    ) -> Graph {
        let subject = self.map_individual(subject);
        let property = self.map_object_property_expression(property);
        let object = self.map_individual(object);
        assertion(
            helper,
            subject,
            (property, Some(EdgeLabel::ObjectProperty)),
            (object, Some(EdgeLabel::Individual)),
        )
    }

    fn data_assertion(
        &mut self,
        helper: Node,
        property: &DataProperty,
        subject: &Individual,
        value: &Literal,
    ) -> Graph {
        let subject = self.map_individual(subject);
        let property = self.map_data_property(property);
        let value = self.map_literal(value);
        assertion(
            helper,
            subject,
            (property, Some(EdgeLabel::DataProperty)),
            (value, Some(EdgeLabel::Literal)),
        )
    }
}

/// Builds the three-edge assertion shape around a helper node.
///
/// The subject links to the helper without an arrowhead, the helper points
/// at the object, and a dashed arrow names the property.
fn assertion(
    helper: Node,
    subject: Graph,
    (property, property_label): (Graph, Option<EdgeLabel>),
    (object, object_label): (Graph, Option<EdgeLabel>),
) -> Graph {
    let graph = attach_from(Graph::new(helper), subject, EdgeType::NoArrow, None);
    let graph = attach(graph, object, EdgeType::DefaultArrow, object_label);
    attach(graph, property, EdgeType::DashedArrow, property_label)
}
