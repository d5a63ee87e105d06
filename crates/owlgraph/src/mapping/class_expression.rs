//! Class expressions.

use owlgraph_core::{
    graph::{Bound, CardinalityKind, EdgeLabel, EdgeType, Graph, Node, PropertyRole},
    owl::{ClassExpression, DataProperty, DataRange, ObjectPropertyExpression},
};

use super::{Mapper, attach, connective};

impl Mapper<'_> {
    /// Maps a class expression.
    ///
    /// Connectives point at their operands with plain default arrows.
    /// Restrictions point at their property with a dashed arrow and at their
    /// filler with a default arrow, both decorated with the operand role.
    pub fn map_class_expression(&mut self, expression: &ClassExpression) -> Graph {
        match expression {
            ClassExpression::Class(class) => self.map_class(class),
            ClassExpression::ObjectIntersectionOf(operands) => {
                let head = Node::Intersection {
                    id: self.synthetic_id(),
                };
                let operands = self.map_class_expressions(operands);
                connective(head, operands, None)
            }
            ClassExpression::ObjectUnionOf(operands) => {
                let head = Node::Union {
                    id: self.synthetic_id(),
                };
                let operands = self.map_class_expressions(operands);
                connective(head, operands, None)
            }
            ClassExpression::ObjectComplementOf(operand) => {
                let head = Node::Complement {
                    id: self.synthetic_id(),
                };
                let operand = self.map_class_expression(operand);
                connective(head, vec![operand], None)
            }
            ClassExpression::ObjectOneOf(individuals) => {
                let head = Node::ClosedClass {
                    id: self.synthetic_id(),
                };
                let individuals = individuals
                    .iter()
                    .map(|individual| self.map_individual(individual))
                    .collect();
                connective(head, individuals, None)
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                let head = Node::ExistentialRestriction {
                    id: self.synthetic_id(),
                };
                let filler = self.map_class_expression(filler);
                self.object_restriction(head, property, Some((filler, EdgeLabel::Class)))
            }
            ClassExpression::ObjectAllValuesFrom { property, filler } => {
                let head = Node::UniversalRestriction {
                    id: self.synthetic_id(),
                };
                let filler = self.map_class_expression(filler);
                self.object_restriction(head, property, Some((filler, EdgeLabel::Class)))
            }
            ClassExpression::ObjectHasValue { property, value } => {
                let head = Node::ValueRestriction {
                    id: self.synthetic_id(),
                };
                let value = self.map_individual(value);
                self.object_restriction(head, property, Some((value, EdgeLabel::Individual)))
            }
            ClassExpression::ObjectHasSelf(property) => {
                let head = Node::SelfRestriction {
                    id: self.synthetic_id(),
                };
                self.object_restriction(head, property, None)
            }
            ClassExpression::ObjectMinCardinality {
                n,
                property,
                filler,
            } => self.object_cardinality(*n, Bound::Min, property, filler.as_deref()),
            ClassExpression::ObjectMaxCardinality {
                n,
                property,
                filler,
            } => self.object_cardinality(*n, Bound::Max, property, filler.as_deref()),
            ClassExpression::ObjectExactCardinality {
                n,
                property,
                filler,
            } => self.object_cardinality(*n, Bound::Exact, property, filler.as_deref()),
            ClassExpression::DataSomeValuesFrom { property, filler } => {
                let head = Node::ExistentialRestriction {
                    id: self.synthetic_id(),
                };
                let filler = self.map_data_range(filler);
                self.data_restriction(head, property, Some((filler, EdgeLabel::DataRange)))
            }
            ClassExpression::DataAllValuesFrom { property, filler } => {
                let head = Node::UniversalRestriction {
                    id: self.synthetic_id(),
                };
                let filler = self.map_data_range(filler);
                self.data_restriction(head, property, Some((filler, EdgeLabel::DataRange)))
            }
            ClassExpression::DataHasValue { property, value } => {
                let head = Node::ValueRestriction {
                    id: self.synthetic_id(),
                };
                let value = self.map_literal(value);
                self.data_restriction(head, property, Some((value, EdgeLabel::Literal)))
            }
            ClassExpression::DataMinCardinality {
                n,
                property,
                filler,
            } => self.data_cardinality(*n, Bound::Min, property, filler.as_ref()),
            ClassExpression::DataMaxCardinality {
                n,
                property,
                filler,
            } => self.data_cardinality(*n, Bound::Max, property, filler.as_ref()),
            ClassExpression::DataExactCardinality {
                n,
                property,
                filler,
            } => self.data_cardinality(*n, Bound::Exact, property, filler.as_ref()),
        }
    }

    pub(super) fn map_class_expressions(&mut self, expressions: &[ClassExpression]) -> Vec<Graph> {
        expressions
            .iter()
            .map(|expression| self.map_class_expression(expression))
            .collect()
    }

    fn object_cardinality(
        &mut self,
        n: u32,
        bound: Bound,
        property: &ObjectPropertyExpression,
        filler: Option<&ClassExpression>,
    ) -> Graph {
        let head = Node::Cardinality {
            id: self.synthetic_id(),
            n,
            kind: CardinalityKind::new(PropertyRole::Object, bound, filler.is_some()),
        };
        let filler = filler.map(|filler| (self.map_class_expression(filler), EdgeLabel::Class));
        self.object_restriction(head, property, filler)
    }

    fn data_cardinality(
        &mut self,
        n: u32,
        bound: Bound,
        property: &DataProperty,
        filler: Option<&DataRange>,
    ) -> Graph {
        let head = Node::Cardinality {
            id: self.synthetic_id(),
            n,
            kind: CardinalityKind::new(PropertyRole::Data, bound, filler.is_some()),
        };
        let filler = filler.map(|filler| (self.map_data_range(filler), EdgeLabel::DataRange));
        self.data_restriction(head, property, filler)
    }

    fn object_restriction(
        &mut self,
        head: Node,
        property: &ObjectPropertyExpression,
        filler: Option<(Graph, EdgeLabel)>,
    ) -> Graph {
        let property = self.map_object_property_expression(property);
        restriction(head, property, EdgeLabel::ObjectProperty, filler)
    }

    fn data_restriction(
        &mut self,
        head: Node,
        property: &DataProperty,
        filler: Option<(Graph, EdgeLabel)>,
    ) -> Graph {
        let property = self.map_data_property(property);
        restriction(head, property, EdgeLabel::DataProperty, filler)
    }
}

fn restriction(
    head: Node,
    property: Graph,
    property_label: EdgeLabel,
    filler: Option<(Graph, EdgeLabel)>,
) -> Graph {
    let graph = attach(
        Graph::new(head),
        property,
        EdgeType::DashedArrow,
        Some(property_label),
    );
    match filler {
        Some((filler, label)) => attach(graph, filler, EdgeType::DefaultArrow, Some(label)),
        None => graph,
    }
}
