//! Object property expressions and property chains.

use owlgraph_core::{
    graph::{EdgeLabel, EdgeType, Graph, Node},
    owl::{ObjectPropertyExpression, SubObjectPropertyExpression},
};

use super::{Mapper, attach, hub};

impl Mapper<'_> {
    /// Maps an object property expression.
    ///
    /// An inverse expression becomes an inverse node pointing at the named
    /// property. The inverse node id derives from the property IRI, so every
    /// mention of the same inverse shares one node.
    pub fn map_object_property_expression(&mut self, property: &ObjectPropertyExpression) -> Graph {
        match property {
            ObjectPropertyExpression::ObjectProperty(named) => self.map_object_property(named),
            ObjectPropertyExpression::InverseObjectProperty(named) => {
                let inverse = Graph::new(Node::Inverse {
                    id: self.identifier.id_for_iri(named.iri()).nested("inverse"),
                });
                let named = self.map_object_property(named);
                attach(
                    inverse,
                    named,
                    EdgeType::DefaultArrow,
                    Some(EdgeLabel::ObjectProperty),
                )
            }
        }
    }

    /// Maps the left-hand side of a sub-property axiom.
    ///
    /// A chain becomes a property chain node carrying the composed names,
    /// with a dashed edge to every member.
    pub fn map_sub_object_property_expression(
        &mut self,
        property: &SubObjectPropertyExpression,
    ) -> Graph {
        match property {
            SubObjectPropertyExpression::Expression(expression) => {
                self.map_object_property_expression(expression)
            }
            SubObjectPropertyExpression::Chain(members) => {
                let value = members
                    .iter()
                    .map(|member| self.object_property_text(member))
                    .collect::<Vec<_>>()
                    .join(" ∘ ");
                let chain = Node::PropertyChain {
                    id: self.synthetic_id(),
                    value,
                };
                let members = members
                    .iter()
                    .map(|member| self.map_object_property_expression(member))
                    .collect();
                hub(chain, members, Some(EdgeLabel::ObjectProperty))
            }
        }
    }

    /// Returns the display text of an object property expression.
    pub(super) fn object_property_text(&self, property: &ObjectPropertyExpression) -> String {
        match property {
            ObjectPropertyExpression::ObjectProperty(named) => self.names.name(named.iri()),
            ObjectPropertyExpression::InverseObjectProperty(named) => {
                format!("{}⁻¹", self.names.name(named.iri()))
            }
        }
    }
}
