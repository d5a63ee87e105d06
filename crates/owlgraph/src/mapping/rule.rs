//! Rules and their atoms.
//!
//! A rule becomes one rule node holding the printed rule. Each atom hangs off
//! it as a literal listing the atom arguments, with a dashed arrow to the
//! predicate; body atoms are linked without an arrowhead and head atoms with
//! a default arrow. Argument literals are render-only so they never collapse
//! with an ontology entity of the same IRI.

use owlgraph_core::{
    graph::{EdgeType, Graph, Node},
    owl::{Atom, ClassExpression, DArgument, DataRange, IArgument, Individual, Rule},
};

use super::{Mapper, attach, data_range::facet_text};

impl Mapper<'_> {
    pub fn map_rule(&mut self, rule: &Rule) -> Graph {
        let value = format!(
            "{} → {}",
            self.atoms_text(&rule.body),
            self.atoms_text(&rule.head)
        );
        let graph = Graph::new(Node::Rule {
            id: self.synthetic_id(),
            value,
        });

        let graph = rule.body.iter().fold(graph, |graph, atom| {
            let atom = self.map_atom(atom);
            attach(graph, atom, EdgeType::NoArrow, None)
        });
        rule.head.iter().fold(graph, |graph, atom| {
            let atom = self.map_atom(atom);
            attach(graph, atom, EdgeType::DefaultArrow, None)
        })
    }

    /// Maps an atom to its argument literal pointing at the predicate.
    pub fn map_atom(&mut self, atom: &Atom) -> Graph {
        let arguments = Graph::new(Node::Literal {
            id: self.identifier.render_only_id(),
            value: self.arguments_text(atom).join(", "),
        });
        let predicate = match atom {
            Atom::Class { predicate, .. } => self.map_class_expression(predicate),
            Atom::DataRange { predicate, .. } => self.map_data_range(predicate),
            Atom::ObjectProperty { predicate, .. } => {
                self.map_object_property_expression(predicate)
            }
            Atom::DataProperty { predicate, .. } => self.map_data_property(predicate),
            Atom::BuiltIn { predicate, .. } => self.map_iri_reference(predicate),
            Atom::SameIndividual(..) => Graph::new(Node::Equality {
                id: self.synthetic_id(),
            }),
            Atom::DifferentIndividuals(..) => Graph::new(Node::Inequality {
                id: self.synthetic_id(),
            }),
        };
        attach(arguments, predicate, EdgeType::DashedArrow, None)
    }

    fn atoms_text(&self, atoms: &[Atom]) -> String {
        atoms
            .iter()
            .map(|atom| {
                format!(
                    "{}({})",
                    self.predicate_text(atom),
                    self.arguments_text(atom).join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join(" ∧ ")
    }

    fn predicate_text(&self, atom: &Atom) -> String {
        match atom {
            Atom::Class { predicate, .. } => self.class_expression_text(predicate),
            Atom::DataRange { predicate, .. } => self.data_range_text(predicate),
            Atom::ObjectProperty { predicate, .. } => self.object_property_text(predicate),
            Atom::DataProperty { predicate, .. } => self.names.name(predicate.iri()),
            Atom::BuiltIn { predicate, .. } => predicate.fragment().to_string(),
            Atom::SameIndividual(..) => "sameAs".to_string(),
            Atom::DifferentIndividuals(..) => "differentFrom".to_string(),
        }
    }

    fn arguments_text(&self, atom: &Atom) -> Vec<String> {
        match atom {
            Atom::Class { argument, .. } => vec![self.i_argument_text(argument)],
            Atom::DataRange { argument, .. } => vec![self.d_argument_text(argument)],
            Atom::ObjectProperty {
                subject, object, ..
            }
            | Atom::SameIndividual(subject, object)
            | Atom::DifferentIndividuals(subject, object) => {
                vec![self.i_argument_text(subject), self.i_argument_text(object)]
            }
            Atom::DataProperty {
                subject, object, ..
            } => vec![self.i_argument_text(subject), self.d_argument_text(object)],
            Atom::BuiltIn { arguments, .. } => arguments
                .iter()
                .map(|argument| self.d_argument_text(argument))
                .collect(),
        }
    }

    fn i_argument_text(&self, argument: &IArgument) -> String {
        match argument {
            IArgument::Variable(variable) => format!("?{}", variable.iri().fragment()),
            IArgument::Individual(individual) => self.individual_text(individual),
        }
    }

    fn d_argument_text(&self, argument: &DArgument) -> String {
        match argument {
            DArgument::Variable(variable) => format!("?{}", variable.iri().fragment()),
            DArgument::Literal(literal) => literal.to_string(),
        }
    }

    fn individual_text(&self, individual: &Individual) -> String {
        match individual {
            Individual::Named(named) => self.names.name(named.iri()),
            Individual::Anonymous(anonymous) => anonymous.node_id().to_string(),
        }
    }

    /// Prints a class expression in description logic notation.
    fn class_expression_text(&self, expression: &ClassExpression) -> String {
        let joined = |operands: &[ClassExpression], symbol: &str| {
            let parts: Vec<_> = operands
                .iter()
                .map(|operand| self.class_expression_text(operand))
                .collect();
            format!("({})", parts.join(symbol))
        };
        let filler_text = |filler: Option<&ClassExpression>| {
            filler
                .map(|filler| format!(".{}", self.class_expression_text(filler)))
                .unwrap_or_default()
        };
        match expression {
            ClassExpression::Class(class) => self.names.name(class.iri()),
            ClassExpression::ObjectIntersectionOf(operands) => joined(operands, " ⊓ "),
            ClassExpression::ObjectUnionOf(operands) => joined(operands, " ⊔ "),
            ClassExpression::ObjectComplementOf(operand) => {
                format!("¬{}", self.class_expression_text(operand))
            }
            ClassExpression::ObjectOneOf(individuals) => {
                let parts: Vec<_> = individuals
                    .iter()
                    .map(|individual| self.individual_text(individual))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => format!(
                "∃{}.{}",
                self.object_property_text(property),
                self.class_expression_text(filler)
            ),
            ClassExpression::ObjectAllValuesFrom { property, filler } => format!(
                "∀{}.{}",
                self.object_property_text(property),
                self.class_expression_text(filler)
            ),
            ClassExpression::ObjectHasValue { property, value } => format!(
                "∃{}.{{{}}}",
                self.object_property_text(property),
                self.individual_text(value)
            ),
            ClassExpression::ObjectHasSelf(property) => {
                format!("∃{}.self", self.object_property_text(property))
            }
            ClassExpression::ObjectMinCardinality {
                n,
                property,
                filler,
            } => format!(
                "≥{n} {}{}",
                self.object_property_text(property),
                filler_text(filler.as_deref())
            ),
            ClassExpression::ObjectMaxCardinality {
                n,
                property,
                filler,
            } => format!(
                "≤{n} {}{}",
                self.object_property_text(property),
                filler_text(filler.as_deref())
            ),
            ClassExpression::ObjectExactCardinality {
                n,
                property,
                filler,
            } => format!(
                "={n} {}{}",
                self.object_property_text(property),
                filler_text(filler.as_deref())
            ),
            ClassExpression::DataSomeValuesFrom { property, filler } => format!(
                "∃{}.{}",
                self.names.name(property.iri()),
                self.data_range_text(filler)
            ),
            ClassExpression::DataAllValuesFrom { property, filler } => format!(
                "∀{}.{}",
                self.names.name(property.iri()),
                self.data_range_text(filler)
            ),
            ClassExpression::DataHasValue { property, value } => {
                format!("∃{}.{{{value}}}", self.names.name(property.iri()))
            }
            ClassExpression::DataMinCardinality {
                n,
                property,
                filler,
            }
            | ClassExpression::DataMaxCardinality {
                n,
                property,
                filler,
            }
            | ClassExpression::DataExactCardinality {
                n,
                property,
                filler,
            } => {
                let symbol = match expression {
                    ClassExpression::DataMinCardinality { .. } => "≥",
                    ClassExpression::DataMaxCardinality { .. } => "≤",
                    _ => "=",
                };
                let filler = filler
                    .as_ref()
                    .map(|filler| format!(".{}", self.data_range_text(filler)))
                    .unwrap_or_default();
                format!("{symbol}{n} {}{filler}", self.names.name(property.iri()))
            }
        }
    }

    fn data_range_text(&self, range: &DataRange) -> String {
        let joined = |operands: &[DataRange], symbol: &str| {
            let parts: Vec<_> = operands
                .iter()
                .map(|operand| self.data_range_text(operand))
                .collect();
            format!("({})", parts.join(symbol))
        };
        match range {
            DataRange::Datatype(datatype) => self.names.name(datatype.iri()),
            DataRange::DataIntersectionOf(operands) => joined(operands, " ⊓ "),
            DataRange::DataUnionOf(operands) => joined(operands, " ⊔ "),
            DataRange::DataComplementOf(operand) => format!("¬{}", self.data_range_text(operand)),
            DataRange::DataOneOf(literals) => {
                let parts: Vec<_> = literals.iter().map(ToString::to_string).collect();
                format!("{{{}}}", parts.join(", "))
            }
            DataRange::DatatypeRestriction {
                datatype,
                restrictions,
            } => {
                let facets: Vec<_> = restrictions.iter().map(facet_text).collect();
                format!("{}[{}]", self.names.name(datatype.iri()), facets.join(", "))
            }
        }
    }
}
