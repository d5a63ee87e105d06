//! Data ranges.

use owlgraph_core::{
    graph::{EdgeLabel, EdgeType, Graph, Node},
    owl::{DataRange, FacetRestriction},
};

use super::{Mapper, attach, connective};

impl Mapper<'_> {
    /// Maps a data range.
    ///
    /// A datatype restriction becomes a literal node holding the facet text,
    /// linked to the restricted datatype.
    pub fn map_data_range(&mut self, range: &DataRange) -> Graph {
        match range {
            DataRange::Datatype(datatype) => self.map_datatype(datatype),
            DataRange::DataIntersectionOf(operands) => {
                let head = Node::Intersection {
                    id: self.synthetic_id(),
                };
                let operands = self.map_data_ranges(operands);
                connective(head, operands, None)
            }
            DataRange::DataUnionOf(operands) => {
                let head = Node::Union {
                    id: self.synthetic_id(),
                };
                let operands = self.map_data_ranges(operands);
                connective(head, operands, None)
            }
            DataRange::DataComplementOf(operand) => {
                let head = Node::Complement {
                    id: self.synthetic_id(),
                };
                let operand = self.map_data_range(operand);
                connective(head, vec![operand], None)
            }
            DataRange::DataOneOf(literals) => {
                let head = Node::ClosedClass {
                    id: self.synthetic_id(),
                };
                let literals = literals
                    .iter()
                    .map(|literal| self.map_literal(literal))
                    .collect();
                connective(head, literals, None)
            }
            DataRange::DatatypeRestriction {
                datatype,
                restrictions,
            } => {
                let value = restrictions
                    .iter()
                    .map(facet_text)
                    .collect::<Vec<_>>()
                    .join(", ");
                let head = Graph::new(Node::Literal {
                    id: self.synthetic_id(),
                    value,
                });
                let datatype = self.map_datatype(datatype);
                attach(
                    head,
                    datatype,
                    EdgeType::DashedArrow,
                    Some(EdgeLabel::DataRange),
                )
            }
        }
    }

    fn map_data_ranges(&mut self, ranges: &[DataRange]) -> Vec<Graph> {
        ranges.iter().map(|range| self.map_data_range(range)).collect()
    }
}

/// Renders one facet, using the comparison symbol for the four bound facets.
pub(super) fn facet_text(restriction: &FacetRestriction) -> String {
    let facet = restriction.facet.fragment();
    let value = restriction.value.lexical();
    let symbol = match facet {
        "minInclusive" => "≥",
        "maxInclusive" => "≤",
        "minExclusive" => ">",
        "maxExclusive" => "<",
        other => return format!("{other} {value}"),
    };
    format!("{symbol} {value}")
}

#[cfg(test)]
mod tests {
    use owlgraph_core::owl::{Iri, Literal};

    use super::*;

    fn facet(name: &str, value: &str) -> FacetRestriction {
        FacetRestriction {
            facet: Iri::new(&format!("http://www.w3.org/2001/XMLSchema#{name}")),
            value: Literal::new(value),
        }
    }

    #[test]
    fn test_facet_text() {
        assert_eq!(facet_text(&facet("minInclusive", "18")), "≥ 18");
        assert_eq!(facet_text(&facet("maxExclusive", "65")), "< 65");
        assert_eq!(facet_text(&facet("pattern", "[a-z]+")), "pattern [a-z]+");
    }
}
