//! Diagram edges.

use std::fmt;

use crate::identifier::Id;

/// Arrow style of an edge. The style carries logical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeType {
    /// Structural link from a construct to its operand.
    DefaultArrow,
    /// Subsumption.
    HollowArrow,
    /// Equivalence.
    DoubleEndedHollowArrow,
    /// Auxiliary or characteristic link.
    DashedArrow,
    /// Assertion helper link.
    NoArrow,
}

/// Semantic role of a decorated edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeLabel {
    Class,
    ObjectProperty,
    DataProperty,
    DataRange,
    Individual,
    Literal,
    Domain,
    Range,
}

impl EdgeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::ObjectProperty => "object-property",
            Self::DataProperty => "data-property",
            Self::DataRange => "data-range",
            Self::Individual => "individual",
            Self::Literal => "literal",
            Self::Domain => "domain",
            Self::Range => "range",
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed diagram edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Plain {
        edge_type: EdgeType,
        from: Id,
        to: Id,
    },
    Decorated {
        edge_type: EdgeType,
        from: Id,
        to: Id,
        label: EdgeLabel,
    },
}

impl Edge {
    pub fn plain(edge_type: EdgeType, from: Id, to: Id) -> Self {
        Self::Plain {
            edge_type,
            from,
            to,
        }
    }

    pub fn decorated(edge_type: EdgeType, from: Id, to: Id, label: EdgeLabel) -> Self {
        Self::Decorated {
            edge_type,
            from,
            to,
            label,
        }
    }

    pub fn edge_type(&self) -> EdgeType {
        match self {
            Self::Plain { edge_type, .. } | Self::Decorated { edge_type, .. } => *edge_type,
        }
    }

    pub fn source(&self) -> &Id {
        match self {
            Self::Plain { from, .. } | Self::Decorated { from, .. } => from,
        }
    }

    pub fn target(&self) -> &Id {
        match self {
            Self::Plain { to, .. } | Self::Decorated { to, .. } => to,
        }
    }

    /// Returns the decoration label, if the edge is decorated.
    pub fn label(&self) -> Option<EdgeLabel> {
        match self {
            Self::Plain { .. } => None,
            Self::Decorated { label, .. } => Some(*label),
        }
    }

    /// Returns a copy of this edge with its source replaced.
    pub fn with_source(&self, id: Id) -> Self {
        let mut edge = self.clone();
        match &mut edge {
            Self::Plain { from, .. } | Self::Decorated { from, .. } => *from = id,
        }
        edge
    }

    /// Returns a copy of this edge with its target replaced.
    pub fn with_target(&self, id: Id) -> Self {
        let mut edge = self.clone();
        match &mut edge {
            Self::Plain { to, .. } | Self::Decorated { to, .. } => *to = id,
        }
        edge
    }

    /// Returns `true` if either endpoint is `id`.
    pub fn touches(&self, id: &Id) -> bool {
        self.source() == id || self.target() == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let edge = Edge::decorated(
            EdgeType::DefaultArrow,
            Id::new("a"),
            Id::new("b"),
            EdgeLabel::Domain,
        );
        assert_eq!(edge.edge_type(), EdgeType::DefaultArrow);
        assert_eq!(edge.source(), &Id::new("a"));
        assert_eq!(edge.target(), &Id::new("b"));
        assert_eq!(edge.label(), Some(EdgeLabel::Domain));
        assert!(edge.touches(&Id::new("a")));
        assert!(!edge.touches(&Id::new("c")));
    }

    #[test]
    fn test_endpoint_rewriting() {
        let edge = Edge::plain(EdgeType::HollowArrow, Id::new("a"), Id::new("b"));

        let retargeted = edge.with_target(Id::new("c"));
        assert_eq!(retargeted.source(), &Id::new("a"));
        assert_eq!(retargeted.target(), &Id::new("c"));
        assert_eq!(retargeted.edge_type(), EdgeType::HollowArrow);

        let resourced = edge.with_source(Id::new("z"));
        assert_eq!(resourced.source(), &Id::new("z"));
        assert_eq!(resourced.target(), &Id::new("b"));

        // The original is untouched.
        assert_eq!(edge.target(), &Id::new("b"));
    }

    #[test]
    fn test_plain_and_decorated_differ() {
        let plain = Edge::plain(EdgeType::DefaultArrow, Id::new("a"), Id::new("b"));
        let decorated = Edge::decorated(
            EdgeType::DefaultArrow,
            Id::new("a"),
            Id::new("b"),
            EdgeLabel::Class,
        );
        assert_ne!(plain, decorated);
        assert_eq!(plain.label(), None);
    }
}
