//! Node identifiers and their allocation.
//!
//! This module provides the [`Id`] type used to key diagram nodes and the
//! [`Identifier`] allocator that hands out stable ids for named entities and
//! fresh ids for anonymous constructs.
//!
//! An [`Identifier`] is a plain value threaded through a mapping run. There is
//! no global state: independent runs each use their own allocator, and tests
//! pre-register the synthetic ids they expect so output is reproducible.

use std::{
    cmp::Ordering,
    collections::VecDeque,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use log::trace;

use crate::owl::Iri;

/// Reserved IRI marking nodes that only exist to render something, such as
/// the argument text of a rule atom. Nodes carrying it are never treated as
/// ontology entities.
pub const RENDER_ONLY_IRI: &str = "urn:owlgraph:render-only";

/// Identifier of a diagram node.
///
/// An `Id` is a string key plus an optional provenance IRI recording which
/// ontology IRI the node stands for. Equality, ordering and hashing only look
/// at the key, so two independently created ids for the same logical entity
/// collapse when inserted into a set.
///
/// # Examples
///
/// ```
/// use owlgraph_core::{identifier::Id, owl::Iri};
///
/// let iri = Iri::new("http://example.org#Foo");
/// let a = Id::with_iri("http://example.org#Foo", iri.clone());
/// let b = Id::new("http://example.org#Foo");
///
/// assert_eq!(a, b);
/// assert_eq!(a.iri(), Some(&iri));
/// assert_eq!(b.iri(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Id {
    key: Arc<str>,
    iri: Option<Iri>,
}

impl Id {
    /// Creates an `Id` without provenance.
    pub fn new(key: &str) -> Self {
        Self {
            key: Arc::from(key),
            iri: None,
        }
    }

    /// Creates an `Id` that remembers the IRI it was derived from.
    pub fn with_iri(key: &str, iri: Iri) -> Self {
        Self {
            key: Arc::from(key),
            iri: Some(iri),
        }
    }

    /// Returns the key that identifies this id.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the provenance IRI, if any.
    pub fn iri(&self) -> Option<&Iri> {
        self.iri.as_ref()
    }

    /// Creates a nested id by appending `child` to the key with a `::` separator.
    ///
    /// The provenance IRI is kept, so nested ids still tell which IRI they
    /// stand for.
    ///
    /// # Examples
    ///
    /// ```
    /// use owlgraph_core::identifier::Id;
    ///
    /// let nested = Id::new("http://example.org#Foo").nested("class");
    /// assert_eq!(nested, "http://example.org#Foo::class");
    /// ```
    pub fn nested(&self, child: &str) -> Self {
        Self {
            key: Arc::from(format!("{}::{child}", self.key)),
            iri: self.iri.clone(),
        }
    }

    /// Returns `true` if this id marks a render-only node.
    pub fn is_render_only(&self) -> bool {
        self.iri
            .as_ref()
            .is_some_and(|iri| iri.as_str() == RENDER_ONLY_IRI)
    }
}

impl PartialEq for Id {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Id {}

impl Hash for Id {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Id {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Id {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl From<&str> for Id {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "key"`
    fn eq(&self, other: &str) -> bool {
        &*self.key == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Allocator for node identifiers.
///
/// Named entities get stable ids derived from their IRI. Anonymous constructs
/// get fresh synthetic ids: first from the pre-registered supply, in order,
/// then from a random source once the supply is exhausted.
///
/// # Examples
///
/// ```
/// use owlgraph_core::{identifier::Identifier, owl::Iri};
///
/// let mut identifier = Identifier::with_ids(["n1", "n2"]);
/// assert_eq!(identifier.synthetic_id(), "n1");
/// assert_eq!(identifier.synthetic_id(), "n2");
///
/// // Falls back to random ids afterwards.
/// let random = identifier.synthetic_id();
/// assert!(random.key().starts_with("_:"));
///
/// // Stable ids do not consume the supply.
/// let iri = Iri::new("http://example.org#Foo");
/// assert_eq!(identifier.id_for_iri(&iri), identifier.id_for_iri(&iri));
/// ```
#[derive(Debug, Default)]
pub struct Identifier {
    supply: VecDeque<String>,
    allocated: usize,
}

impl Identifier {
    /// Creates an allocator that only uses random synthetic ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator that hands out `ids` first, in order.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supply: ids.into_iter().map(Into::into).collect(),
            allocated: 0,
        }
    }

    /// Returns the stable id of a named entity IRI.
    ///
    /// Calling this twice with the same IRI yields equal ids.
    pub fn id_for_iri(&self, iri: &Iri) -> Id {
        Id::with_iri(iri.as_str(), iri.clone())
    }

    /// Allocates a fresh id for an anonymous construct.
    pub fn synthetic_id(&mut self) -> Id {
        Id::new(&self.next_key())
    }

    /// Allocates a fresh id that also remembers a provenance IRI.
    pub fn synthetic_id_for_iri(&mut self, iri: &Iri) -> Id {
        Id::with_iri(&self.next_key(), iri.clone())
    }

    /// Allocates a fresh render-only id (see [`RENDER_ONLY_IRI`]).
    pub fn render_only_id(&mut self) -> Id {
        self.synthetic_id_for_iri(&Iri::new(RENDER_ONLY_IRI))
    }

    /// Returns the number of synthetic ids allocated so far.
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Returns the number of pre-registered ids not yet handed out.
    pub fn remaining_supply(&self) -> usize {
        self.supply.len()
    }

    fn next_key(&mut self) -> String {
        self.allocated += 1;
        match self.supply.pop_front() {
            Some(key) => key,
            None => {
                let key = format!("_:{:016x}", rand::random::<u64>());
                trace!(key = key.as_str(); "Allocated random synthetic id");
                key
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_equality_ignores_iri() {
        let a = Id::with_iri("k", Iri::new("http://a.org#x"));
        let b = Id::with_iri("k", Iri::new("http://a.org#y"));
        let c = Id::new("other");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_collapses_same_key() {
        let mut set = HashSet::new();
        set.insert(Id::with_iri("k", Iri::new("http://a.org#x")));
        set.insert(Id::new("k"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut ids = vec![Id::new("b"), Id::new("c"), Id::new("a")];
        ids.sort();
        assert_eq!(ids, vec![Id::new("a"), Id::new("b"), Id::new("c")]);
    }

    #[test]
    fn test_nested_keeps_iri() {
        let iri = Iri::new("http://a.org#x");
        let nested = Id::with_iri("http://a.org#x", iri.clone()).nested("class");
        assert_eq!(nested, "http://a.org#x::class");
        assert_eq!(nested.iri(), Some(&iri));
    }

    #[test]
    fn test_id_for_iri_is_stable() {
        let identifier = Identifier::new();
        let iri = Iri::new("http://a.org#x");
        let a = identifier.id_for_iri(&iri);
        let b = identifier.id_for_iri(&iri);
        assert_eq!(a, b);
        assert_eq!(a.iri(), Some(&iri));
        assert_eq!(identifier.allocated(), 0);
    }

    #[test]
    fn test_supply_is_consumed_in_order() {
        let mut identifier = Identifier::with_ids(["first", "second"]);
        assert_eq!(identifier.remaining_supply(), 2);
        assert_eq!(identifier.synthetic_id(), "first");
        assert_eq!(identifier.synthetic_id(), "second");
        assert_eq!(identifier.remaining_supply(), 0);
        assert_eq!(identifier.allocated(), 2);
    }

    #[test]
    fn test_random_fallback_is_unique() {
        let mut identifier = Identifier::new();
        let ids: HashSet<Id> = (0..100).map(|_| identifier.synthetic_id()).collect();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| id.key().starts_with("_:")));
    }

    #[test]
    fn test_synthetic_id_for_iri() {
        let mut identifier = Identifier::with_ids(["s"]);
        let iri = Iri::new("http://a.org#x");
        let id = identifier.synthetic_id_for_iri(&iri);
        assert_eq!(id, "s");
        assert_eq!(id.iri(), Some(&iri));
        assert!(!id.is_render_only());
    }

    #[test]
    fn test_render_only_id() {
        let mut identifier = Identifier::with_ids(["r"]);
        let id = identifier.render_only_id();
        assert!(id.is_render_only());
        assert!(!identifier.id_for_iri(&Iri::new("http://a.org#x")).is_render_only());
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("abc");
        assert!(id == "abc");
        assert!(id != "abd");
        let slice: &str = "abc";
        assert!(id == slice);
    }
}
