//! Container adapters: element extraction and shape-preserving reconstruction.
//!
//! A [`Container`] knows how to turn itself into an ordered list of
//! [`Element`]s, each pairing an *association* (position, key, or set slot)
//! with the awaitable stored at that association. [`Rebuild`] goes the other
//! way: given a [`Resolution`] that pairs every association with its resolved
//! value, it constructs a fresh container of the same kind.
//!
//! Associations are recorded at extraction time and travel alongside the
//! awaitables, so reconstruction never re-derives keys or depends on two
//! independently ordered sequences staying in lockstep.
//!
//! # Supported containers
//!
//! | Shape       | Types                                                               |
//! |-------------|---------------------------------------------------------------------|
//! | Sequence    | `Vec`, `VecDeque`, `LinkedList`, `Box<[F]>`, `SmallVec`, [`Iterable`] |
//! | Mapping     | `HashMap`, `BTreeMap`, `hashbrown::HashMap`, `IndexMap`             |
//! | Unique set  | `HashSet`, `BTreeSet`, `hashbrown::HashSet`, `IndexSet`             |
//!
//! `BinaryHeap` is classified (as unsupported) but cannot be joined.

mod iterable;
mod mapping;
mod sequence;
mod set;

pub use iterable::{Iterable, iterable};

use crate::error::CardinalityError;
use crate::shape::Classify;

/// One awaitable together with the association it was stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<A, F> {
    /// Position, key, or set slot of the awaitable.
    pub association: A,
    /// The pending computation.
    pub awaitable: F,
}

impl<A, F> Element<A, F> {
    /// Creates a new element.
    #[must_use]
    pub const fn new(association: A, awaitable: F) -> Self {
        Self {
            association,
            awaitable,
        }
    }

    /// Splits the element into its parts.
    pub fn into_parts(self) -> (A, F) {
        (self.association, self.awaitable)
    }
}

/// Every association of a container paired with its resolved value.
///
/// Entries are kept in the order they were extracted. A resolution always
/// holds exactly one entry per extracted element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<A, T> {
    entries: Vec<(A, T)>,
}

impl<A, T> Resolution<A, T> {
    /// Zips recorded associations with positionally matching values.
    ///
    /// Fails if the two lists differ in length; no partial resolution is
    /// built.
    pub fn zip(associations: Vec<A>, values: Vec<T>) -> Result<Self, CardinalityError> {
        if associations.len() != values.len() {
            return Err(CardinalityError {
                expected: associations.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            entries: associations.into_iter().zip(values).collect(),
        })
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in extraction order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&A, &T)> {
        self.entries.iter().map(|(a, t)| (a, t))
    }

    /// Consumes the resolution, yielding `(association, value)` in extraction order.
    pub fn into_entries(self) -> std::vec::IntoIter<(A, T)> {
        self.entries.into_iter()
    }

    /// Consumes the resolution, yielding values in extraction order.
    pub fn into_values(self) -> impl ExactSizeIterator<Item = T> {
        self.entries.into_iter().map(|(_, value)| value)
    }
}

impl<A, T> IntoIterator for Resolution<A, T> {
    type Item = (A, T);
    type IntoIter = std::vec::IntoIter<(A, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_entries()
    }
}

/// A collection of awaitables that can be taken apart into [`Element`]s.
///
/// Implementations must yield elements in the container's native iteration
/// order and produce one element per stored awaitable.
pub trait Container: Classify + Sized {
    /// What ties an awaitable to its slot: an index, a key, or a set ordinal.
    type Association;
    /// The pending computation stored in each slot.
    type Awaitable;

    /// Returns the number of stored awaitables, as far as it is known before
    /// extraction.
    ///
    /// Exact for every collection; for an [`Iterable`] it is the lower bound
    /// of the iterator's size hint, and [`into_elements`](Self::into_elements)
    /// may yield more.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no awaitables.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the container, yielding its elements in iteration order.
    fn into_elements(self) -> Vec<Element<Self::Association, Self::Awaitable>>;
}

/// A container that can be rebuilt around resolved values of type `T`.
pub trait Rebuild<T>: Container {
    /// The container produced once every awaitable resolved to a `T`.
    type Output;

    /// Builds a fresh container from a resolution, replaying its order.
    fn rebuild(resolution: Resolution<Self::Association, T>) -> Self::Output;
}

/// Splits elements into recorded associations and submission-ordered awaitables.
pub(crate) fn unzip_elements<A, F>(elements: Vec<Element<A, F>>) -> (Vec<A>, Vec<F>) {
    elements.into_iter().map(Element::into_parts).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_pairs_in_order() {
        let resolution = Resolution::zip(vec!["a", "b"], vec![1, 2])
            .expect("same length");
        assert_eq!(resolution.len(), 2);
        let borrowed: Vec<_> = resolution.iter().collect();
        assert_eq!(borrowed, vec![(&"a", &1), (&"b", &2)]);
        let entries: Vec<_> = resolution.into_entries().collect();
        assert_eq!(entries, vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn zip_rejects_length_mismatch() {
        let err = Resolution::zip(vec![0usize, 1, 2], vec!['x']).unwrap_err();
        assert_eq!(
            err,
            CardinalityError {
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn empty_resolution() {
        let resolution: Resolution<usize, u8> =
            Resolution::zip(Vec::new(), Vec::new()).expect("empty");
        assert!(resolution.is_empty());
        assert_eq!(resolution.into_values().len(), 0);
    }

    #[test]
    fn unzip_keeps_pairs_aligned() {
        let elements = vec![Element::new("k1", 10), Element::new("k2", 20)];
        let (associations, awaitables) = unzip_elements(elements);
        assert_eq!(associations, vec!["k1", "k2"]);
        assert_eq!(awaitables, vec![10, 20]);
    }
}
