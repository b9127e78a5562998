//! Arbitrary iterators of awaitables.

use super::{Container, Element, Rebuild, Resolution};
use crate::shape::{Capabilities, Classify};

/// An iterator of awaitables, joined as a sequence when its length is known.
///
/// The length is read from the iterator's size hint. An iterator whose hint
/// is exact is positional with a known length and classifies as a sequence;
/// any other iterator classifies as unsupported and is never advanced.
///
/// Created by the [`iterable`] function.
#[derive(Debug, Clone)]
pub struct Iterable<I> {
    iter: I,
}

impl<I> Iterable<I> {
    /// Creates a new `Iterable` from an iterator.
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Consumes the wrapper, returning the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> Iterable<I> {
    fn exact_len(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        }
    }
}

/// Wraps any `IntoIterator` of awaitables so it can be joined.
///
/// # Examples
///
/// ```
/// use shapejoin::container::iterable;
/// use shapejoin::shape::{classify, Shape};
///
/// let known = iterable((0..3).map(std::future::ready));
/// assert_eq!(classify(&known), Shape::Sequence);
///
/// let unknown = iterable((0..3).filter(|n| n % 2 == 0).map(std::future::ready));
/// assert_eq!(classify(&unknown), Shape::Unsupported);
/// ```
pub fn iterable<I: IntoIterator>(i: I) -> Iterable<I::IntoIter> {
    Iterable::new(i.into_iter())
}

impl<I: Iterator> Classify for Iterable<I> {
    fn capabilities(&self) -> Capabilities {
        let positional = Capabilities::POSITIONAL | Capabilities::VALUE_ITERATION;
        if self.exact_len().is_some() {
            positional | Capabilities::KNOWN_LEN
        } else {
            positional
        }
    }
}

impl<I: Iterator> Container for Iterable<I> {
    type Association = usize;
    type Awaitable = I::Item;

    /// Lower bound of the size hint; not a count of what the iterator yields.
    fn len(&self) -> usize {
        self.iter.size_hint().0
    }

    fn into_elements(self) -> Vec<Element<usize, I::Item>> {
        self.iter
            .enumerate()
            .map(|(index, awaitable)| Element::new(index, awaitable))
            .collect()
    }
}

impl<I: Iterator, T> Rebuild<T> for Iterable<I> {
    type Output = Vec<T>;

    fn rebuild(resolution: Resolution<usize, T>) -> Self::Output {
        resolution.into_values().collect()
    }
}
