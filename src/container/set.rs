//! Unique-set containers.
//!
//! A set element is identified by its own value. The awaitable is moved into
//! the wait, so its identity travels as the ordinal it was visited at; the
//! output set is filled by inserting resolved values in that order.
//!
//! Distinct awaitables may resolve to equal values. The output set then holds
//! fewer elements than the input, as set insertion dictates.

use super::{Container, Element, Rebuild, Resolution};
use crate::shape::{Capabilities, Classify};
use indexmap::IndexSet;
use std::collections::{BTreeSet, BinaryHeap, HashSet};
use std::hash::{BuildHasher, Hash};

const SET_CAPS: Capabilities = Capabilities::UNIQUE_SET.union(Capabilities::KNOWN_LEN);

fn ordinals<F>(members: impl IntoIterator<Item = F>) -> Vec<Element<usize, F>> {
    members
        .into_iter()
        .enumerate()
        .map(|(ordinal, awaitable)| Element::new(ordinal, awaitable))
        .collect()
}

impl<F, S> Classify for HashSet<F, S> {
    fn capabilities(&self) -> Capabilities {
        SET_CAPS
    }
}

impl<F, S> Container for HashSet<F, S> {
    type Association = usize;
    type Awaitable = F;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn into_elements(self) -> Vec<Element<usize, F>> {
        ordinals(self)
    }
}

impl<F, S, T> Rebuild<T> for HashSet<F, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = HashSet<T, S>;

    fn rebuild(resolution: Resolution<usize, T>) -> Self::Output {
        resolution.into_values().collect()
    }
}

impl<F, S> Classify for hashbrown::HashSet<F, S> {
    fn capabilities(&self) -> Capabilities {
        SET_CAPS
    }
}

impl<F, S> Container for hashbrown::HashSet<F, S> {
    type Association = usize;
    type Awaitable = F;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn into_elements(self) -> Vec<Element<usize, F>> {
        ordinals(self)
    }
}

impl<F, S, T> Rebuild<T> for hashbrown::HashSet<F, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = hashbrown::HashSet<T, S>;

    fn rebuild(resolution: Resolution<usize, T>) -> Self::Output {
        resolution.into_values().collect()
    }
}

impl<F> Classify for BTreeSet<F> {
    fn capabilities(&self) -> Capabilities {
        SET_CAPS
    }
}

impl<F> Container for BTreeSet<F> {
    type Association = usize;
    type Awaitable = F;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn into_elements(self) -> Vec<Element<usize, F>> {
        ordinals(self)
    }
}

impl<F, T: Ord> Rebuild<T> for BTreeSet<F> {
    type Output = BTreeSet<T>;

    fn rebuild(resolution: Resolution<usize, T>) -> Self::Output {
        resolution.into_values().collect()
    }
}

impl<F, S> Classify for IndexSet<F, S> {
    fn capabilities(&self) -> Capabilities {
        SET_CAPS.union(Capabilities::POSITIONAL)
    }
}

impl<F, S> Container for IndexSet<F, S> {
    type Association = usize;
    type Awaitable = F;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn into_elements(self) -> Vec<Element<usize, F>> {
        ordinals(self)
    }
}

impl<F, S, T> Rebuild<T> for IndexSet<F, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = IndexSet<T, S>;

    fn rebuild(resolution: Resolution<usize, T>) -> Self::Output {
        resolution.into_values().collect()
    }
}

// Duplicates allowed and no stable iteration order: neither a unique set nor
// a sequence.
impl<F> Classify for BinaryHeap<F> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::VALUE_ITERATION | Capabilities::KNOWN_LEN
    }
}
