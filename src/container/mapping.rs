//! Mapping containers: associations are keys.
//!
//! Output maps are built with a default-constructed hasher; the input map's
//! hasher state is not carried over.

use super::{Container, Element, Rebuild, Resolution};
use crate::shape::{Capabilities, Classify};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

const MAPPING_CAPS: Capabilities = Capabilities::MAPPING.union(Capabilities::KNOWN_LEN);

fn keyed<K, F>(pairs: impl IntoIterator<Item = (K, F)>) -> Vec<Element<K, F>> {
    pairs
        .into_iter()
        .map(|(key, awaitable)| Element::new(key, awaitable))
        .collect()
}

impl<K, F, S> Classify for HashMap<K, F, S> {
    fn capabilities(&self) -> Capabilities {
        MAPPING_CAPS
    }
}

impl<K, F, S> Container for HashMap<K, F, S> {
    type Association = K;
    type Awaitable = F;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn into_elements(self) -> Vec<Element<K, F>> {
        keyed(self)
    }
}

impl<K, F, S, T> Rebuild<T> for HashMap<K, F, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = HashMap<K, T, S>;

    fn rebuild(resolution: Resolution<K, T>) -> Self::Output {
        resolution.into_entries().collect()
    }
}

impl<K, F, S> Classify for hashbrown::HashMap<K, F, S> {
    fn capabilities(&self) -> Capabilities {
        MAPPING_CAPS
    }
}

impl<K, F, S> Container for hashbrown::HashMap<K, F, S> {
    type Association = K;
    type Awaitable = F;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn into_elements(self) -> Vec<Element<K, F>> {
        keyed(self)
    }
}

impl<K, F, S, T> Rebuild<T> for hashbrown::HashMap<K, F, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = hashbrown::HashMap<K, T, S>;

    fn rebuild(resolution: Resolution<K, T>) -> Self::Output {
        resolution.into_entries().collect()
    }
}

impl<K, F> Classify for BTreeMap<K, F> {
    fn capabilities(&self) -> Capabilities {
        MAPPING_CAPS
    }
}

impl<K, F> Container for BTreeMap<K, F> {
    type Association = K;
    type Awaitable = F;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn into_elements(self) -> Vec<Element<K, F>> {
        keyed(self)
    }
}

impl<K: Ord, F, T> Rebuild<T> for BTreeMap<K, F> {
    type Output = BTreeMap<K, T>;

    fn rebuild(resolution: Resolution<K, T>) -> Self::Output {
        resolution.into_entries().collect()
    }
}

impl<K, F, S> Classify for IndexMap<K, F, S> {
    fn capabilities(&self) -> Capabilities {
        MAPPING_CAPS.union(Capabilities::POSITIONAL)
    }
}

impl<K, F, S> Container for IndexMap<K, F, S> {
    type Association = K;
    type Awaitable = F;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn into_elements(self) -> Vec<Element<K, F>> {
        keyed(self)
    }
}

impl<K, F, S, T> Rebuild<T> for IndexMap<K, F, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = IndexMap<K, T, S>;

    fn rebuild(resolution: Resolution<K, T>) -> Self::Output {
        resolution.into_entries().collect()
    }
}
