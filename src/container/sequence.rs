//! Sequence containers: associations are zero-based positions.

use super::{Container, Element, Rebuild, Resolution};
use crate::shape::{Capabilities, Classify};
use smallvec::SmallVec;
use std::collections::{LinkedList, VecDeque};

const SEQUENCE_CAPS: Capabilities = Capabilities::SEQUENCE.union(Capabilities::VALUE_ITERATION);

fn indexed<F>(awaitables: impl IntoIterator<Item = F>) -> Vec<Element<usize, F>> {
    awaitables
        .into_iter()
        .enumerate()
        .map(|(index, awaitable)| Element::new(index, awaitable))
        .collect()
}

/// Values of a positional resolution, checked against their recorded index.
fn positional<T>(resolution: Resolution<usize, T>) -> impl ExactSizeIterator<Item = T> {
    resolution
        .into_entries()
        .enumerate()
        .map(|(position, (index, value))| {
            debug_assert_eq!(position, index, "sequence resolution out of order");
            value
        })
}

impl<F> Classify for [F] {
    fn capabilities(&self) -> Capabilities {
        SEQUENCE_CAPS
    }
}

macro_rules! sequence_container {
    ($($container:ident),* $(,)?) => {
        $(
            impl<F> Classify for $container<F> {
                fn capabilities(&self) -> Capabilities {
                    SEQUENCE_CAPS
                }
            }

            impl<F> Container for $container<F> {
                type Association = usize;
                type Awaitable = F;

                fn len(&self) -> usize {
                    $container::len(self)
                }

                fn into_elements(self) -> Vec<Element<usize, F>> {
                    indexed(self)
                }
            }

            impl<F, T> Rebuild<T> for $container<F> {
                type Output = $container<T>;

                fn rebuild(resolution: Resolution<usize, T>) -> Self::Output {
                    positional(resolution).collect()
                }
            }
        )*
    };
}

sequence_container!(Vec, VecDeque, LinkedList);

impl<F> Container for Box<[F]> {
    type Association = usize;
    type Awaitable = F;

    fn len(&self) -> usize {
        <[F]>::len(self)
    }

    fn into_elements(self) -> Vec<Element<usize, F>> {
        indexed(self.into_vec())
    }
}

impl<F, T> Rebuild<T> for Box<[F]> {
    type Output = Box<[T]>;

    fn rebuild(resolution: Resolution<usize, T>) -> Self::Output {
        positional(resolution).collect()
    }
}

impl<F, const N: usize> Classify for SmallVec<[F; N]>
where
    [F; N]: smallvec::Array<Item = F>,
{
    fn capabilities(&self) -> Capabilities {
        SEQUENCE_CAPS
    }
}

impl<F, const N: usize> Container for SmallVec<[F; N]>
where
    [F; N]: smallvec::Array<Item = F>,
{
    type Association = usize;
    type Awaitable = F;

    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn into_elements(self) -> Vec<Element<usize, F>> {
        indexed(self)
    }
}

impl<F, T, const N: usize> Rebuild<T> for SmallVec<[F; N]>
where
    [F; N]: smallvec::Array<Item = F>,
    [T; N]: smallvec::Array<Item = T>,
{
    type Output = SmallVec<[T; N]>;

    fn rebuild(resolution: Resolution<usize, T>) -> Self::Output {
        positional(resolution).collect()
    }
}
