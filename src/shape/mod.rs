//! Container shape classification.
//!
//! A container reports what it can do through [`Capabilities`]; [`classify`]
//! maps that capability set onto one of a closed set of reconstruction
//! strategies. The check runs once per invocation, at entry, and never per
//! element.
//!
//! # Priority
//!
//! The first matching rule wins:
//!
//! | Required capabilities                                      | Shape         |
//! |------------------------------------------------------------|---------------|
//! | `KEYED_LOOKUP` + `PAIR_ITERATION`                          | `Mapping`     |
//! | `VALUE_MEMBERSHIP` + `DISTINCT_VALUES` + `VALUE_ITERATION` | `UniqueSet`   |
//! | `POSITIONAL` + `KNOWN_LEN`                                 | `Sequence`    |
//! | anything else                                              | `Unsupported` |

mod capabilities;

pub use capabilities::Capabilities;

use core::fmt;

/// The structural kind of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Position-indexed elements with a known, stable length.
    Sequence,
    /// Key-indexed elements.
    Mapping,
    /// Value-indexed elements with no duplicates.
    UniqueSet,
    /// No recognized reconstruction strategy applies.
    Unsupported,
}

impl Shape {
    /// Returns the shape name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::UniqueSet => "unique-set",
            Self::Unsupported => "unsupported",
        }
    }

    /// Returns `true` unless this is [`Shape::Unsupported`].
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Applies the classification policy to a capability set.
    #[must_use]
    pub const fn from_capabilities(caps: Capabilities) -> Self {
        if caps.contains(Capabilities::MAPPING) {
            Self::Mapping
        } else if caps.contains(Capabilities::UNIQUE_SET) {
            Self::UniqueSet
        } else if caps.contains(Capabilities::SEQUENCE) {
            Self::Sequence
        } else {
            Self::Unsupported
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can describe its own iteration capabilities.
///
/// Implementations must be pure: reporting capabilities never iterates or
/// touches the contained awaitables.
pub trait Classify {
    /// Returns the capabilities this container exposes.
    fn capabilities(&self) -> Capabilities;
}

impl<C: Classify + ?Sized> Classify for &C {
    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}

impl<C: Classify + ?Sized> Classify for Box<C> {
    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}

/// Determines which reconstruction strategy applies to `container`.
///
/// Never fails; [`Shape::Unsupported`] is a normal outcome.
///
/// # Example
///
/// ```
/// use shapejoin::shape::{classify, Shape};
/// use std::collections::{BTreeMap, BinaryHeap};
/// use std::future::Ready;
///
/// let seq: Vec<Ready<u8>> = Vec::new();
/// assert_eq!(classify(&seq), Shape::Sequence);
///
/// let map: BTreeMap<&str, Ready<u8>> = BTreeMap::new();
/// assert_eq!(classify(&map), Shape::Mapping);
///
/// let heap: BinaryHeap<u8> = BinaryHeap::new();
/// assert_eq!(classify(&heap), Shape::Unsupported);
/// ```
pub fn classify<C: Classify + ?Sized>(container: &C) -> Shape {
    Shape::from_capabilities(container.capabilities())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Declared(Capabilities);

    impl Classify for Declared {
        fn capabilities(&self) -> Capabilities {
            self.0
        }
    }

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn mapping_wins_over_everything() {
        init_test("mapping_wins_over_everything");
        let all = Capabilities::MAPPING
            .union(Capabilities::UNIQUE_SET)
            .union(Capabilities::SEQUENCE);
        let shape = classify(&Declared(all));
        crate::assert_with_log!(shape == Shape::Mapping, "shape", Shape::Mapping, shape);
        crate::test_complete!("mapping_wins_over_everything");
    }

    #[test]
    fn unique_set_wins_over_sequence() {
        init_test("unique_set_wins_over_sequence");
        let caps = Capabilities::UNIQUE_SET.union(Capabilities::SEQUENCE);
        let shape = classify(&Declared(caps));
        crate::assert_with_log!(shape == Shape::UniqueSet, "shape", Shape::UniqueSet, shape);
        crate::test_complete!("unique_set_wins_over_sequence");
    }

    #[test]
    fn partial_capabilities_are_unsupported() {
        init_test("partial_capabilities_are_unsupported");
        // Keyed lookup without pair iteration.
        assert_eq!(
            classify(&Declared(Capabilities::KEYED_LOOKUP)),
            Shape::Unsupported
        );
        // Duplicates allowed: a multiset is not a unique set.
        let multiset = Capabilities::VALUE_MEMBERSHIP | Capabilities::VALUE_ITERATION;
        assert_eq!(classify(&Declared(multiset)), Shape::Unsupported);
        // Positional iteration without a known length.
        assert_eq!(
            classify(&Declared(Capabilities::POSITIONAL)),
            Shape::Unsupported
        );
        let none = Declared(Capabilities::empty());
        assert_eq!(classify(&none), Shape::Unsupported);
        crate::test_complete!("partial_capabilities_are_unsupported");
    }

    #[test]
    fn classify_through_references() {
        init_test("classify_through_references");
        let boxed: Box<dyn Classify> = Box::new(Declared(Capabilities::SEQUENCE));
        assert_eq!(classify(&boxed), Shape::Sequence);
        assert_eq!(classify(&&Declared(Capabilities::MAPPING)), Shape::Mapping);
        crate::test_complete!("classify_through_references");
    }

    #[test]
    fn shape_display() {
        assert_eq!(Shape::Sequence.to_string(), "sequence");
        assert_eq!(Shape::Mapping.to_string(), "mapping");
        assert_eq!(Shape::UniqueSet.to_string(), "unique-set");
        assert_eq!(Shape::Unsupported.to_string(), "unsupported");
        assert!(Shape::UniqueSet.is_supported());
        assert!(!Shape::Unsupported.is_supported());
    }
}
