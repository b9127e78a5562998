//! Capability flags reported by containers.

use core::fmt;

/// A set of iteration capabilities a container exposes.
///
/// Capabilities are plain flags; the combined constants
/// ([`MAPPING`](Self::MAPPING), [`UNIQUE_SET`](Self::UNIQUE_SET),
/// [`SEQUENCE`](Self::SEQUENCE)) are the minimum sets each shape requires.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u8);

impl Capabilities {
    /// Values can be looked up by a distinct key.
    pub const KEYED_LOOKUP: Self = Self(1 << 0);
    /// Iteration yields key/value pairs.
    pub const PAIR_ITERATION: Self = Self(1 << 1);
    /// Membership is decided by value.
    pub const VALUE_MEMBERSHIP: Self = Self(1 << 2);
    /// The container cannot hold two equal values.
    pub const DISTINCT_VALUES: Self = Self(1 << 3);
    /// Iteration yields bare values.
    pub const VALUE_ITERATION: Self = Self(1 << 4);
    /// Iteration order is positional and stable.
    pub const POSITIONAL: Self = Self(1 << 5);
    /// The element count is known before iteration.
    pub const KNOWN_LEN: Self = Self(1 << 6);

    /// Minimum capabilities of a mapping.
    pub const MAPPING: Self = Self::KEYED_LOOKUP.union(Self::PAIR_ITERATION);
    /// Minimum capabilities of a unique set.
    pub const UNIQUE_SET: Self = Self::VALUE_MEMBERSHIP
        .union(Self::DISTINCT_VALUES)
        .union(Self::VALUE_ITERATION);
    /// Minimum capabilities of a sequence.
    pub const SEQUENCE: Self = Self::POSITIONAL.union(Self::KNOWN_LEN);

    const NAMES: [(Self, &'static str); 7] = [
        (Self::KEYED_LOOKUP, "keyed-lookup"),
        (Self::PAIR_ITERATION, "pair-iteration"),
        (Self::VALUE_MEMBERSHIP, "value-membership"),
        (Self::DISTINCT_VALUES, "distinct-values"),
        (Self::VALUE_ITERATION, "value-iteration"),
        (Self::POSITIONAL, "positional"),
        (Self::KNOWN_LEN, "known-len"),
    ];

    /// Returns the empty capability set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns the union of two capability sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `self` without the capabilities in `other`.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if every capability in `other` is also in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no capability is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for Capabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capabilities({self})")
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
