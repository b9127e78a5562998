//! Error types for shape-preserving joins.
//!
//! Two failures can end a join:
//!
//! - [`ShapeError`]: the container matched no reconstruction strategy. This is
//!   reported before any awaitable is touched.
//! - [`ResolveError::Rejected`]: one awaitable failed. The awaitable's own error
//!   value is carried unchanged.
//!
//! Neither is retried or recovered locally.

use crate::shape::{Capabilities, Shape};
use thiserror::Error;

/// The container's iteration capabilities match no recognized shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported container shape for `{type_name}` (capabilities: {capabilities})")]
pub struct ShapeError {
    type_name: &'static str,
    capabilities: Capabilities,
}

impl ShapeError {
    /// Creates a shape error for a container type with the given capabilities.
    #[must_use]
    pub const fn new(type_name: &'static str, capabilities: Capabilities) -> Self {
        Self {
            type_name,
            capabilities,
        }
    }

    /// Creates a shape error describing `C`.
    #[must_use]
    pub fn for_type<C: ?Sized>(capabilities: Capabilities) -> Self {
        Self::new(std::any::type_name::<C>(), capabilities)
    }

    /// Returns the rejected container's type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the capabilities the rejected container reported.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Returns the shape the container was classified as.
    ///
    /// Always [`Shape::Unsupported`] for errors built from a real
    /// classification.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        Shape::from_capabilities(self.capabilities)
    }
}

/// Failure of a fail-fast shape-preserving join.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError<E> {
    /// The container could not be classified.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// An awaitable rejected; the payload is its error, unchanged, and so is
    /// its display.
    #[error("{0}")]
    Rejected(E),
    /// The wait primitive returned a different number of values than it was given.
    #[error("wait primitive returned {actual} values for {expected} awaitables")]
    Cardinality {
        /// Number of awaitables submitted.
        expected: usize,
        /// Number of values returned.
        actual: usize,
    },
}

impl<E> ResolveError<E> {
    /// Returns `true` if this is a classification failure.
    #[must_use]
    pub const fn is_shape(&self) -> bool {
        matches!(self, Self::Shape(_))
    }

    /// Returns `true` if an awaitable rejected.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns the awaitable's error, if this is a rejection.
    #[must_use]
    pub fn rejection(&self) -> Option<&E> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// Consumes the error, returning the awaitable's error if this is a rejection.
    #[must_use]
    pub fn into_rejection(self) -> Option<E> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// Maps the rejection payload, leaving other variants untouched.
    pub fn map_rejection<F, O>(self, op: O) -> ResolveError<F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Shape(err) => ResolveError::Shape(err),
            Self::Rejected(err) => ResolveError::Rejected(op(err)),
            Self::Cardinality { expected, actual } => {
                ResolveError::Cardinality { expected, actual }
            }
        }
    }

    /// Folds every variant into the awaitable error type.
    ///
    /// Rejections are returned as-is; the other variants are converted
    /// through `E`'s `From` impls.
    pub fn flatten(self) -> E
    where
        E: From<ShapeError> + From<CardinalityError>,
    {
        match self {
            Self::Shape(err) => err.into(),
            Self::Rejected(err) => err,
            Self::Cardinality { expected, actual } => CardinalityError { expected, actual }.into(),
        }
    }
}

/// The wait primitive broke its positional contract.
///
/// Standalone form of [`ResolveError::Cardinality`], for error types that
/// absorb join failures through [`ResolveError::flatten`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("wait primitive returned {actual} values for {expected} awaitables")]
pub struct CardinalityError {
    /// Number of awaitables submitted.
    pub expected: usize,
    /// Number of values returned.
    pub actual: usize,
}

impl<E> From<CardinalityError> for ResolveError<E> {
    fn from(err: CardinalityError) -> Self {
        Self::Cardinality {
            expected: err.expected,
            actual: err.actual,
        }
    }
}

/// Result type for fail-fast joins.
pub type ResolveResult<T, E> = Result<T, ResolveError<E>>;
