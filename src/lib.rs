//! Shapejoin: shape-preserving concurrent joins for Rust containers.
//!
//! # Overview
//!
//! Given a container of awaitables, [`resolve_matching`] waits for all of
//! them concurrently and returns a container of the same kind holding the
//! resolved values:
//!
//! - a sequence resolves to a sequence with each value at its source position
//! - a mapping resolves to a mapping with each value under its source key
//! - a unique set resolves to a unique set of the resolved values
//!
//! Containers whose shape cannot be recognized are rejected with a
//! [`ShapeError`] before any awaitable is touched. The first element
//! rejection is passed through unchanged.
//!
//! ```
//! use shapejoin::resolve_matching;
//! use std::collections::BTreeMap;
//! use std::future::ready;
//!
//! let mut roster = BTreeMap::new();
//! roster.insert("Ryu", ready(Ok::<u32, &str>(7)));
//! roster.insert("Ken", ready(Ok(3)));
//!
//! let resolved = futures_lite::future::block_on(resolve_matching(roster)).unwrap();
//! assert_eq!(resolved["Ryu"], 7);
//! assert_eq!(resolved["Ken"], 3);
//! ```
//!
//! # Module Structure
//!
//! - [`shape`]: Capability flags and shape classification
//! - [`container`]: Adapters that extract and rebuild supported containers
//! - [`combinator`]: The join futures, [`Resolver`], and the [`WaitAll`] seam
//! - [`config`]: Failure policy and optional TOML loading
//! - [`error`](mod@error): Shape, rejection, and cardinality errors
//! - [`tracing_compat`]: Optional tracing integration (requires `tracing-integration` feature)

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod combinator;
pub mod config;
pub mod container;
pub mod error;
pub mod shape;
pub mod tracing_compat;

#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;

pub use combinator::{
    FuturesWaitAll, JoinMatching, Resolver, TryJoinMatching, WaitAll, join_matching,
    resolve_matching,
};
pub use config::{ConfigError, FailurePolicy, ResolveConfig};
pub use container::{Container, Element, Iterable, Rebuild, Resolution, iterable};
pub use error::{CardinalityError, ResolveError, ResolveResult, ShapeError};
pub use shape::{Capabilities, Classify, Shape, classify};
