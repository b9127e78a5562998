//! Shape-preserving join combinators.
//!
//! - [`resolve_matching`]: fail-fast join over fallible awaitables
//! - [`join_matching`]: all-succeed join over infallible awaitables
//! - [`Resolver`]: both joins with an explicit [`ResolveConfig`] and
//!   [`WaitAll`] primitive
//!
//! Each join classifies the container once, records the association of every
//! awaitable, submits the awaitables to the wait primitive in that recorded
//! order, and rebuilds a container of the same kind from the results.
//!
//! ```text
//! container ─► classify ─┬─ Unsupported ─────────────────► Err(ShapeError)
//!                        └─ supported ─► extract elements
//!                                          │ associations (kept)
//!                                          │ awaitables ─► WaitAll
//!                                          ▼
//!                               zip ◄── values (in order) ─► rebuild ─► Ok(C')
//! ```

pub mod join;
pub mod try_join;
pub mod wait;

pub use join::JoinMatching;
pub use try_join::TryJoinMatching;
pub use wait::{FuturesWaitAll, WaitAll};

use crate::config::{FailurePolicy, ResolveConfig};
use crate::container::{Container, Rebuild, Resolution, unzip_elements};
use crate::error::{ResolveError, ShapeError};
use crate::shape::Shape;
use crate::tracing_compat::{debug, trace, warn};
use futures_util::future::TryFuture;
use std::future::Future;

/// Joins containers of awaitables while preserving their shape.
///
/// # Example
///
/// ```
/// use shapejoin::combinator::Resolver;
/// use shapejoin::config::FailurePolicy;
/// use std::collections::BTreeMap;
/// use std::future::ready;
///
/// let resolver = Resolver::new().with_failure_policy(FailurePolicy::SettleAll);
///
/// let mut scores = BTreeMap::new();
/// scores.insert("Ryu", ready(Ok::<_, &str>(7)));
/// scores.insert("Ken", ready(Ok(3)));
///
/// let resolved = futures_lite::future::block_on(resolver.resolve(scores)).unwrap();
/// assert_eq!(resolved["Ryu"], 7);
/// assert_eq!(resolved["Ken"], 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver<W = FuturesWaitAll> {
    config: ResolveConfig,
    wait: W,
}

impl Resolver {
    /// Creates a resolver with the default configuration and primitive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with the given configuration.
    #[must_use]
    pub fn from_config(config: ResolveConfig) -> Self {
        Self {
            config,
            wait: FuturesWaitAll,
        }
    }
}

impl<W: WaitAll> Resolver<W> {
    /// Replaces the wait-all primitive.
    #[must_use]
    pub fn with_wait<V: WaitAll>(self, wait: V) -> Resolver<V> {
        Resolver {
            config: self.config,
            wait,
        }
    }

    /// Sets the failure policy used by [`resolve`](Self::resolve).
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Returns the wait-all primitive.
    #[must_use]
    pub fn wait(&self) -> &W {
        &self.wait
    }

    /// Joins a container of fallible awaitables.
    ///
    /// Classification and extraction happen here; waiting happens when the
    /// returned future is polled.
    pub fn resolve<C>(&self, container: C) -> TryJoinMatching<C, W>
    where
        C: Container,
        C::Awaitable: TryFuture,
    {
        TryJoinMatching::new(container, &self.wait, self.config.failure_policy)
    }

    /// Joins a container of infallible awaitables.
    pub fn join<C>(&self, container: C) -> JoinMatching<C, W>
    where
        C: Container,
        C::Awaitable: Future,
    {
        JoinMatching::new(container, &self.wait)
    }
}

/// Waits for every awaitable in `container` to succeed and rebuilds a
/// container of the same shape from the results.
///
/// Rejects with the first failure, unchanged, as soon as any awaitable fails;
/// the remaining awaitables are dropped. Rejects without touching any
/// awaitable if the container's shape is unsupported.
///
/// # Example
///
/// ```
/// use shapejoin::resolve_matching;
/// use std::collections::HashMap;
/// use std::future::ready;
///
/// let mut input = HashMap::new();
/// input.insert("Ryu", ready(Ok::<u32, &str>(7)));
/// input.insert("Ken", ready(Ok(3)));
///
/// let output = futures_lite::future::block_on(resolve_matching(input)).unwrap();
/// assert_eq!(output, HashMap::from([("Ryu", 7), ("Ken", 3)]));
/// ```
pub fn resolve_matching<C>(container: C) -> TryJoinMatching<C>
where
    C: Container,
    C::Awaitable: TryFuture,
{
    Resolver::new().resolve(container)
}

/// Waits for every awaitable in `container` and rebuilds a container of the
/// same shape from the outputs.
///
/// # Example
///
/// ```
/// use shapejoin::join_matching;
/// use std::future::ready;
///
/// let output = futures_lite::future::block_on(join_matching(vec![ready(1), ready(2)]));
/// assert_eq!(output.unwrap(), vec![1, 2]);
/// ```
pub fn join_matching<C>(container: C) -> JoinMatching<C>
where
    C: Container,
    C::Awaitable: Future,
{
    Resolver::new().join(container)
}

/// Classifies `container`, or describes why it cannot be joined.
fn classify_for_join<C: Container>(container: &C) -> Result<Shape, ShapeError> {
    let capabilities = container.capabilities();
    let shape = Shape::from_capabilities(capabilities);
    if shape.is_supported() {
        debug!(
            shape = %shape,
            container = std::any::type_name::<C>(),
            "classified container"
        );
        Ok(shape)
    } else {
        let err = ShapeError::for_type::<C>(capabilities);
        warn!(
            container = err.type_name(),
            capabilities = %err.capabilities(),
            "rejecting unsupported container shape"
        );
        Err(err)
    }
}

/// Takes a classified container apart, recording every association.
///
/// The logged count is what was actually extracted; [`Container::len`] may
/// be an estimate.
fn extract<C: Container>(container: C) -> (Vec<C::Association>, Vec<C::Awaitable>) {
    let (associations, awaitables) = unzip_elements(container.into_elements());
    debug!(elements = awaitables.len(), "extracted awaitables");
    (associations, awaitables)
}

/// Zips resolved values onto their associations and rebuilds the container.
fn rebuild<C, T, E>(
    associations: Vec<C::Association>,
    values: Vec<T>,
) -> Result<C::Output, ResolveError<E>>
where
    C: Rebuild<T>,
{
    let resolution = Resolution::zip(associations, values).map_err(|err| {
        debug!(
            expected = err.expected,
            actual = err.actual,
            "wait primitive broke positional contract"
        );
        ResolveError::from(err)
    })?;
    trace!(elements = resolution.len(), "all awaitables resolved");
    Ok(C::rebuild(resolution))
}
