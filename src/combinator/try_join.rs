//! Fail-fast shape-preserving join.

use super::wait::{FuturesWaitAll, WaitAll};
use super::{classify_for_join, extract, rebuild};
use crate::config::FailurePolicy;
use crate::container::{Container, Rebuild};
use crate::error::{ResolveError, ShapeError};
use crate::shape::Shape;
use crate::tracing_compat::debug;
use futures_util::future::{IntoFuture, TryFuture, TryFutureExt};
use pin_project::pin_project;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

type OkOf<C> = <<C as Container>::Awaitable as TryFuture>::Ok;
type ErrorOf<C> = <<C as Container>::Awaitable as TryFuture>::Error;

#[pin_project(project = TryStateProj)]
enum TryState<A, Ff, Sa> {
    Rejected(Option<ShapeError>),
    FailFast {
        associations: Vec<A>,
        #[pin]
        wait: Ff,
    },
    SettleAll {
        associations: Vec<A>,
        #[pin]
        wait: Sa,
    },
    Done,
}

/// Future for [`resolve_matching`](super::resolve_matching) and
/// [`Resolver::resolve`](super::Resolver::resolve).
///
/// Resolves to a container of the same shape as the input, or to the first
/// rejection. Polling after completion panics.
#[pin_project]
#[must_use = "futures do nothing unless polled"]
pub struct TryJoinMatching<C, W = FuturesWaitAll>
where
    C: Container,
    C::Awaitable: TryFuture,
    W: WaitAll,
{
    #[pin]
    state: TryState<C::Association, W::TryWait<C::Awaitable>, W::Wait<IntoFuture<C::Awaitable>>>,
    shape: Shape,
    _container: PhantomData<fn() -> C>,
}

impl<C, W> TryJoinMatching<C, W>
where
    C: Container,
    C::Awaitable: TryFuture,
    W: WaitAll,
{
    pub(crate) fn new(container: C, wait: &W, policy: FailurePolicy) -> Self {
        let shape = match classify_for_join(&container) {
            Ok(shape) => shape,
            Err(err) => {
                return Self {
                    state: TryState::Rejected(Some(err)),
                    shape: Shape::Unsupported,
                    _container: PhantomData,
                };
            }
        };

        let (associations, awaitables) = extract(container);
        let state = match policy {
            FailurePolicy::FailFast => TryState::FailFast {
                associations,
                wait: wait.try_wait_all(awaitables),
            },
            FailurePolicy::SettleAll => TryState::SettleAll {
                associations,
                wait: wait.wait_all(
                    awaitables
                        .into_iter()
                        .map(TryFutureExt::into_future)
                        .collect(),
                ),
            },
        };

        Self {
            state,
            shape,
            _container: PhantomData,
        }
    }

    /// Returns the shape the input container was classified as.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }
}

impl<C, W> Future for TryJoinMatching<C, W>
where
    C: Rebuild<OkOf<C>>,
    C::Awaitable: TryFuture,
    W: WaitAll,
{
    type Output = Result<<C as Rebuild<OkOf<C>>>::Output, ResolveError<ErrorOf<C>>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        let outcome = match this.state.as_mut().project() {
            TryStateProj::Rejected(err) => Err(ResolveError::Shape(
                err.take().expect("TryJoinMatching polled after completion"),
            )),
            TryStateProj::FailFast { associations, wait } => match ready!(wait.poll(cx)) {
                Ok(values) => rebuild::<C, _, _>(std::mem::take(associations), values),
                Err(err) => {
                    debug!(shape = %this.shape, "awaitable rejected, failing fast");
                    Err(ResolveError::Rejected(err))
                }
            },
            TryStateProj::SettleAll { associations, wait } => {
                let settled = ready!(wait.poll(cx));
                // First failure in iteration order wins.
                match settled.into_iter().collect::<Result<Vec<_>, _>>() {
                    Ok(values) => rebuild::<C, _, _>(std::mem::take(associations), values),
                    Err(err) => {
                        debug!(shape = %this.shape, "awaitable rejected after all settled");
                        Err(ResolveError::Rejected(err))
                    }
                }
            }
            TryStateProj::Done => panic!("TryJoinMatching polled after completion"),
        };
        this.state.set(TryState::Done);
        Poll::Ready(outcome)
    }
}

impl<C, W> fmt::Debug for TryJoinMatching<C, W>
where
    C: Container,
    C::Awaitable: TryFuture,
    W: WaitAll,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            TryState::Rejected(_) => "rejected",
            TryState::FailFast { .. } => "fail-fast",
            TryState::SettleAll { .. } => "settle-all",
            TryState::Done => "done",
        };
        f.debug_struct("TryJoinMatching")
            .field("shape", &self.shape)
            .field("state", &state)
            .finish_non_exhaustive()
    }
}
