//! All-succeed shape-preserving join.

use super::wait::{FuturesWaitAll, WaitAll};
use super::{classify_for_join, extract, rebuild};
use crate::container::{Container, Rebuild};
use crate::error::{ResolveError, ShapeError};
use crate::shape::Shape;
use pin_project::pin_project;
use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

type OutputOf<C> = <<C as Container>::Awaitable as Future>::Output;

#[pin_project(project = JoinStateProj)]
enum JoinState<A, Fut> {
    Rejected(Option<ShapeError>),
    Waiting {
        associations: Vec<A>,
        #[pin]
        wait: Fut,
    },
    Done,
}

/// Future for [`join_matching`](super::join_matching) and
/// [`Resolver::join`](super::Resolver::join).
///
/// Waits for every awaitable and resolves to a container of the same shape.
/// The error side is only ever a shape or cardinality failure; awaitables
/// cannot reject. Polling after completion panics.
#[pin_project]
#[must_use = "futures do nothing unless polled"]
pub struct JoinMatching<C, W = FuturesWaitAll>
where
    C: Container,
    C::Awaitable: Future,
    W: WaitAll,
{
    #[pin]
    state: JoinState<C::Association, W::Wait<C::Awaitable>>,
    shape: Shape,
    _container: PhantomData<fn() -> C>,
}

impl<C, W> JoinMatching<C, W>
where
    C: Container,
    C::Awaitable: Future,
    W: WaitAll,
{
    pub(crate) fn new(container: C, wait: &W) -> Self {
        let (state, shape) = match classify_for_join(&container) {
            Ok(shape) => {
                let (associations, awaitables) = extract(container);
                let state = JoinState::Waiting {
                    associations,
                    wait: wait.wait_all(awaitables),
                };
                (state, shape)
            }
            Err(err) => (JoinState::Rejected(Some(err)), Shape::Unsupported),
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

impl<C, W> Future for JoinMatching<C, W>
where
    C: Rebuild<OutputOf<C>>,
    C::Awaitable: Future,
    W: WaitAll,
{
    type Output = Result<<C as Rebuild<OutputOf<C>>>::Output, ResolveError<Infallible>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        let outcome = match this.state.as_mut().project() {
            JoinStateProj::Rejected(err) => Err(ResolveError::Shape(
                err.take().expect("JoinMatching polled after completion"),
            )),
            JoinStateProj::Waiting { associations, wait } => {
                let values = ready!(wait.poll(cx));
                rebuild::<C, _, _>(std::mem::take(associations), values)
            }
            JoinStateProj::Done => panic!("JoinMatching polled after completion"),
        };
        this.state.set(JoinState::Done);
        Poll::Ready(outcome)
    }
}

impl<C, W> fmt::Debug for JoinMatching<C, W>
where
    C: Container,
    C::Awaitable: Future,
    W: WaitAll,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            JoinState::Rejected(_) => "rejected",
            JoinState::Waiting { .. } => "waiting",
            JoinState::Done => "done",
        };
        f.debug_struct("JoinMatching")
            .field("shape", &self.shape)
            .field("state", &state)
            .finish_non_exhaustive()
    }
}
