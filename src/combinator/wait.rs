//! The wait-all primitive seam.
//!
//! The shape-preserving combinators never wait on awaitables themselves; they
//! hand the ordered awaitables to a [`WaitAll`] implementation and only zip
//! its results back. [`FuturesWaitAll`] delegates to `futures-util`'s
//! `join_all` and `try_join_all`.
//!
//! # Contract
//!
//! - Output values are in submission order, whatever the completion order.
//! - `try_wait_all` resolves to the first error observed and drops the
//!   remaining awaitables.

use futures_util::future::{self, JoinAll, TryFuture, TryJoinAll};
use std::future::Future;

/// Waits for an ordered batch of awaitables.
pub trait WaitAll {
    /// Future returned by [`wait_all`](Self::wait_all).
    type Wait<F: Future>: Future<Output = Vec<F::Output>>;
    /// Future returned by [`try_wait_all`](Self::try_wait_all).
    type TryWait<F: TryFuture>: Future<Output = Result<Vec<F::Ok>, F::Error>>;

    /// Waits for every awaitable and returns their outputs positionally.
    fn wait_all<F: Future>(&self, awaitables: Vec<F>) -> Self::Wait<F>;

    /// Waits for every awaitable to succeed, or for the first failure.
    fn try_wait_all<F: TryFuture>(&self, awaitables: Vec<F>) -> Self::TryWait<F>;
}

impl<W: WaitAll + ?Sized> WaitAll for &W {
    type Wait<F: Future> = W::Wait<F>;
    type TryWait<F: TryFuture> = W::TryWait<F>;

    fn wait_all<F: Future>(&self, awaitables: Vec<F>) -> Self::Wait<F> {
        (**self).wait_all(awaitables)
    }

    fn try_wait_all<F: TryFuture>(&self, awaitables: Vec<F>) -> Self::TryWait<F> {
        (**self).try_wait_all(awaitables)
    }
}

/// [`WaitAll`] backed by `futures_util::future::{join_all, try_join_all}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuturesWaitAll;

impl WaitAll for FuturesWaitAll {
    type Wait<F: Future> = JoinAll<F>;
    type TryWait<F: TryFuture> = TryJoinAll<F>;

    fn wait_all<F: Future>(&self, awaitables: Vec<F>) -> JoinAll<F> {
        future::join_all(awaitables)
    }

    fn try_wait_all<F: TryFuture>(&self, awaitables: Vec<F>) -> TryJoinAll<F> {
        future::try_join_all(awaitables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct NoopWaker;

    impl Wake for NoopWaker {
        fn wake(self: Arc<Self>) {}
    }

    fn noop_waker() -> Waker {
        Waker::from(Arc::new(NoopWaker))
    }

    #[test]
    fn wait_all_is_positional() {
        let mut fut = Box::pin(FuturesWaitAll.wait_all(vec![
            future::ready(3),
            future::ready(1),
            future::ready(2),
        ]));
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(values) => assert_eq!(values, vec![3, 1, 2]),
            Poll::Pending => panic!("expected Ready"),
        }
    }

    #[test]
    fn try_wait_all_fails_fast() {
        let pending: Pin<Box<dyn Future<Output = Result<u8, &str>>>> =
            Box::pin(future::pending());
        let failing: Pin<Box<dyn Future<Output = Result<u8, &str>>>> =
            Box::pin(future::ready(Err("boom")));
        let by_ref = &FuturesWaitAll;
        let mut fut = Box::pin(WaitAll::try_wait_all(&by_ref, vec![pending, failing]));
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(result) => assert_eq!(result, Err("boom")),
            Poll::Pending => panic!("expected Ready"),
        }
    }
}
