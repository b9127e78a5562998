//! Shared fixtures for integration tests.

#![allow(dead_code)]

use futures_util::future::{FutureExt, JoinAll, Map, TryFuture, TryJoinAll};
use shapejoin::{FuturesWaitAll, WaitAll};
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::task::{Context, Poll};

pub type BoxedTry<T> = Pin<Box<dyn Future<Output = Result<T, &'static str>> + Send>>;

/// Pending for `remaining` polls, then ready with `output`.
#[derive(Debug)]
pub struct Delayed<T> {
    remaining: usize,
    output: Option<T>,
}

impl<T> Delayed<T> {
    pub fn new(remaining: usize, output: T) -> Self {
        Self {
            remaining,
            output: Some(output),
        }
    }
}

impl<T: Unpin> Future for Delayed<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        if self.remaining == 0 {
            return Poll::Ready(self.output.take().expect("Delayed polled after completion"));
        }
        self.remaining -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// An awaitable identified by `id`, so it can live in a set.
#[derive(Debug)]
pub struct Keyed {
    pub id: u32,
    outcome: Option<Result<u32, &'static str>>,
}

impl Keyed {
    pub fn ok(id: u32, value: u32) -> Self {
        Self {
            id,
            outcome: Some(Ok(value)),
        }
    }

    pub fn err(id: u32, reason: &'static str) -> Self {
        Self {
            id,
            outcome: Some(Err(reason)),
        }
    }
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Keyed {}

impl Hash for Keyed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl Future for Keyed {
    type Output = Result<u32, &'static str>;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Ready(self.outcome.take().expect("Keyed polled after completion"))
    }
}

/// Never completes; raises its flag when dropped.
#[derive(Debug)]
pub struct Abandoned {
    dropped: Arc<AtomicBool>,
}

impl Abandoned {
    pub fn tracked() -> (Self, Arc<AtomicBool>) {
        let dropped = Arc::new(AtomicBool::new(false));
        (
            Self {
                dropped: Arc::clone(&dropped),
            },
            dropped,
        )
    }
}

impl Future for Abandoned {
    type Output = Result<u32, &'static str>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Pending
    }
}

impl Drop for Abandoned {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}

/// Delegates to [`FuturesWaitAll`] and counts invocations.
#[derive(Debug, Clone, Default)]
pub struct RecordingWait {
    calls: Arc<AtomicUsize>,
}

impl RecordingWait {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WaitAll for RecordingWait {
    type Wait<F: Future> = JoinAll<F>;
    type TryWait<F: TryFuture> = TryJoinAll<F>;

    fn wait_all<F: Future>(&self, awaitables: Vec<F>) -> Self::Wait<F> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        FuturesWaitAll.wait_all(awaitables)
    }

    fn try_wait_all<F: TryFuture>(&self, awaitables: Vec<F>) -> Self::TryWait<F> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        FuturesWaitAll.try_wait_all(awaitables)
    }
}

fn drop_last<T>(mut values: Vec<T>) -> Vec<T> {
    values.pop();
    values
}

fn drop_last_ok<T, E>(result: Result<Vec<T>, E>) -> Result<Vec<T>, E> {
    result.map(drop_last)
}

type Truncate<T> = fn(Vec<T>) -> Vec<T>;
type TruncateOk<T, E> = fn(Result<Vec<T>, E>) -> Result<Vec<T>, E>;

/// A faulty primitive that loses the last value of every batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct LossyWait;

impl WaitAll for LossyWait {
    type Wait<F: Future> = Map<JoinAll<F>, Truncate<F::Output>>;
    type TryWait<F: TryFuture> = Map<TryJoinAll<F>, TruncateOk<F::Ok, F::Error>>;

    fn wait_all<F: Future>(&self, awaitables: Vec<F>) -> Self::Wait<F> {
        FuturesWaitAll
            .wait_all(awaitables)
            .map(drop_last as Truncate<F::Output>)
    }

    fn try_wait_all<F: TryFuture>(&self, awaitables: Vec<F>) -> Self::TryWait<F> {
        FuturesWaitAll
            .try_wait_all(awaitables)
            .map(drop_last_ok as TruncateOk<F::Ok, F::Error>)
    }
}
