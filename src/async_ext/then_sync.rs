//! The single future adapter behind every async combinator.
//!
//! Async variants in this crate are thin wrappers: await the inner future,
//! then apply the identical synchronous transform. [`ThenSync`] is that
//! wrapper; the extension traits merely pick the transform.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

pin_project! {
    /// Awaits the inner future, then applies a synchronous transform to its
    /// output.
    ///
    /// Introduces no cancellation or ordering semantics of its own: the
    /// transform runs exactly once, on the polling task, at the moment the
    /// inner future completes.
    ///
    /// # Cancel Safety
    ///
    /// `ThenSync` is cancel-safe if the inner future is cancel-safe; the
    /// transform only runs when `poll` returns `Poll::Ready`.
    #[must_use = "futures do nothing unless polled"]
    pub struct ThenSync<Fut, F> {
        #[pin]
        future: Fut,
        transform: Option<F>,
    }
}

impl<Fut, F> ThenSync<Fut, F> {
    /// Creates a new `ThenSync` from a future and a transform.
    #[inline]
    pub fn new(future: Fut, transform: F) -> Self {
        Self { future, transform: Some(transform) }
    }
}

impl<Fut, F, R> Future for ThenSync<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> R,
{
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|output| {
            let transform = this
                .transform
                .take()
                .expect("ThenSync polled after completion; this is a bug");
            transform(output)
        })
    }
}

impl<Fut, F, R> FusedFuture for ThenSync<Fut, F>
where
    Fut: FusedFuture,
    F: FnOnce(Fut::Output) -> R,
{
    fn is_terminated(&self) -> bool {
        // The transform is taken exactly once, on completion.
        self.transform.is_none() || self.future.is_terminated()
    }
}
