//! Adapter from `Future<Output = Result<T, E>>` to `Future<Output = ResultOrErrors<T>>`.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::result_or_errors::ResultOrErrors;
use crate::types::ErrorValue;

pin_project! {
    /// Future that converts the inner `Result` into a [`ResultOrErrors`].
    ///
    /// `Ok(v)` becomes the value state and `Err(e)` becomes an error state
    /// holding `e.into()`. Created by
    /// [`FutureResultExt::into_result_or_errors`](super::FutureResultExt::into_result_or_errors).
    ///
    /// # Cancel Safety
    ///
    /// `ResultOrErrorsFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct ResultOrErrorsFuture<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> ResultOrErrorsFuture<Fut> {
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future }
    }
}

impl<Fut, T, E> Future for ResultOrErrorsFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<ErrorValue>,
{
    type Output = ResultOrErrors<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(ResultOrErrors::from)
    }
}

impl<Fut, T, E> FusedFuture for ResultOrErrorsFuture<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: Into<ErrorValue>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}
