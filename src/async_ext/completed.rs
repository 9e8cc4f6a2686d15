//! Already-resolved futures.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

pin_project! {
    /// A future that is ready on its first poll.
    ///
    /// Returned by the `_async` constructors in [`factory`](crate::factory). It
    /// never suspends, performs no I/O and needs no particular runtime; it only
    /// lets code already inside an async pipeline stay there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// use error_or::async_ext::Completed;
    ///
    /// assert_eq!(Completed::new(3).await, 3);
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    #[derive(Debug, Clone)]
    pub struct Completed<T> {
        value: Option<T>,
    }
}

impl<T> Completed<T> {
    /// Creates a future resolving to `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }
}

impl<T> Future for Completed<T> {
    type Output = T;

    #[inline]
    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<T> {
        let this = self.project();
        Poll::Ready(
            this.value
                .take()
                .expect("Completed polled after completion; this is a bug"),
        )
    }
}

impl<T> FusedFuture for Completed<T> {
    fn is_terminated(&self) -> bool {
        self.value.is_none()
    }
}
