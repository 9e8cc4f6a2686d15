//! Extension trait for `Future<Output = Result<T, E>>`.

use core::future::Future;

use crate::types::ErrorValue;

use super::result_future::ResultOrErrorsFuture;

/// Converts `Result`-returning futures into [`ResultOrErrors`](crate::ResultOrErrors)-returning ones.
///
/// # Examples
///
/// ```rust
/// use error_or::prelude_async::*;
///
/// async fn load(id: u64) -> Result<String, ErrorValue> {
///     if id == 0 {
///         Err(ErrorValue::not_found().with_code("User.NotFound"))
///     } else {
///         Ok(format!("user-{}", id))
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let found = load(7).into_result_or_errors().await;
/// assert_eq!(found.value(), "user-7");
///
/// let missing = load(0).into_result_or_errors().await;
/// assert_eq!(missing.first_error().code(), "User.NotFound");
/// # }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Resolves to a [`ResultOrErrors`](crate::ResultOrErrors) instead of a `Result`.
    fn into_result_or_errors(self) -> ResultOrErrorsFuture<Self>
    where
        E: Into<ErrorValue>;
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn into_result_or_errors(self) -> ResultOrErrorsFuture<Self>
    where
        E: Into<ErrorValue>,
    {
        ResultOrErrorsFuture::new(self)
    }
}
