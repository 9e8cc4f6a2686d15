//! Explicit entry points for building a [`ResultOrErrors`].
//!
//! These free functions mirror the constructors on [`ResultOrErrors`] for call
//! sites where naming the target type is awkward, such as closures passed to
//! iterator adapters. With the `async` feature each constructor also has an
//! `_async` form returning an already-completed future.
//!
//! # Examples
//!
//! ```
//! use error_or::factory;
//! use error_or::ErrorValue;
//!
//! let parsed: Vec<_> = ["1", "x", "3"]
//!     .iter()
//!     .map(|s| match s.parse::<i32>() {
//!         Ok(n) => factory::from_value(n),
//!         Err(_) => factory::from_error(ErrorValue::validation().with_code("NaN")),
//!     })
//!     .collect();
//!
//! assert_eq!(parsed.iter().filter(|r| r.is_error()).count(), 1);
//! ```

use crate::result_or_errors::ResultOrErrors;
use crate::types::ErrorValue;

#[cfg(feature = "async")]
use crate::async_ext::Completed;

/// Wraps a value.
#[inline]
pub fn from_value<T>(value: T) -> ResultOrErrors<T> {
    ResultOrErrors::from_value(value)
}

/// Wraps a single error.
#[inline]
pub fn from_error<T>(error: ErrorValue) -> ResultOrErrors<T> {
    ResultOrErrors::from_error(error)
}

/// Wraps a non-empty sequence of errors.
///
/// # Panics
///
/// Panics when `errors` is empty. See [`ResultOrErrors::from_errors`].
#[inline]
#[track_caller]
pub fn from_errors<T, I>(errors: I) -> ResultOrErrors<T>
where
    I: IntoIterator<Item = ErrorValue>,
{
    ResultOrErrors::from_errors(errors)
}

/// [`from_value`] wrapped in a completed future.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use error_or::factory;
///
/// let result = factory::from_value_async(5).await;
/// assert_eq!(*result.value(), 5);
/// # }
/// ```
#[cfg(feature = "async")]
#[inline]
pub fn from_value_async<T>(value: T) -> Completed<ResultOrErrors<T>> {
    Completed::new(from_value(value))
}

/// [`from_error`] wrapped in a completed future.
#[cfg(feature = "async")]
#[inline]
pub fn from_error_async<T>(error: ErrorValue) -> Completed<ResultOrErrors<T>> {
    Completed::new(from_error(error))
}

/// [`from_errors`] wrapped in a completed future.
///
/// The errors are validated before the future is created, so an empty input
/// panics here rather than when the future is awaited.
#[cfg(feature = "async")]
#[inline]
#[track_caller]
pub fn from_errors_async<T, I>(errors: I) -> Completed<ResultOrErrors<T>>
where
    I: IntoIterator<Item = ErrorValue>,
{
    Completed::new(from_errors(errors))
}
