use core::any::Any;

use crate::result_or_errors::{ErrorsIter, ResultOrErrors};
use crate::types::ErrorValue;

/// Read-only, payload-agnostic view of a result.
///
/// `ResultLike` is object safe, so results with different payload types can be
/// stored side by side as `Box<dyn ResultLike>` or `&dyn ResultLike`.
///
/// # Examples
///
/// ```
/// use error_or::{ErrorValue, ResultLike, ResultOrErrors};
///
/// let results: Vec<Box<dyn ResultLike>> = vec![
///     Box::new(ResultOrErrors::from_value(42_u32)),
///     Box::new(ResultOrErrors::<String>::from_error(ErrorValue::not_found())),
///     Box::new(ResultOrErrors::<bool>::from_errors([ErrorValue::conflict(), ErrorValue::forbidden()])),
/// ];
///
/// let failures: usize = results.iter().map(|r| r.iter_errors().count()).sum();
/// assert_eq!(failures, 3);
///
/// let first = results[0].value_any().and_then(|v| v.downcast_ref::<u32>());
/// assert_eq!(first, Some(&42));
/// ```
pub trait ResultLike {
    /// Returns `true` in the error state.
    fn is_error(&self) -> bool;

    /// Type-erased payload, or `None` in the error state.
    fn value_any(&self) -> Option<&dyn Any>;

    /// The errors in construction order.
    ///
    /// # Panics
    ///
    /// Panics in the value state, like [`ResultOrErrors::errors`].
    fn errors(&self) -> &[ErrorValue];

    /// The errors, or an empty slice in the value state.
    fn errors_or_empty(&self) -> &[ErrorValue];

    /// Lazy iterator over the errors; empty in the value state.
    fn iter_errors(&self) -> ErrorsIter<'_> {
        self.errors_or_empty().iter()
    }
}

/// Read-only view of a result whose payload type is known.
pub trait TypedResultLike: ResultLike {
    type Value;

    /// The payload.
    ///
    /// # Panics
    ///
    /// Panics in the error state, like [`ResultOrErrors::value`].
    fn value(&self) -> &Self::Value;
}

impl<T: 'static> ResultLike for ResultOrErrors<T> {
    #[inline]
    fn is_error(&self) -> bool {
        ResultOrErrors::is_error(self)
    }

    #[inline]
    fn value_any(&self) -> Option<&dyn Any> {
        self.as_value().map(|value| value as &dyn Any)
    }

    #[inline]
    #[track_caller]
    fn errors(&self) -> &[ErrorValue] {
        ResultOrErrors::errors(self)
    }

    #[inline]
    fn errors_or_empty(&self) -> &[ErrorValue] {
        ResultOrErrors::errors_or_empty(self)
    }
}

impl<T: 'static> TypedResultLike for ResultOrErrors<T> {
    type Value = T;

    #[inline]
    #[track_caller]
    fn value(&self) -> &T {
        ResultOrErrors::value(self)
    }
}
