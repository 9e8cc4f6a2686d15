//! Construction from literal error lists.
//!
//! The [`errors!`](crate::errors) macro is the usual way in; the functions here
//! take a borrowed slice so the same validated path is reachable when the
//! caller wants one of the view traits rather than the concrete type.
//!
//! # Examples
//!
//! ```
//! use error_or::{errors, literal, ErrorValue, ResultOrErrors, ResultLike};
//!
//! let concrete: ResultOrErrors<u32> = errors![ErrorValue::forbidden(), ErrorValue::unauthorized()];
//! assert_eq!(concrete.errors().len(), 2);
//!
//! let erased = literal::create_untyped(&[ErrorValue::unexpected()]);
//! assert!(erased.is_error());
//! ```

use crate::result_or_errors::ResultOrErrors;
use crate::traits::{ResultLike, TypedResultLike};
use crate::types::alloc_type::Box;
use crate::types::ErrorValue;

/// Builds an error state from a slice of errors.
///
/// # Panics
///
/// Panics when `errors` is empty.
#[inline]
#[track_caller]
pub fn create<T>(errors: &[ErrorValue]) -> ResultOrErrors<T> {
    ResultOrErrors::from_errors(errors.iter().cloned())
}

/// Like [`create`], returned behind the typed view.
#[inline]
#[track_caller]
pub fn create_typed<T: 'static>(errors: &[ErrorValue]) -> Box<dyn TypedResultLike<Value = T>> {
    Box::new(create::<T>(errors))
}

/// Like [`create`], returned behind the payload-agnostic view.
#[inline]
#[track_caller]
pub fn create_untyped(errors: &[ErrorValue]) -> Box<dyn ResultLike> {
    Box::new(create::<()>(errors))
}
