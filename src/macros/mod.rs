//! Literal construction of error states.
//!
//! - [`macro@crate::errors`] - builds a [`ResultOrErrors`](crate::ResultOrErrors)
//!   error state from a bracketed list of [`ErrorValue`](crate::ErrorValue)s.
//!
//! # Examples
//!
//! ```
//! use error_or::{errors, ErrorValue, ResultOrErrors};
//!
//! fn register(name: &str) -> ResultOrErrors<u64> {
//!     if name.is_empty() {
//!         return errors![
//!             ErrorValue::validation().with_code("Name.Empty"),
//!             ErrorValue::validation().with_code("Name.TooShort"),
//!         ];
//!     }
//!     ResultOrErrors::from_value(1)
//! }
//!
//! assert_eq!(register("").errors().len(), 2);
//! ```

/// Builds an error state from a literal list of errors.
///
/// The list goes through [`ResultOrErrors::from_errors`](crate::ResultOrErrors::from_errors),
/// so order and duplicates are kept and an empty list panics at the call site.
///
/// # Examples
///
/// ```
/// use error_or::{errors, ErrorValue, ResultOrErrors};
///
/// let e = ErrorValue::conflict();
/// let r: ResultOrErrors<()> = errors![e.clone(), ErrorValue::not_found(), e.clone()];
///
/// assert_eq!(r.first_error(), &e);
/// assert_eq!(r.errors()[2], e);
/// ```
///
/// ```should_panic
/// use error_or::{errors, ResultOrErrors};
///
/// let _empty: ResultOrErrors<()> = errors![];
/// ```
#[macro_export]
macro_rules! errors {
    ($($error:expr),* $(,)?) => {
        $crate::ResultOrErrors::from_errors(
            $crate::types::alloc_type::Vec::<$crate::ErrorValue>::from([$($error),*])
        )
    };
}
