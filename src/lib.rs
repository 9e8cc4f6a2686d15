//! A result container holding either a value or one or more structured errors.
//!
//! [`ResultOrErrors<T>`] replaces exception-style failure signalling with a
//! plain value: it is always exactly one of a payload `T` or a non-empty,
//! ordered list of [`ErrorValue`]s. Errors are data to branch on; misusing the
//! container (building it from an empty error list, reading the value of an
//! error state) is a caller bug and panics with a [`UsageError`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_or::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Value or Errors
//!
//! ```
//! use error_or::{ErrorValue, ResultOrErrors};
//!
//! fn divide(a: i32, b: i32) -> ResultOrErrors<i32> {
//!     if b == 0 {
//!         return ErrorValue::validation()
//!             .with_code("Math.DivideByZero")
//!             .with_description("divisor must not be zero")
//!             .into();
//!     }
//!     ResultOrErrors::from_value(a / b)
//! }
//!
//! let ok = divide(10, 2);
//! assert!(!ok.is_error());
//! assert_eq!(*ok.value(), 5);
//!
//! let failed = divide(1, 0);
//! assert!(failed.is_error());
//! assert_eq!(failed.first_error().code(), "Math.DivideByZero");
//! ```
//!
//! ## Literal Error Lists
//!
//! ```
//! use error_or::{errors, ErrorValue, ResultOrErrors};
//!
//! let r: ResultOrErrors<String> = errors![
//!     ErrorValue::validation().with_code("Name.Empty"),
//!     ErrorValue::validation().with_code("Email.Invalid"),
//! ];
//! assert_eq!(r.errors().len(), 2);
//! ```
//!
//! ## Heterogeneous Results
//!
//! ```
//! use error_or::{ErrorValue, ResultLike, ResultOrErrors};
//!
//! let checks: [&dyn ResultLike; 2] = [
//!     &ResultOrErrors::from_value(1_u8),
//!     &ResultOrErrors::<String>::from_error(ErrorValue::forbidden()),
//! ];
//! let all_errors: Vec<_> = checks.iter().flat_map(|r| r.iter_errors()).collect();
//! assert_eq!(all_errors.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Explicit constructor functions
pub mod factory;
/// Literal error-list construction
pub mod literal;
/// The `errors!` macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The result container and its error list
pub mod result_or_errors;
/// Read-only view traits
pub mod traits;
/// ErrorValue, categories and metadata
pub mod types;
/// Caller misuse reporting
pub mod usage;

/// Async helpers (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use result_or_errors::{Errors, ErrorsIter, IntoIter, Iter, ResultOrErrors};
pub use traits::{ResultLike, TypedResultLike};
pub use types::{ErrorCategory, ErrorValue, ErrorVec, Metadata, MetadataValue};
pub use usage::UsageError;
