//! Error value types.
//!
//! This module provides [`ErrorValue`], the immutable record carried in the
//! error state of a [`ResultOrErrors`](crate::ResultOrErrors), together with its
//! [`ErrorCategory`] and [`Metadata`].
//!
//! # Examples
//!
//! ```
//! use error_or::{ErrorCategory, ErrorValue};
//!
//! let err = ErrorValue::validation()
//!     .with_code("User.Email")
//!     .with_description("email is malformed")
//!     .with_metadata([("field", "email")]);
//!
//! assert_eq!(err.category(), ErrorCategory::Validation);
//! assert_eq!(err.to_string(), "User.Email: email is malformed");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod category;
pub mod error_value;
pub mod metadata;

pub use category::*;
pub use error_value::*;
pub use metadata::*;

/// SmallVec-backed collection used for error sequences.
///
/// Uses inline storage for one element, which covers the common case of a
/// result failing with a single error.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
