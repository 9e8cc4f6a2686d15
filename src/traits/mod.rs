//! Read-only view traits over [`ResultOrErrors`](crate::ResultOrErrors).
//!
//! - [`ResultLike`]: payload-agnostic and object safe, for mixing results of
//!   different payload types in one collection
//! - [`TypedResultLike`]: adds typed access to the payload
//!
//! # Examples
//!
//! ```
//! use error_or::traits::{ResultLike, TypedResultLike};
//! use error_or::ResultOrErrors;
//!
//! fn describe<R: TypedResultLike<Value = i32>>(result: &R) -> i32 {
//!     if result.is_error() { -1 } else { *result.value() }
//! }
//!
//! assert_eq!(describe(&ResultOrErrors::from_value(7)), 7);
//! ```

pub mod result_like;

pub use result_like::{ResultLike, TypedResultLike};
