//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_or::prelude::*;
//!
//! fn find(id: u32) -> ResultOrErrors<&'static str> {
//!     match id {
//!         1 => ResultOrErrors::from_value("alice"),
//!         _ => ErrorValue::not_found().into(),
//!     }
//! }
//!
//! assert!(find(2).is_error());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errors!`]
//! - **Types**: [`ResultOrErrors`], [`Errors`], [`ErrorValue`], [`ErrorCategory`], [`Metadata`], [`MetadataValue`], [`UsageError`]
//! - **Traits**: [`ResultLike`], [`TypedResultLike`]
//! - **Functions**: [`from_value`], [`from_error`], [`from_errors`]

pub use crate::errors;

pub use crate::factory::{from_error, from_errors, from_value};
pub use crate::result_or_errors::{Errors, ResultOrErrors};
pub use crate::traits::{ResultLike, TypedResultLike};
pub use crate::types::{ErrorCategory, ErrorValue, Metadata, MetadataValue};
pub use crate::usage::UsageError;
