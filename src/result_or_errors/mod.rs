//! The [`ResultOrErrors`] container and its non-empty [`Errors`] list.
//!
//! # Key Components
//!
//! - [`ResultOrErrors`] - either a value or one or more errors
//! - [`Errors`] - the non-empty, ordered error list of the error state
//! - Iterator adapters over the value and the errors
//!
//! # Examples
//!
//! ```
//! use error_or::{ErrorValue, ResultOrErrors};
//!
//! let ok = ResultOrErrors::from_value(42);
//! assert!(!ok.is_error());
//!
//! let failed = ResultOrErrors::<i32>::from_errors([ErrorValue::validation(), ErrorValue::conflict()]);
//! assert_eq!(failed.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod errors;
pub mod iter;

pub use self::core::*;
pub use self::errors::*;
pub use self::iter::*;
