//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus:
//!
//! - **Traits**: [`FutureResultExt`](crate::async_ext::FutureResultExt)
//! - **Types**: [`Completed`](crate::async_ext::Completed), [`ResultOrErrorsFuture`](crate::async_ext::ResultOrErrorsFuture)
//! - **Functions**: `from_value_async`, `from_error_async`, `from_errors_async`

pub use crate::prelude::*;

pub use crate::async_ext::{Completed, FutureResultExt, ResultOrErrorsFuture};
pub use crate::factory::{from_error_async, from_errors_async, from_value_async};
