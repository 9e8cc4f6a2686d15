//! Async helpers for [`ResultOrErrors`](crate::ResultOrErrors).
//!
//! Nothing here drives a runtime: [`Completed`] is ready on first poll and
//! [`ResultOrErrorsFuture`] only converts the output of the future it wraps.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-or = { version = "0.1", features = ["async"] }
//! ```

mod completed;
mod future_ext;
mod result_future;

pub use completed::Completed;
pub use future_ext::FutureResultExt;
pub use result_future::ResultOrErrorsFuture;
