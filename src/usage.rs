//! Precondition violations by calling code.
//!
//! A [`UsageError`] is never a domain error: it means the caller built a
//! [`ResultOrErrors`](crate::ResultOrErrors) from invalid input or read the
//! wrong side of one. The panicking API reports it immediately; the `try_*`
//! constructors hand it back for callers validating untrusted input.
use core::fmt::{self, Display};

/// Ways a caller can misuse a [`ResultOrErrors`](crate::ResultOrErrors).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UsageError {
    /// An error state was requested from an empty error sequence.
    EmptyErrors,
    /// A value state was requested from an absent value.
    AbsentValue,
    /// `value` was read from an error state.
    ValueOfErrors,
    /// `errors` was read from a value state.
    ErrorsOfValue,
    /// `first_error` was read from a value state.
    FirstErrorOfValue,
}

impl UsageError {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyErrors => {
                "cannot create a ResultOrErrors from an empty collection of errors; provide at least one error"
            },
            Self::AbsentValue => "cannot create a ResultOrErrors value state from an absent value",
            Self::ValueOfErrors => {
                "value accessed on a ResultOrErrors in the error state; check is_error first"
            },
            Self::ErrorsOfValue => {
                "errors accessed on a ResultOrErrors in the value state; check is_error first or use errors_or_empty"
            },
            Self::FirstErrorOfValue => {
                "first_error accessed on a ResultOrErrors in the value state; check is_error first"
            },
        }
    }
}

impl Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for UsageError {}

/// Reports a usage error and panics.
///
/// With the `tracing` feature an `error` event is emitted first so the misuse
/// shows up in structured logs even when the panic is caught upstream.
#[cold]
#[track_caller]
pub(crate) fn fail(error: UsageError) -> ! {
    #[cfg(feature = "tracing")]
    {
        let location = core::panic::Location::caller();
        tracing::error!(
            usage_error = ?error,
            file = location.file(),
            line = location.line(),
            "{}",
            error.message()
        );
    }
    panic!("{}", error)
}
