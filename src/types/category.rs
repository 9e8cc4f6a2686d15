use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of an [`ErrorValue`](crate::ErrorValue).
///
/// The seven built-in categories cover the common cases; anything else is a
/// [`Custom`](ErrorCategory::Custom) category identified by an integer.
///
/// Every category has a numeric encoding (see [`as_numeric`](Self::as_numeric)).
/// Decoding with [`from_numeric`](Self::from_numeric) maps `0..=6` back onto the
/// built-ins, so `Custom(2)` and `Validation` share one encoding and
/// `from_numeric(2)` always yields `Validation`.
///
/// # Examples
///
/// ```
/// use error_or::ErrorCategory;
///
/// assert_eq!(ErrorCategory::NotFound.as_numeric(), 4);
/// assert_eq!(ErrorCategory::from_numeric(4), ErrorCategory::NotFound);
/// assert_eq!(ErrorCategory::from_numeric(42), ErrorCategory::Custom(42));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorCategory {
    Failure,
    Unexpected,
    Validation,
    Conflict,
    NotFound,
    Unauthorized,
    Forbidden,
    Custom(i32),
}

impl ErrorCategory {
    /// All built-in categories, in numeric order.
    pub const BUILT_IN: [ErrorCategory; 7] = [
        Self::Failure,
        Self::Unexpected,
        Self::Validation,
        Self::Conflict,
        Self::NotFound,
        Self::Unauthorized,
        Self::Forbidden,
    ];

    /// Returns the integer encoding of this category.
    #[must_use]
    #[inline]
    pub const fn as_numeric(self) -> i32 {
        match self {
            Self::Failure => 0,
            Self::Unexpected => 1,
            Self::Validation => 2,
            Self::Conflict => 3,
            Self::NotFound => 4,
            Self::Unauthorized => 5,
            Self::Forbidden => 6,
            Self::Custom(value) => value,
        }
    }

    /// Decodes an integer into a category.
    #[must_use]
    #[inline]
    pub const fn from_numeric(value: i32) -> Self {
        match value {
            0 => Self::Failure,
            1 => Self::Unexpected,
            2 => Self::Validation,
            3 => Self::Conflict,
            4 => Self::NotFound,
            5 => Self::Unauthorized,
            6 => Self::Forbidden,
            other => Self::Custom(other),
        }
    }

    /// Returns `true` for categories outside the built-in set.
    #[must_use]
    #[inline]
    pub const fn is_custom(self) -> bool {
        matches!(Self::from_numeric(self.as_numeric()), Self::Custom(_))
    }

    /// Default `(code, description)` pair used by the per-category factories.
    ///
    /// Custom categories have no default.
    #[must_use]
    pub const fn defaults(self) -> Option<(&'static str, &'static str)> {
        match Self::from_numeric(self.as_numeric()) {
            Self::Failure => Some(("General.Failure", "A failure has occurred.")),
            Self::Unexpected => Some(("General.Unexpected", "An unexpected error has occurred.")),
            Self::Validation => Some(("General.Validation", "A validation error has occurred.")),
            Self::Conflict => Some(("General.Conflict", "A conflict error has occurred.")),
            Self::NotFound => Some(("General.NotFound", "A 'Not Found' error has occurred.")),
            Self::Unauthorized => Some((
                "General.Unauthorized",
                "An 'Unauthorized' error has occurred.",
            )),
            Self::Forbidden => Some(("General.Forbidden", "A 'Forbidden' error has occurred.")),
            Self::Custom(_) => None,
        }
    }
}

impl From<i32> for ErrorCategory {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_numeric(value)
    }
}

impl From<ErrorCategory> for i32 {
    #[inline]
    fn from(category: ErrorCategory) -> Self {
        category.as_numeric()
    }
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::from_numeric(self.as_numeric()) {
            Self::Failure => f.write_str("Failure"),
            Self::Unexpected => f.write_str("Unexpected"),
            Self::Validation => f.write_str("Validation"),
            Self::Conflict => f.write_str("Conflict"),
            Self::NotFound => f.write_str("NotFound"),
            Self::Unauthorized => f.write_str("Unauthorized"),
            Self::Forbidden => f.write_str("Forbidden"),
            Self::Custom(value) => write!(f, "Custom({})", value),
        }
    }
}
