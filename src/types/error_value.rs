use core::fmt::{self, Display};

use crate::types::alloc_type::String;
use crate::types::{ErrorCategory, Metadata};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable description of a single failure.
///
/// An `ErrorValue` is created through one of the category factories
/// ([`failure`](Self::failure), [`not_found`](Self::not_found), ...) or through
/// [`custom`](Self::custom), and refined with the consuming `with_*` builders.
/// Each builder returns a new value; nothing exposes a `&mut` path into an
/// existing error.
///
/// # Equality
///
/// Two errors are equal when their category, code, description and metadata
/// are equal. Metadata compares by content regardless of the order entries
/// were supplied in. Absent metadata and present-but-empty metadata are **not**
/// equal. `Hash` agrees with `Eq`.
///
/// # Examples
///
/// ```
/// use error_or::{ErrorCategory, ErrorValue};
///
/// let err = ErrorValue::not_found()
///     .with_code("User.NotFound")
///     .with_description("no user with that id");
///
/// assert_eq!(err.category(), ErrorCategory::NotFound);
/// assert_eq!(err.code(), "User.NotFound");
/// assert!(err.metadata().is_none());
///
/// let defaults = ErrorValue::failure();
/// assert_eq!(defaults.code(), "General.Failure");
/// assert_eq!(defaults.description(), "A failure has occurred.");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ErrorValue {
    numeric_category: i32,
    code: String,
    description: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    metadata: Option<Metadata>,
}

macro_rules! category_factories {
    ($($(#[$attr:meta])* $name:ident => $category:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name() -> Self {
                Self::with_defaults(ErrorCategory::$category)
            }
        )*
    };
}

impl ErrorValue {
    /// Creates an error of the given category.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{ErrorCategory, ErrorValue};
    ///
    /// let err = ErrorValue::new(ErrorCategory::Conflict, "Order.Duplicate", "order already placed");
    /// assert_eq!(err.numeric_category(), 3);
    /// ```
    #[inline]
    pub fn new<C, D>(category: ErrorCategory, code: C, description: D) -> Self
    where
        C: Into<String>,
        D: Into<String>,
    {
        Self {
            numeric_category: category.as_numeric(),
            code: code.into(),
            description: description.into(),
            metadata: None,
        }
    }

    /// Creates an error with an arbitrary numeric category.
    ///
    /// Values `0..=6` decode to the matching built-in category; every other
    /// integer becomes [`ErrorCategory::Custom`].
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{ErrorCategory, ErrorValue};
    ///
    /// let err = ErrorValue::custom(1001, "Payment.Declined", "card was declined")
    ///     .with_metadata([("attempt", 3)]);
    ///
    /// assert_eq!(err.category(), ErrorCategory::Custom(1001));
    /// assert_eq!(err.numeric_category(), 1001);
    /// ```
    #[inline]
    pub fn custom<C, D>(numeric_category: i32, code: C, description: D) -> Self
    where
        C: Into<String>,
        D: Into<String>,
    {
        Self::new(ErrorCategory::from_numeric(numeric_category), code, description)
    }

    fn with_defaults(category: ErrorCategory) -> Self {
        let (code, description) = category.defaults().unwrap_or(("", ""));
        Self::new(category, code, description)
    }

    category_factories! {
        /// `Failure` error with code `General.Failure`.
        failure => Failure,
        /// `Unexpected` error with code `General.Unexpected`.
        unexpected => Unexpected,
        /// `Validation` error with code `General.Validation`.
        validation => Validation,
        /// `Conflict` error with code `General.Conflict`.
        conflict => Conflict,
        /// `NotFound` error with code `General.NotFound`.
        not_found => NotFound,
        /// `Unauthorized` error with code `General.Unauthorized`.
        unauthorized => Unauthorized,
        /// `Forbidden` error with code `General.Forbidden`.
        forbidden => Forbidden,
    }

    /// Replaces the code.
    #[inline]
    pub fn with_code<C: Into<String>>(mut self, code: C) -> Self {
        self.code = code.into();
        self
    }

    /// Replaces the description.
    #[inline]
    pub fn with_description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = description.into();
        self
    }

    /// Attaches metadata, snapshotting the supplied entries.
    ///
    /// Passing an empty iterator attaches *empty* metadata, which is distinct
    /// from having none.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorValue;
    ///
    /// let mut source = std::collections::HashMap::new();
    /// source.insert("field", "email");
    ///
    /// let err = ErrorValue::validation().with_metadata(source.clone());
    /// source.insert("field", "name");
    ///
    /// assert_eq!(err.metadata().unwrap().get("field").unwrap().to_string(), "email");
    /// ```
    pub fn with_metadata<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<crate::types::MetadataValue>,
    {
        self.metadata = Some(entries.into_iter().collect());
        self
    }

    /// Attaches an already-built [`Metadata`] map.
    #[inline]
    pub fn with_metadata_map(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_numeric(self.numeric_category)
    }

    #[must_use]
    #[inline]
    pub fn numeric_category(&self) -> i32 {
        self.numeric_category
    }

    #[must_use]
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Read-only view of the metadata, or `None` when none was attached.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

impl Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl core::error::Error for ErrorValue {}
