use crate::result_or_errors::Errors;
use crate::types::alloc_type::Vec;
use crate::types::{ErrorValue, ErrorVec};
use crate::usage::{self, UsageError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either a value or a non-empty list of errors.
///
/// `ResultOrErrors<T>` is exactly one of:
///
/// * `Value(T)` - the operation produced a payload
/// * `Errors(Errors)` - the operation failed for one or more reasons
///
/// The error list can only be built through a validating constructor, so an
/// error state with no errors cannot exist. There is deliberately no
/// `Default` implementation.
///
/// Reading the wrong side ([`value`](Self::value) on an error state,
/// [`errors`](Self::errors) or [`first_error`](Self::first_error) on a value
/// state) is a caller bug and panics. Use [`is_error`](Self::is_error), a
/// `match`, or the `Option`-returning accessors to branch first.
///
/// # Examples
///
/// ```
/// use error_or::{ErrorValue, ResultOrErrors};
///
/// fn parse_age(input: &str) -> ResultOrErrors<u8> {
///     match input.parse() {
///         Ok(age) => ResultOrErrors::from_value(age),
///         Err(_) => ErrorValue::validation()
///             .with_code("Age.Invalid")
///             .with_description("age must be a number between 0 and 255")
///             .into(),
///     }
/// }
///
/// let ok = parse_age("42");
/// assert!(!ok.is_error());
/// assert_eq!(*ok.value(), 42);
///
/// let failed = parse_age("forty-two");
/// assert!(failed.is_error());
/// assert_eq!(failed.first_error().code(), "Age.Invalid");
/// assert!(ok.errors_or_empty().is_empty());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum ResultOrErrors<T> {
    Value(T),
    Errors(Errors),
}

impl<T> ResultOrErrors<T> {
    /// Creates a value state.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::Value(value)
    }

    /// Creates a value state from an optional value.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::AbsentValue`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ResultOrErrors;
    ///
    /// let r = ResultOrErrors::from_option(Some("ready"));
    /// assert_eq!(*r.value(), "ready");
    /// ```
    #[inline]
    #[track_caller]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => usage::fail(UsageError::AbsentValue),
        }
    }

    /// Fallible counterpart of [`from_option`](Self::from_option).
    #[inline]
    pub fn try_from_option(value: Option<T>) -> Result<Self, UsageError> {
        value.map(Self::Value).ok_or(UsageError::AbsentValue)
    }

    /// Creates an error state holding a single error.
    #[inline]
    pub fn from_error(error: ErrorValue) -> Self {
        Self::Errors(Errors::new(error))
    }

    /// Creates an error state from a sequence of errors, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::EmptyErrors`] when `errors` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{ErrorValue, ResultOrErrors};
    ///
    /// let e1 = ErrorValue::validation().with_code("A");
    /// let e2 = ErrorValue::validation().with_code("B");
    ///
    /// let r = ResultOrErrors::<()>::from_errors([e1.clone(), e2.clone(), e1.clone()]);
    /// assert_eq!(r.errors(), &[e1.clone(), e2, e1]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ErrorValue>,
    {
        match Errors::try_from_iter(errors) {
            Ok(errors) => Self::Errors(errors),
            Err(error) => usage::fail(error),
        }
    }

    /// Fallible counterpart of [`from_errors`](Self::from_errors).
    #[inline]
    pub fn try_from_errors<I>(errors: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = ErrorValue>,
    {
        Errors::try_from_iter(errors).map(Self::Errors)
    }

    /// Returns `true` in the error state.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Errors(_))
    }

    /// Returns `true` in the value state.
    #[must_use]
    #[inline]
    pub fn is_value(&self) -> bool {
        !self.is_error()
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::ValueOfErrors`] in the error state.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Value(value) => value,
            Self::Errors(_) => usage::fail(UsageError::ValueOfErrors),
        }
    }

    /// Returns the errors in construction order.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::ErrorsOfValue`] in the value state.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn errors(&self) -> &[ErrorValue] {
        match self {
            Self::Errors(errors) => errors.as_slice(),
            Self::Value(_) => usage::fail(UsageError::ErrorsOfValue),
        }
    }

    /// Returns the errors, or an empty slice in the value state.
    ///
    /// This is the one error accessor that is safe to call unconditionally.
    #[must_use]
    #[inline]
    pub fn errors_or_empty(&self) -> &[ErrorValue] {
        match self {
            Self::Errors(errors) => errors.as_slice(),
            Self::Value(_) => &[],
        }
    }

    /// Returns the first error.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::FirstErrorOfValue`] in the value state.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn first_error(&self) -> &ErrorValue {
        match self {
            Self::Errors(errors) => errors.first(),
            Self::Value(_) => usage::fail(UsageError::FirstErrorOfValue),
        }
    }

    #[must_use]
    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Errors(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn as_errors(&self) -> Option<&Errors> {
        match self {
            Self::Value(_) => None,
            Self::Errors(errors) => Some(errors),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Errors(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<Errors> {
        match self {
            Self::Value(_) => None,
            Self::Errors(errors) => Some(errors),
        }
    }

    /// Converts into a standard `Result`, keeping every error.
    #[inline]
    pub fn into_result(self) -> Result<T, Errors> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Errors(errors) => Err(errors),
        }
    }

    /// Maps the value, leaving errors untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> ResultOrErrors<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => ResultOrErrors::Value(f(value)),
            Self::Errors(errors) => ResultOrErrors::Errors(errors),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{ErrorValue, ResultOrErrors};
    ///
    /// fn non_zero(n: i32) -> ResultOrErrors<i32> {
    ///     if n == 0 {
    ///         ErrorValue::validation().with_code("Zero").into()
    ///     } else {
    ///         ResultOrErrors::from_value(n)
    ///     }
    /// }
    ///
    /// assert_eq!(ResultOrErrors::from_value(4).and_then(non_zero).into_value(), Some(4));
    /// assert!(ResultOrErrors::from_value(0).and_then(non_zero).is_error());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> ResultOrErrors<U>
    where
        F: FnOnce(T) -> ResultOrErrors<U>,
    {
        match self {
            Self::Value(value) => f(value),
            Self::Errors(errors) => ResultOrErrors::Errors(errors),
        }
    }

    /// Rewrites every error, one for one.
    #[inline]
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(ErrorValue) -> ErrorValue,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => Self::Errors(errors.map(f)),
        }
    }

    /// Calls `op` with the errors in the error state.
    #[inline]
    pub fn or_else<F>(self, op: F) -> Self
    where
        F: FnOnce(Errors) -> Self,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => op(errors),
        }
    }

    /// Emits one `warn` event per carried error and returns `self`.
    ///
    /// Each event carries the `code`, `category` and `description` fields. A
    /// value state emits nothing.
    #[cfg(feature = "tracing")]
    #[inline]
    pub fn trace_errors(self) -> Self {
        for error in self.errors_or_empty() {
            tracing::warn!(
                code = error.code(),
                category = %error.category(),
                description = error.description(),
                "result carries error"
            );
        }
        self
    }
}

impl<T> From<ErrorValue> for ResultOrErrors<T> {
    #[inline]
    fn from(error: ErrorValue) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<Errors> for ResultOrErrors<T> {
    #[inline]
    fn from(errors: Errors) -> Self {
        Self::Errors(errors)
    }
}

impl<T> TryFrom<Vec<ErrorValue>> for ResultOrErrors<T> {
    type Error = UsageError;

    #[inline]
    fn try_from(errors: Vec<ErrorValue>) -> Result<Self, Self::Error> {
        Errors::try_from(errors).map(Self::Errors)
    }
}

impl<T, E> From<Result<T, E>> for ResultOrErrors<T>
where
    E: Into<ErrorValue>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::from_error(error.into()),
        }
    }
}

impl<T> From<ResultOrErrors<T>> for Result<T, Errors> {
    #[inline]
    fn from(result: ResultOrErrors<T>) -> Self {
        result.into_result()
    }
}

/// Collects many results into one, accumulating the errors of every failed
/// item in iteration order.
///
/// # Examples
///
/// ```
/// use error_or::{ErrorValue, ResultOrErrors};
///
/// let all_ok: ResultOrErrors<Vec<i32>> =
///     vec![ResultOrErrors::from_value(1), ResultOrErrors::from_value(2)].into_iter().collect();
/// assert_eq!(all_ok.into_value(), Some(vec![1, 2]));
///
/// let mixed: ResultOrErrors<Vec<i32>> = vec![
///     ResultOrErrors::from_value(1),
///     ErrorValue::conflict().into(),
///     ErrorValue::not_found().into(),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(mixed.errors().len(), 2);
/// ```
impl<T, C> FromIterator<ResultOrErrors<T>> for ResultOrErrors<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = ResultOrErrors<T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors: Option<Errors> = None;

        for item in iter {
            match item {
                ResultOrErrors::Value(value) => {
                    if errors.is_none() {
                        values.push(value);
                    }
                },
                ResultOrErrors::Errors(found) => match errors.as_mut() {
                    Some(acc) => acc.append(found),
                    None => errors = Some(found),
                },
            }
        }

        match errors {
            Some(errors) => Self::Errors(errors),
            None => Self::Value(values.into_iter().collect()),
        }
    }
}

impl<T> TryFrom<ErrorVec<ErrorValue>> for ResultOrErrors<T> {
    type Error = UsageError;

    #[inline]
    fn try_from(errors: ErrorVec<ErrorValue>) -> Result<Self, Self::Error> {
        Errors::try_from(errors).map(Self::Errors)
    }
}
