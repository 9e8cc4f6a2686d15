use core::ops::Deref;

use crate::types::alloc_type::Vec;
use crate::types::{ErrorValue, ErrorVec};
use crate::usage::UsageError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

/// A non-empty, ordered sequence of [`ErrorValue`]s.
///
/// The only ways to build one check that at least one error is present, so an
/// `Errors` in hand always has a [`first`](Self::first) element. Order and
/// duplicates are preserved exactly as supplied.
///
/// `Errors` dereferences to `[ErrorValue]` for read-only slice access.
///
/// # Examples
///
/// ```
/// use error_or::{Errors, ErrorValue, UsageError};
///
/// let errors = Errors::try_from_iter([ErrorValue::conflict(), ErrorValue::not_found()]).unwrap();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first(), &ErrorValue::conflict());
///
/// let empty = Errors::try_from_iter(Vec::<ErrorValue>::new());
/// assert_eq!(empty, Err(UsageError::EmptyErrors));
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ErrorVec<ErrorValue>"))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Errors {
    items: ErrorVec<ErrorValue>,
}

impl Errors {
    /// Creates a one-element sequence.
    #[must_use]
    #[inline]
    pub fn new(error: ErrorValue) -> Self {
        Self {
            items: smallvec::smallvec![error],
        }
    }

    /// Collects errors, rejecting an empty input.
    pub fn try_from_iter<I>(errors: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = ErrorValue>,
    {
        let items: ErrorVec<ErrorValue> = errors.into_iter().collect();
        if items.is_empty() {
            Err(UsageError::EmptyErrors)
        } else {
            Ok(Self { items })
        }
    }

    /// Returns the first error. Never fails.
    #[must_use]
    #[inline]
    pub fn first(&self) -> &ErrorValue {
        // non-empty by construction
        &self.items[0]
    }

    /// Returns the last error. Never fails.
    #[must_use]
    #[inline]
    pub fn last(&self) -> &ErrorValue {
        &self.items[self.items.len() - 1]
    }

    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[ErrorValue] {
        &self.items
    }

    /// Appends every error of `other`, keeping both orders.
    pub(crate) fn append(&mut self, other: Errors) {
        self.items.extend(other.items);
    }

    /// Applies `f` to every error. The length, and so non-emptiness, is kept.
    pub(crate) fn map<F>(self, f: F) -> Self
    where
        F: FnMut(ErrorValue) -> ErrorValue,
    {
        Self {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_vec(self) -> Vec<ErrorValue> {
        self.items.into_vec()
    }
}

impl Deref for Errors {
    type Target = [ErrorValue];

    #[inline]
    fn deref(&self) -> &[ErrorValue] {
        &self.items
    }
}

impl AsRef<[ErrorValue]> for Errors {
    #[inline]
    fn as_ref(&self) -> &[ErrorValue] {
        &self.items
    }
}

impl From<ErrorValue> for Errors {
    #[inline]
    fn from(error: ErrorValue) -> Self {
        Self::new(error)
    }
}

impl TryFrom<ErrorVec<ErrorValue>> for Errors {
    type Error = UsageError;

    fn try_from(items: ErrorVec<ErrorValue>) -> Result<Self, Self::Error> {
        if items.is_empty() {
            Err(UsageError::EmptyErrors)
        } else {
            Ok(Self { items })
        }
    }
}

impl TryFrom<Vec<ErrorValue>> for Errors {
    type Error = UsageError;

    #[inline]
    fn try_from(items: Vec<ErrorValue>) -> Result<Self, Self::Error> {
        Self::try_from(ErrorVec::from_vec(items))
    }
}

impl From<Errors> for Vec<ErrorValue> {
    #[inline]
    fn from(errors: Errors) -> Self {
        errors.into_vec()
    }
}

impl IntoIterator for Errors {
    type Item = ErrorValue;
    type IntoIter = smallvec::IntoIter<[ErrorValue; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a ErrorValue;
    type IntoIter = core::slice::Iter<'a, ErrorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}
