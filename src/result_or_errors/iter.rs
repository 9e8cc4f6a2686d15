use crate::result_or_errors::core::ResultOrErrors;
use crate::types::ErrorValue;

/// Lazy, finite iterator over the errors of a result.
///
/// Cloning it restarts from the same position, and a fresh one can be taken
/// from the result at any time.
pub type ErrorsIter<'a> = core::slice::Iter<'a, ErrorValue>;

pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<A> Clone for Iter<'_, A> {
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}

pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> IntoIterator for ResultOrErrors<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ResultOrErrors<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> ResultOrErrors<T> {
    /// Iterates over the value: one item in the value state, none otherwise.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_value(),
        }
    }

    /// Iterates over the errors: empty in the value state.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{ErrorValue, ResultOrErrors};
    ///
    /// let r = ResultOrErrors::<i32>::from_errors([ErrorValue::conflict(), ErrorValue::forbidden()]);
    /// let codes: Vec<_> = r.iter_errors().map(|e| e.code()).collect();
    /// assert_eq!(codes, ["General.Conflict", "General.Forbidden"]);
    ///
    /// let ok = ResultOrErrors::from_value(1);
    /// assert_eq!(ok.iter_errors().count(), 0);
    /// ```
    pub fn iter_errors(&self) -> ErrorsIter<'_> {
        self.errors_or_empty().iter()
    }
}
