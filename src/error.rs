//! Error types for set mutations.
//!
//! Ordinary set operations never fail: a duplicate insertion or the removal
//! of an absent value is reported through a `bool`. The types here back the
//! handle-oriented variants, where the caller wants either the position of a
//! new element or the element itself back.

use std::fmt;

use crate::set::ElementHandle;

/// Returned by [`Set::try_insert`](crate::set::Set::try_insert) when an equal
/// element is already present.
///
/// The rejected value is handed back so that nothing is lost.
///
/// # Examples
///
/// ```rust
/// use eqset::set::Set;
///
/// let mut set = Set::new();
/// set.insert(String::from("apple"));
///
/// let error = set.try_insert(String::from("apple")).unwrap_err();
/// assert_eq!(error.to_string(), "element already present in set");
/// assert_eq!(error.into_value(), "apple");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateElementError<T> {
    value: T,
}

impl<T> DuplicateElementError<T> {
    #[inline]
    pub(crate) const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the rejected value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the error, returning the rejected value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for DuplicateElementError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("element already present in set")
    }
}

impl<T: fmt::Debug> std::error::Error for DuplicateElementError<T> {}

/// Returned by [`Set::remove_handle`](crate::set::Set::remove_handle) when
/// the handle no longer refers to a live element.
///
/// A handle goes stale once its element is removed by any means, or when the
/// set is cleared.
///
/// # Examples
///
/// ```rust
/// use eqset::set::Set;
///
/// let mut set = Set::new();
/// let handle = set.try_insert(42).unwrap();
/// assert_eq!(set.remove_handle(handle), Ok(42));
///
/// let error = set.remove_handle(handle).unwrap_err();
/// assert_eq!(error.handle(), handle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleHandleError {
    handle: ElementHandle,
}

impl StaleHandleError {
    #[inline]
    pub(crate) const fn new(handle: ElementHandle) -> Self {
        Self { handle }
    }

    /// Returns the handle that failed to resolve.
    #[inline]
    pub const fn handle(&self) -> ElementHandle {
        self.handle
    }
}

impl fmt::Display for StaleHandleError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "element handle {}@{} is stale",
            self.handle.index(),
            self.handle.generation()
        )
    }
}

impl std::error::Error for StaleHandleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::Set;
    use rstest::rstest;

    #[rstest]
    fn duplicate_error_returns_value() {
        let error = DuplicateElementError::new(vec![1, 2]);
        assert_eq!(error.value(), &vec![1, 2]);
        assert_eq!(error.into_value(), vec![1, 2]);
    }

    #[rstest]
    fn duplicate_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(DuplicateElementError::new(3));
        assert_eq!(error.to_string(), "element already present in set");
    }

    #[rstest]
    fn stale_handle_error_display_names_the_slot() {
        let mut set = Set::new();
        let handle = set.try_insert('a').unwrap();
        set.clear();

        let error = set.remove_handle(handle).unwrap_err();
        assert_eq!(error.to_string(), "element handle 0@0 is stale");
    }
}
