//! Newtype wrappers selecting an alternative algebraic operation.
//!
//! A [`Set`] combines by union. Wrapping it in [`Intersecting`] gives the same
//! values a second `Semigroup` instance that combines by intersection.

use crate::set::Set;

// =============================================================================
// Intersecting Wrapper
// =============================================================================

/// A newtype wrapper that represents the intersection semigroup of sets.
///
/// `Intersecting(a).combine(Intersecting(b))` equals
/// `Intersecting(a.intersection(&b))`. There is no `Monoid` instance: its
/// identity would have to contain every possible value.
///
/// # Examples
///
/// ```rust
/// use eqset::set::Set;
/// use eqset::typeclass::{Intersecting, Semigroup};
///
/// let left = Intersecting::new(Set::from([1, 2, 3]));
/// let right = Intersecting::new(Set::from([2, 3, 4]));
/// assert_eq!(left.combine(right).into_inner(), Set::from([2, 3]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersecting<T>(pub Set<T>);

impl<T> Intersecting<T> {
    /// Creates a new `Intersecting` wrapping the given set.
    #[inline]
    #[must_use]
    pub const fn new(set: Set<T>) -> Self {
        Self(set)
    }

    /// Consumes the wrapper and returns the set.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Set<T> {
        self.0
    }

    /// Returns a reference to the wrapped set.
    #[inline]
    #[must_use]
    pub const fn as_inner(&self) -> &Set<T> {
        &self.0
    }
}

impl<T> From<Set<T>> for Intersecting<T> {
    fn from(set: Set<T>) -> Self {
        Self::new(set)
    }
}
