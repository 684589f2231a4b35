//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element `empty` such that for
//! all `a`:
//!
//! - `empty.combine(a) == a` (left identity)
//! - `a.combine(empty) == a` (right identity)
//!
//! Sets under union form a monoid whose identity is the empty set. Sets
//! under intersection do not: their identity would be the universal set.
//!
//! # Examples
//!
//! ```rust
//! use eqset::set::Set;
//! use eqset::typeclass::{Monoid, Semigroup};
//!
//! let set = Set::from([1, 2]);
//! assert_eq!(Set::empty().combine(set.clone()), set);
//! assert_eq!(set.clone().combine(Set::empty()), set);
//! ```

use super::semigroup::Semigroup;
use crate::set::Set;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// For all `a`:
/// ```text
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    /// use eqset::typeclass::Monoid;
    ///
    /// let sets = vec![Set::from([1]), Set::from([2, 1])];
    /// assert_eq!(Set::combine_all(sets), Set::from([1, 2]));
    ///
    /// let none: Vec<Set<i32>> = vec![];
    /// assert!(Set::combine_all(none).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

/// The empty set is the identity of union.
impl<T: PartialEq + Clone> Monoid for Set<T> {
    fn empty() -> Self {
        Self::new()
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
