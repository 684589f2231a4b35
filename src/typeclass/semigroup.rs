//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup is a type together with an associative binary operation
//! `combine: (T, T) -> T`.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use eqset::set::Set;
//! use eqset::typeclass::Semigroup;
//!
//! let left = Set::from([1, 2]);
//! let right = Set::from([2, 3]);
//! assert_eq!(left.combine(right), Set::from([1, 2, 3]));
//! ```

use super::wrappers::Intersecting;
use crate::set::Set;

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Types can override this for more efficient implementations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    /// use eqset::typeclass::Semigroup;
    ///
    /// let left = Set::from(["a"]);
    /// let right = Set::from(["b"]);
    /// let both = left.combine_ref(&right);
    ///
    /// assert_eq!(left.len(), 1);
    /// assert_eq!(both.len(), 2);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns a default value for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    /// use eqset::typeclass::Semigroup;
    ///
    /// let sets = vec![Set::from([1]), Set::from([2]), Set::from([1, 3])];
    /// assert_eq!(Set::reduce_all(sets), Some(Set::from([1, 2, 3])));
    ///
    /// let none: Vec<Set<i32>> = vec![];
    /// assert_eq!(Set::reduce_all(none), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

/// Sets form a semigroup under union.
///
/// Combining keeps the iteration order of `self` and places the new
/// elements of `other` in front, the same as [`Set::union`].
impl<T: PartialEq + Clone> Semigroup for Set<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

// =============================================================================
// Intersecting Implementation
// =============================================================================

/// Sets also form a semigroup under intersection.
impl<T: PartialEq + Clone> Semigroup for Intersecting<T> {
    fn combine(self, other: Self) -> Self {
        let mut survivors = self.into_inner();
        survivors.retain(|element| other.as_inner().contains(element));
        Self::new(survivors)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        Self::new(self.as_inner().intersection(other.as_inner()))
    }
}
