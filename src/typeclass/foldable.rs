//! Foldable type class - folding over data structures.
//!
//! This module provides the `Foldable` trait, which represents types that can
//! have their elements reduced (folded) into a single value.
//!
//! # Laws
//!
//! While `Foldable` does not have formal laws as strict as other type classes,
//! implementations should satisfy these properties:
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! For associative operations, `fold_left` and `fold_right` should produce the same result:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().into_iter().fold(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use eqset::set::Set;
//! use eqset::typeclass::Foldable;
//!
//! let numbers = Set::from([1, 2, 3, 4, 5]);
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//! ```

use super::monoid::Monoid;
use crate::set::Set;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// All other methods have default implementations based on `fold_left`:
///
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `is_empty`: Check if the structure has no elements
/// - `length`: Count the number of elements
/// - `to_list`: Convert to a `Vec`
/// - `find`: Find the first element matching a predicate
/// - `exists`: Check if any element matches a predicate
/// - `for_all`: Check if all elements match a predicate
pub trait Foldable {
    /// The element type being folded over.
    type Item;

    /// Folds the structure from left to right with an accumulator.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function that takes the accumulator and an element,
    ///   returning a new accumulator value
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Item) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function that takes an element and the accumulator,
    ///   returning a new accumulator value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    /// use eqset::typeclass::Foldable;
    ///
    /// // Iteration order is 3, 2, 1; folding from the right visits 1 first.
    /// let set = Set::from([1, 2, 3]);
    /// let result = set.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "321");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Item, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    /// use eqset::typeclass::Foldable;
    ///
    /// let words = Set::from(["ab", "bc"]);
    /// let letters: Set<char> = words.fold_map(|word| word.chars().collect());
    /// assert_eq!(letters, Set::from(['a', 'b', 'c']));
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Item) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// The order of elements is determined by the fold order.
    fn to_list(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    /// use eqset::typeclass::Foldable;
    ///
    /// let set = Set::from([1, 2, 3, 4, 5]);
    /// assert_eq!(set.clone().find(|element| *element < 3), Some(2));
    /// assert_eq!(set.find(|element| *element > 10), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
        Self: Clone,
    {
        self.clone().find(predicate).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Set<T> Implementation
// =============================================================================

/// Folds visit elements in iteration order, most recently inserted first.
impl<T> Foldable for Set<T> {
    type Item = T;

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fold_left_follows_iteration_order() {
        let set = Set::from([1, 2, 3]);
        let visited = set.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        });
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[rstest]
    fn fold_right_visits_last_element_first() {
        let set = Set::from([1, 2, 3]);
        let visited = set.fold_right(Vec::new(), |element, mut accumulator| {
            accumulator.push(element);
            accumulator
        });
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[rstest]
    fn to_list_matches_iter() {
        let set = Set::from(['x', 'y', 'z']);
        let expected: Vec<char> = set.iter().copied().collect();
        assert_eq!(set.to_list(), expected);
    }

    #[rstest]
    #[case(Set::new(), 0)]
    #[case(Set::from([7]), 1)]
    #[case(Set::from([7, 8, 7]), 2)]
    fn length_matches_len(#[case] set: Set<i32>, #[case] expected: usize) {
        assert_eq!(Foldable::length(&set), expected);
        assert_eq!(Foldable::is_empty(&set), expected == 0);
    }

    #[rstest]
    fn exists_and_for_all() {
        let set = Set::from([2, 4, 6]);
        assert!(set.exists(|element| *element == 4));
        assert!(!set.exists(|element| *element == 5));
        assert!(set.for_all(|element| element % 2 == 0));
        assert!(Set::<i32>::new().for_all(|_| false));
    }

    #[rstest]
    fn fold_map_unions_mapped_sets() {
        let set = Set::from([1, 2, 3]);
        let parities: Set<bool> = set.fold_map(|element| Set::from([element % 2 == 0]));
        assert_eq!(parities, Set::from([true, false]));
    }
}
