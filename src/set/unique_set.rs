//! The equality-based unordered set.
//!
//! [`Set`] stores unique elements where uniqueness is decided by the
//! element type's [`PartialEq`] implementation alone. No hashing and no
//! ordering is required, so any type with an equality test can be stored,
//! including other sets.
//!
//! # Iteration Order
//!
//! Elements are kept in a linked sequence and every insertion goes to the
//! front. Iteration therefore yields the most recently inserted element
//! first. This order is an artifact of the storage: it is stable between
//! mutations, but it is not insertion order and callers should not rely on
//! it.
//!
//! # Time Complexity
//!
//! Membership is a linear scan, so every operation built on it is
//! quadratic in the worst case.
//!
//! | Operation              | Complexity  |
//! |------------------------|-------------|
//! | `new`                  | O(1)        |
//! | `len`                  | O(1)        |
//! | `contains`             | O(n)        |
//! | `insert`               | O(n)        |
//! | `remove`               | O(n)        |
//! | `remove_handle`        | O(1)        |
//! | `subset` / `superset`  | O(n * m)    |
//! | `equal`                | O(n * m)    |
//! | `union`                | O(n * m)    |
//! | `intersection`         | O(n * m)    |
//! | `relative_complement`  | O(n * m)    |
//! | `symmetric_difference` | O(n * m)    |
//! | `iter`                 | O(1) + O(n) |
//!
//! # Examples
//!
//! ```rust
//! use eqset::set::Set;
//!
//! let mut primes = Set::new();
//! assert!(primes.insert(2));
//! assert!(primes.insert(3));
//! assert!(primes.insert(5));
//! assert!(!primes.insert(3)); // duplicates are a no-op
//!
//! let odds: Set<i32> = [1, 3, 5, 7].into_iter().collect();
//!
//! assert_eq!(primes.intersection(&odds).len(), 2);              // {3, 5}
//! assert_eq!(primes.relative_complement(&odds).len(), 1);       // {2}
//! assert_eq!(primes.complement(&odds).len(), 2);                // {1, 7}
//! assert_eq!(primes.union(&odds).len(), 5);                     // {1, 2, 3, 5, 7}
//! assert_eq!(primes.symmetric_difference(&odds).len(), 3);      // {1, 2, 7}
//! ```
//!
//! Mismatched element types are rejected at compile time:
//!
//! ```compile_fail
//! use eqset::set::Set;
//!
//! let mut set: Set<i32> = Set::new();
//! set.insert("four");
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::iter::{IntoIter, Iter};
use super::sequence::{LinkedSequence, Position};
use crate::error::{DuplicateElementError, StaleHandleError};
use crate::trace::{debug_event, trace_event};

/// Opaque reference to an element's position inside a [`Set`].
///
/// Returned by [`Set::try_insert`]. A handle stays valid until its element
/// is removed by any means or the set is cleared; after that it is stale and
/// [`Set::get`] / [`Set::remove_handle`] reject it. A handle is only
/// meaningful for the set that issued it (and clones taken before the next
/// mutation); using it with an unrelated set is a logic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    position: Position,
}

impl ElementHandle {
    #[inline]
    const fn from_position(position: Position) -> Self {
        Self { position }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.position.index()
    }

    #[inline]
    pub(crate) const fn generation(self) -> u32 {
        self.position.generation()
    }
}

/// An unordered collection of unique elements under [`PartialEq`].
///
/// Two elements are duplicates when they compare equal, regardless of
/// identity. The set never holds two elements `a`, `b` at different
/// positions with `a == b`, provided the element type's equality is
/// reflexive, symmetric and transitive. That is the caller's obligation:
/// a `Set<f64>` happily accepts any number of `NaN`s.
///
/// All algebraic operations return new, independent sets and leave both
/// operands untouched.
///
/// # Type Parameters
///
/// * `T` - The element type. Queries and mutators need `T: PartialEq`;
///   algebraic constructors also need `T: Clone`.
///
/// # Examples
///
/// ```rust
/// use eqset::set::Set;
///
/// let mut set = Set::new();
/// set.insert(1);
/// set.insert(2);
/// set.insert(3);
///
/// // Most recently inserted element comes first
/// let elements: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(elements, vec![3, 2, 1]);
///
/// assert!(set.remove(&2));
/// assert!(!set.contains(&2));
/// assert_eq!(set.len(), 2);
/// ```
pub struct Set<T> {
    sequence: LinkedSequence<T>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sequence: LinkedSequence::new(),
        }
    }

    /// Creates a new empty set with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sequence: LinkedSequence::with_capacity(capacity),
        }
    }

    /// Returns the number of distinct elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns `true` if some element of the set equals `value`.
    ///
    /// Elements are scanned in iteration order and the scan stops at the
    /// first match. Borrowed forms of the element type are accepted, so a
    /// `Set<String>` can be queried with a `&str`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let set: Set<String> = ["red", "green"].into_iter().map(String::from).collect();
    /// assert!(set.contains("red"));
    /// assert!(!set.contains("blue"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.iter().any(|element| element.borrow() == value)
    }

    /// Returns the first element in iteration order, i.e. the most recently
    /// inserted one that is still present.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.sequence
            .front()
            .and_then(|position| self.sequence.get(position))
    }

    /// Returns the last element in iteration order.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.sequence
            .back()
            .and_then(|position| self.sequence.get(position))
    }

    /// Returns the element behind `handle`, or `None` if the handle is stale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let mut set = Set::new();
    /// let handle = set.try_insert("kiwi").unwrap();
    /// assert_eq!(set.get(handle), Some(&"kiwi"));
    ///
    /// set.remove("kiwi");
    /// assert_eq!(set.get(handle), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, handle: ElementHandle) -> Option<&T> {
        self.sequence.get(handle.position)
    }

    /// Removes the element behind `handle` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StaleHandleError`] if the element was already removed or the
    /// set was cleared since the handle was issued.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn remove_handle(&mut self, handle: ElementHandle) -> Result<T, StaleHandleError> {
        let Some(value) = self.sequence.remove_at(handle.position) else {
            trace_event!(
                index = handle.index(),
                generation = handle.generation(),
                "stale element handle"
            );
            return Err(StaleHandleError::new(handle));
        };
        trace_event!(length = self.len(), "removed element by handle");
        Ok(value)
    }

    /// Removes every element. All outstanding handles become stale.
    pub fn clear(&mut self) {
        trace_event!(length = self.len(), "cleared set");
        self.sequence.clear();
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let mut set: Set<i32> = (1..=6).collect();
    /// set.retain(|element| element % 3 == 0);
    /// assert_eq!(set, Set::from([3, 6]));
    /// ```
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.sequence.retain(predicate);
        trace_event!(length = self.len(), "retained elements");
    }

    /// Returns an iterator over the elements in iteration order.
    ///
    /// Each call produces an independent cursor. The iterator borrows the
    /// set, so the set cannot be mutated while it is alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// let mut elements: Vec<i32> = set.iter().copied().collect();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.sequence.values())
    }

    /// Builds a set from values already known to be pairwise distinct,
    /// keeping their order.
    fn from_distinct(values: Vec<T>) -> Self {
        let mut set = Self::with_capacity(values.len());
        for value in values.into_iter().rev() {
            set.sequence.push_front(value);
        }
        set
    }
}

impl<T: PartialEq> Set<T> {
    /// Inserts `value` unless an equal element is already present.
    ///
    /// Returns `true` if the value was inserted. A duplicate leaves the set
    /// unchanged and returns `false`; it is not an error.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(5));
    /// assert!(!set.insert(5));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.try_insert(value).is_ok()
    }

    /// Inserts `value` and returns a handle to it.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateElementError`] holding `value` if an equal element
    /// is already present. The set is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let mut set = Set::new();
    /// let handle = set.try_insert(10).unwrap();
    /// assert_eq!(set.get(handle), Some(&10));
    ///
    /// let rejected = set.try_insert(10).unwrap_err();
    /// assert_eq!(rejected.into_value(), 10);
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<ElementHandle, DuplicateElementError<T>> {
        if self.contains(&value) {
            trace_event!(length = self.len(), "rejected duplicate element");
            return Err(DuplicateElementError::new(value));
        }
        let position = self.sequence.push_front(value);
        trace_event!(length = self.len(), "inserted element");
        Ok(ElementHandle::from_position(position))
    }

    /// Removes the element equal to `value`.
    ///
    /// Returns `true` if an element was removed, `false` if none matched.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes the element equal to `value` and returns it.
    ///
    /// Only the first match in iteration order is removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let mut set = Set::from([String::from("a"), String::from("b")]);
    /// assert_eq!(set.take("a"), Some(String::from("a")));
    /// assert_eq!(set.take("a"), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let position = self
            .sequence
            .find_position(|element| element.borrow() == value)?;
        let removed = self.sequence.remove_at(position);
        trace_event!(length = self.len(), "removed element");
        removed
    }

    /// Returns `true` if every element of `other` is contained in `self`.
    ///
    /// Note the direction: the receiver is the candidate *superset*, so
    /// `a.subset(&b)` asks whether `b` is a subset of `a`. When `other` has
    /// more elements than `self` the answer is `false` without scanning.
    ///
    /// # Complexity
    ///
    /// O(n * m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let large = Set::from([1, 2, 3]);
    /// let small = Set::from([1, 2]);
    /// assert!(large.subset(&small));
    /// assert!(!small.subset(&large));
    /// ```
    #[must_use]
    pub fn subset(&self, other: &Self) -> bool {
        if other.len() > self.len() {
            return false;
        }
        other.iter().all(|element| self.contains(element))
    }

    /// Returns `true` if every element of `self` is contained in `other`.
    ///
    /// Defined as `other.subset(self)`.
    #[inline]
    #[must_use]
    pub fn superset(&self, other: &Self) -> bool {
        other.subset(self)
    }

    /// Returns `true` if both sets hold the same elements.
    ///
    /// Two sets are equal when they have the same length and one contains
    /// every element of the other. Iteration order plays no part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let forward = Set::from([1, 2, 3]);
    /// let backward = Set::from([3, 2, 1]);
    /// assert!(forward.equal(&backward));
    /// assert_eq!(forward, backward);
    /// ```
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.subset(other)
    }

    /// Returns `true` if the sets have no element in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller.iter().all(|element| !larger.contains(element))
    }
}

impl<T: PartialEq + Clone> Set<T> {
    /// Returns a new set with the elements of both sets.
    ///
    /// Elements of `self` keep their order; elements of `other` that are not
    /// already present are placed in front of them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let left = Set::from([4, 5, 6]);
    /// let right = Set::from([2, 3, 4, 5]);
    /// assert_eq!(left.union(&right), Set::from([2, 3, 4, 5, 6]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for element in other {
            if !result.contains(element) {
                result.sequence.push_front(element.clone());
            }
        }
        debug_event!(length = result.len(), "built union");
        result
    }

    /// Returns a new set with the elements of `self` that are also in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let left = Set::from([4, 5, 6]);
    /// let right = Set::from([2, 3, 4, 5]);
    /// assert_eq!(left.intersection(&right), Set::from([4, 5]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let result = self.filtered(|element| other.contains(element));
        debug_event!(length = result.len(), "built intersection");
        result
    }

    /// Returns a new set with the elements of `self` that are not in `other`
    /// ("self minus other").
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let left = Set::from([4, 5, 6]);
    /// let right = Set::from([2, 3, 4, 5]);
    /// assert_eq!(left.relative_complement(&right), Set::from([6]));
    /// ```
    #[must_use]
    pub fn relative_complement(&self, other: &Self) -> Self {
        let result = self.filtered(|element| !other.contains(element));
        debug_event!(length = result.len(), "built relative complement");
        result
    }

    /// Alias of [`relative_complement`](Self::relative_complement).
    #[inline]
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.relative_complement(other)
    }

    /// Returns a new set with the elements of `other` that are not in `self`.
    ///
    /// This is the mirror image of
    /// [`relative_complement`](Self::relative_complement), defined as
    /// `other.relative_complement(self)`. It is not an absolute complement;
    /// there is no universal set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let left = Set::from([4, 5, 6]);
    /// let right = Set::from([2, 3, 4, 5]);
    /// assert_eq!(left.complement(&right), Set::from([2, 3]));
    /// ```
    #[inline]
    #[must_use]
    pub fn complement(&self, other: &Self) -> Self {
        other.relative_complement(self)
    }

    /// Returns a new set with the elements found in exactly one of the sets.
    ///
    /// Observably equal to
    /// `self.union(other).relative_complement(&self.intersection(other))`,
    /// computed in two passes instead of four. Survivors from `self` come
    /// first in iteration order, followed by those from `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::Set;
    ///
    /// let left = Set::from([4, 5, 6]);
    /// let right = Set::from([2, 3, 4, 5]);
    /// assert_eq!(left.symmetric_difference(&right), Set::from([2, 3, 6]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let values: Vec<T> = self
            .iter()
            .filter(|element| !other.contains(*element))
            .chain(other.iter().filter(|element| !self.contains(*element)))
            .cloned()
            .collect();
        let result = Self::from_distinct(values);
        debug_event!(length = result.len(), "built symmetric difference");
        result
    }

    fn filtered<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_distinct(
            self.iter()
                .filter(|element| predicate(*element))
                .cloned()
                .collect(),
        )
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: PartialEq + Clone + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            if !self.contains(value) {
                self.sequence.push_front(value.clone());
            }
        }
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.sequence)
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: PartialEq + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self.union(other)`.
    fn bitor(self, other: &Set<T>) -> Set<T> {
        self.union(other)
    }
}

impl<T: PartialEq + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self.intersection(other)`.
    fn bitand(self, other: &Set<T>) -> Set<T> {
        self.intersection(other)
    }
}

impl<T: PartialEq + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self.relative_complement(other)`.
    fn sub(self, other: &Set<T>) -> Set<T> {
        self.relative_complement(other)
    }
}

impl<T: PartialEq + Clone> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self.symmetric_difference(other)`.
    fn bitxor(self, other: &Set<T>) -> Set<T> {
        self.symmetric_difference(other)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Inserting back to front reproduces the serialized iteration order.
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            values.push(element);
        }
        Ok(values.into_iter().rev().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
