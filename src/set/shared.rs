//! Shared, interior-mutable sets for nesting by reference.
//!
//! A `Set<Set<T>>` owns its inner sets: once inserted they can only change
//! by being taken out again. [`SharedSet`] is the alternative when an inner
//! set must stay reachable and mutable from outside the outer set. Cloning a
//! `SharedSet` clones the handle, not the contents, and equality is
//! structural: two distinct `SharedSet`s holding equal contents compare
//! equal.
//!
//! # Aliasing
//!
//! Mutating a shared set that is an element of another set changes how the
//! outer set answers membership questions from then on. In particular two
//! elements that were different on insertion can become equal later, which
//! leaves the outer set holding duplicates. A set that contains itself,
//! directly or transitively, makes equality recurse without end. Neither
//! situation is detected.
//!
//! # Thread Safety
//!
//! Without the `arc` feature the handle is an `Rc<RefCell<Set<T>>>` and is
//! neither `Send` nor `Sync`; taking [`write`](SharedSet::write) while a
//! guard from [`read`](SharedSet::read) is alive panics. With `arc` enabled
//! it is an `Arc<parking_lot::RwLock<Set<T>>>`, and concurrent readers and
//! writers synchronise through the lock. Equality and formatting hold one
//! set's read lock while reading another and take those reads recursively,
//! so comparing `a == b` and `b == a` on different threads does not
//! deadlock while writers are waiting on either set.
//!
//! # Examples
//!
//! ```rust
//! use eqset::set::{Set, SharedSet};
//!
//! let first = SharedSet::from(Set::from([1, 2]));
//! let second = SharedSet::from(Set::from([2, 1]));
//! let third = SharedSet::from(Set::from([2, 3]));
//!
//! let mut outer = Set::new();
//! assert!(outer.insert(first.clone()));
//! assert!(!outer.insert(second)); // structurally equal to `first`
//! assert!(outer.insert(third));
//! assert_eq!(outer.len(), 2);
//!
//! // The outer set observes later changes to `first`
//! first.insert(9);
//! assert!(!outer.contains(&SharedSet::from(Set::from([1, 2]))));
//! assert!(outer.contains(&SharedSet::from(Set::from([1, 2, 9]))));
//! ```

use std::borrow::Borrow;
use std::fmt;

use super::ReferenceCounter;
use super::unique_set::Set;

#[cfg(not(feature = "arc"))]
type SetLock<T> = std::cell::RefCell<Set<T>>;

#[cfg(feature = "arc")]
type SetLock<T> = parking_lot::RwLock<Set<T>>;

/// Shared read access to the contents of a [`SharedSet`].
#[cfg(not(feature = "arc"))]
pub type SharedSetReadGuard<'a, T> = std::cell::Ref<'a, Set<T>>;

/// Exclusive write access to the contents of a [`SharedSet`].
#[cfg(not(feature = "arc"))]
pub type SharedSetWriteGuard<'a, T> = std::cell::RefMut<'a, Set<T>>;

/// Shared read access to the contents of a [`SharedSet`].
#[cfg(feature = "arc")]
pub type SharedSetReadGuard<'a, T> = parking_lot::RwLockReadGuard<'a, Set<T>>;

/// Exclusive write access to the contents of a [`SharedSet`].
#[cfg(feature = "arc")]
pub type SharedSetWriteGuard<'a, T> = parking_lot::RwLockWriteGuard<'a, Set<T>>;

/// A reference-counted [`Set`] with interior mutability.
///
/// See the [module documentation](self) for sharing semantics.
pub struct SharedSet<T> {
    inner: ReferenceCounter<SetLock<T>>,
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(SharedSet<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SharedSet<i32>: Send, Sync);

impl<T> SharedSet<T> {
    /// Creates a new shared handle to an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from(Set::new())
    }

    /// Returns `true` if both handles point at the same set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::{Set, SharedSet};
    ///
    /// let original = SharedSet::from(Set::from([1]));
    /// let alias = original.clone();
    /// let lookalike = SharedSet::from(Set::from([1]));
    ///
    /// assert!(SharedSet::ptr_eq(&original, &alias));
    /// assert!(!SharedSet::ptr_eq(&original, &lookalike));
    /// assert_eq!(original, lookalike);
    /// ```
    #[inline]
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&this.inner, &other.inner)
    }

    /// Borrows the current contents for reading.
    ///
    /// # Panics
    ///
    /// Panics if a write guard for this set is alive.
    #[cfg(not(feature = "arc"))]
    #[inline]
    pub fn read(&self) -> SharedSetReadGuard<'_, T> {
        std::cell::RefCell::borrow(&self.inner)
    }

    /// Borrows the current contents for writing.
    ///
    /// # Panics
    ///
    /// Panics if any other guard for this set is alive.
    #[cfg(not(feature = "arc"))]
    #[inline]
    pub fn write(&self) -> SharedSetWriteGuard<'_, T> {
        std::cell::RefCell::borrow_mut(&self.inner)
    }

    /// Locks the current contents for reading, blocking while a writer holds
    /// the lock.
    #[cfg(feature = "arc")]
    #[inline]
    pub fn read(&self) -> SharedSetReadGuard<'_, T> {
        self.inner.read()
    }

    /// Locks the current contents for writing, blocking while any other
    /// guard is alive.
    #[cfg(feature = "arc")]
    #[inline]
    pub fn write(&self) -> SharedSetWriteGuard<'_, T> {
        self.inner.write()
    }

    /// Read access taken while the caller may already hold another set's
    /// guard.
    #[cfg(not(feature = "arc"))]
    #[inline]
    fn read_nested(&self) -> SharedSetReadGuard<'_, T> {
        std::cell::RefCell::borrow(&self.inner)
    }

    /// Read access taken while the caller may already hold another set's
    /// guard. It does not queue behind waiting writers once the lock has
    /// readers, so two threads reading the same pair of sets in opposite
    /// orders cannot wait on each other through a queued writer.
    #[cfg(feature = "arc")]
    #[inline]
    fn read_nested(&self) -> SharedSetReadGuard<'_, T> {
        self.inner.read_recursive()
    }

    /// Returns the current number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the set is currently empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns `true` if the set currently contains `value`.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.read().contains(value)
    }

    /// Returns the number of handles pointing at this set.
    #[inline]
    #[must_use]
    pub fn handle_count(this: &Self) -> usize {
        ReferenceCounter::strong_count(&this.inner)
    }
}

impl<T: PartialEq> SharedSet<T> {
    /// Inserts `value` into the shared set. See [`Set::insert`].
    pub fn insert(&self, value: T) -> bool {
        self.write().insert(value)
    }

    /// Removes the element equal to `value`. See [`Set::remove`].
    pub fn remove<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.write().remove(value)
    }
}

impl<T: Clone> SharedSet<T> {
    /// Returns an independent copy of the current contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set::{Set, SharedSet};
    ///
    /// let shared = SharedSet::from(Set::from([1, 2]));
    /// let frozen = shared.snapshot();
    /// shared.insert(3);
    ///
    /// assert_eq!(frozen.len(), 2);
    /// assert_eq!(shared.len(), 3);
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> Set<T> {
        self.read().clone()
    }
}

impl<T> From<Set<T>> for SharedSet<T> {
    #[inline]
    fn from(set: Set<T>) -> Self {
        Self {
            inner: ReferenceCounter::new(SetLock::new(set)),
        }
    }
}

impl<T> Default for SharedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SharedSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: ReferenceCounter::clone(&self.inner),
        }
    }
}

impl<T: PartialEq> PartialEq for SharedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || *self.read_nested() == *other.read_nested()
    }
}

impl<T: Eq> Eq for SharedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for SharedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read_nested(), formatter)
    }
}

impl<T: fmt::Display> fmt::Display for SharedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.read_nested(), formatter)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SharedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&*self.read_nested(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SharedSet<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Set<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}
