//! Iterators over [`Set`](super::Set).
//!
//! Both iterators are pull-based and finite. They yield elements in the
//! set's iteration order (most recently inserted first) and cannot be
//! restarted once exhausted: ask the set for a new one instead.

use std::fmt;
use std::iter::FusedIterator;

use super::sequence::{LinkedSequence, Values};

/// A borrowing iterator over the elements of a [`Set`](super::Set).
///
/// Created by [`Set::iter`](super::Set::iter). Cloning the iterator gives an
/// independent cursor at the same point.
pub struct Iter<'a, T> {
    inner: Values<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) const fn new(inner: Values<'a, T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a [`Set`](super::Set).
///
/// Created by the [`IntoIterator`] implementation of `Set<T>`.
pub struct IntoIter<T> {
    sequence: LinkedSequence<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) const fn new(sequence: LinkedSequence<T>) -> Self {
        Self { sequence }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.sequence.values())
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.len(), Some(self.sequence.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.sequence.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.sequence.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
