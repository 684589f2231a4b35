//! Arena-backed doubly linked sequence.
//!
//! [`LinkedSequence`] is the storage primitive underneath [`Set`](super::Set).
//! Nodes live in a slot arena and link to each other by index, which gives
//! O(1) insertion at the front and O(1) removal by [`Position`] without any
//! pointer manipulation.
//!
//! A [`Position`] pairs a slot index with the generation of that slot.
//! Removing a node bumps the generation, so a position that outlives its
//! element resolves to nothing instead of to whatever later reuses the slot.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `push_front` | O(1)*      |
//! | `front`      | O(1)       |
//! | `back`       | O(1)       |
//! | `next`       | O(1)       |
//! | `get`        | O(1)       |
//! | `remove_at`  | O(1)       |
//! | `clear`      | O(slots)   |
//!
//! \* amortized, the arena may grow.

use std::iter::FusedIterator;

/// Stable reference to a node of a [`LinkedSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Position {
    index: usize,
    generation: u32,
}

impl Position {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.index
    }

    #[inline]
    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    previous: Option<usize>,
    next: Option<usize>,
    generation: u32,
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant {
        next_free: Option<usize>,
        generation: u32,
    },
}

impl<T> Slot<T> {
    #[inline]
    const fn node(&self) -> Option<&Node<T>> {
        match self {
            Self::Occupied(node) => Some(node),
            Self::Vacant { .. } => None,
        }
    }

    #[inline]
    const fn node_mut(&mut self) -> Option<&mut Node<T>> {
        match self {
            Self::Occupied(node) => Some(node),
            Self::Vacant { .. } => None,
        }
    }
}

/// Doubly linked sequence stored in a slot arena.
#[derive(Clone)]
pub(crate) struct LinkedSequence<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    length: usize,
}

impl<T> LinkedSequence<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            length: 0,
        }
    }

    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Links `value` in as the new first node and returns its position.
    pub(crate) fn push_front(&mut self, value: T) -> Position {
        let next = self.head;
        let (index, generation) = self.take_free_slot().unwrap_or((self.slots.len(), 0));
        let slot = Slot::Occupied(Node {
            value,
            previous: None,
            next,
            generation,
        });
        if index == self.slots.len() {
            self.slots.push(slot);
        } else {
            self.slots[index] = slot;
        }

        self.link_previous(next, Some(index));
        self.head = Some(index);
        self.length += 1;

        Position { index, generation }
    }

    #[inline]
    pub(crate) fn front(&self) -> Option<Position> {
        self.head.and_then(|index| self.position_at(index))
    }

    #[inline]
    pub(crate) fn back(&self) -> Option<Position> {
        self.tail.and_then(|index| self.position_at(index))
    }

    /// Position following `position`, or `None` at the end or for a stale position.
    #[inline]
    pub(crate) fn next(&self, position: Position) -> Option<Position> {
        self.resolve(position)?
            .next
            .and_then(|index| self.position_at(index))
    }

    #[inline]
    pub(crate) fn get(&self, position: Position) -> Option<&T> {
        self.resolve(position).map(|node| &node.value)
    }

    /// Finds the first position, front to back, whose value satisfies `predicate`.
    pub(crate) fn find_position<P>(&self, mut predicate: P) -> Option<Position>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index)?;
            if predicate(&node.value) {
                return Some(Position {
                    index,
                    generation: node.generation,
                });
            }
            cursor = node.next;
        }
        None
    }

    /// Unlinks the node at `position` and returns its value.
    ///
    /// Returns `None` without touching the sequence when `position` is stale.
    pub(crate) fn remove_at(&mut self, position: Position) -> Option<T> {
        self.resolve(position)?;

        let vacant = Slot::Vacant {
            next_free: self.free,
            generation: position.generation.wrapping_add(1),
        };
        let Slot::Occupied(node) = std::mem::replace(&mut self.slots[position.index], vacant)
        else {
            return None;
        };
        self.free = Some(position.index);

        self.link_next(node.previous, node.next);
        self.link_previous(node.next, node.previous);
        self.length -= 1;

        Some(node.value)
    }

    #[inline]
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let position = self.front()?;
        self.remove_at(position)
    }

    #[inline]
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let position = self.back()?;
        self.remove_at(position)
    }

    /// Removes every node for which `keep` returns `false`, front to back.
    ///
    /// Returns the number of removed nodes.
    pub(crate) fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.front();
        while let Some(position) = cursor {
            cursor = self.next(position);
            if self.get(position).is_some_and(|value| !keep(value)) {
                self.remove_at(position);
                removed += 1;
            }
        }
        removed
    }

    /// Drops every node and invalidates every position handed out so far.
    ///
    /// Slots are kept for reuse with bumped generations.
    pub(crate) fn clear(&mut self) {
        let mut free = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            let generation = match slot {
                Slot::Occupied(node) => node.generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => *generation,
            };
            *slot = Slot::Vacant {
                next_free: free,
                generation,
            };
            free = Some(index);
        }
        self.free = free;
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    #[inline]
    pub(crate) const fn values(&self) -> Values<'_, T> {
        Values {
            sequence: self,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    fn take_free_slot(&mut self) -> Option<(usize, u32)> {
        let index = self.free?;
        let Slot::Vacant {
            next_free,
            generation,
        } = self.slots[index]
        else {
            return None;
        };
        self.free = next_free;
        Some((index, generation))
    }

    /// Points the node at `from` forward to `to`; with no `from`, `to` becomes the head.
    fn link_next(&mut self, from: Option<usize>, to: Option<usize>) {
        let Some(index) = from else {
            self.head = to;
            return;
        };
        if let Some(node) = self.node_mut(index) {
            node.next = to;
        }
    }

    /// Points the node at `from` back to `to`; with no `from`, `to` becomes the tail.
    fn link_previous(&mut self, from: Option<usize>, to: Option<usize>) {
        let Some(index) = from else {
            self.tail = to;
            return;
        };
        if let Some(node) = self.node_mut(index) {
            node.previous = to;
        }
    }

    #[inline]
    fn node(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index).and_then(Slot::node)
    }

    #[inline]
    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(index).and_then(Slot::node_mut)
    }

    #[inline]
    fn resolve(&self, position: Position) -> Option<&Node<T>> {
        self.node(position.index)
            .filter(|node| node.generation == position.generation)
    }

    #[inline]
    fn position_at(&self, index: usize) -> Option<Position> {
        self.node(index).map(|node| Position {
            index,
            generation: node.generation,
        })
    }
}

impl<T> Default for LinkedSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing front-to-back walk over a [`LinkedSequence`].
pub(crate) struct Values<'a, T> {
    sequence: &'a LinkedSequence<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.sequence.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Values<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.sequence.node(self.back?)?;
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Values<'_, T> {}
