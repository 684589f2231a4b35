//! Equality-based sets.
//!
//! This module provides [`Set`], an unordered collection of unique elements
//! that only asks its element type for an equality test, together with the
//! pieces needed to nest and mix element kinds:
//!
//! - [`Set`]: the collection and the algebra of finite sets
//! - [`ElementHandle`]: opaque position of an element, returned on insertion
//! - [`Iter`] / [`IntoIter`]: borrowing and owning iterators
//! - [`SharedSet`]: a reference-counted set for nesting by reference
//! - [`Element`]: a value-or-nested-set element kind
//! - [`AnyElement`] / [`DynEquatable`]: an open, dynamically typed element kind
//!
//! # Examples
//!
//! ## Set algebra
//!
//! ```rust
//! use eqset::set::Set;
//!
//! let left = Set::from([4, 5, 6]);
//! let right = Set::from([2, 3, 4, 5]);
//!
//! assert_eq!(left.union(&right).len(), 5);
//! assert_eq!(left.intersection(&right).len(), 2);
//! assert_eq!(left.relative_complement(&right), Set::from([6]));
//! assert_eq!(left.complement(&right), Set::from([2, 3]));
//! ```
//!
//! ## Sets of sets
//!
//! ```rust
//! use eqset::set::Set;
//!
//! let mut outer = Set::new();
//! assert!(outer.insert(Set::from([1, 2])));
//! assert!(!outer.insert(Set::from([2, 1])));
//! assert!(outer.insert(Set::from([2, 3])));
//! assert_eq!(outer.len(), 2);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod element;
mod iter;
mod sequence;
mod shared;
mod unique_set;

pub use element::AnyElement;
pub use element::DynEquatable;
pub use element::Element;
pub use iter::IntoIter;
pub use iter::Iter;
pub use shared::SharedSet;
pub use shared::SharedSetReadGuard;
pub use shared::SharedSetWriteGuard;
pub use unique_set::ElementHandle;
pub use unique_set::Set;

// =============================================================================
// Tests
// =============================================================================
