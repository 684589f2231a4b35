//! # eqset
//!
//! Unordered sets whose only requirement on the element type is an equality
//! test.
//!
//! ## Overview
//!
//! Most Rust sets need a hash or a total order. [`Set`](set::Set) needs
//! neither: it asks only for [`PartialEq`], which makes it usable for element
//! types that cannot be hashed or ordered, including sets themselves.
//!
//! - **Set**: insertion, removal, membership and the finite-set algebra
//!   (union, intersection, relative complement, complement, symmetric
//!   difference, subset, superset, equality)
//! - **Sets of sets**: `Set<Set<T>>` by value, or [`SharedSet`](set::SharedSet)
//!   to nest by reference
//! - **Mixed element kinds**: [`Element`](set::Element) and
//!   [`AnyElement`](set::AnyElement) compare unequal across kinds
//! - **Type classes**: [`Semigroup`](typeclass::Semigroup),
//!   [`Monoid`](typeclass::Monoid) and [`Foldable`](typeclass::Foldable)
//!
//! Membership is a linear scan, so most operations are O(n) and the binary
//! algebra is O(n × m).
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for sets and elements
//! - `arc`: thread-safe shared sets (`Arc` + `parking_lot::RwLock`)
//! - `tracing`: `tracing` events on mutation and set construction
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use eqset::prelude::*;
//!
//! let mut set = Set::new();
//! assert!(set.insert(4));
//! assert!(set.insert(5));
//! assert!(!set.insert(4));
//!
//! let other = Set::from([5, 6]);
//! assert_eq!(set.union(&other).len(), 3);
//! assert_eq!(&set & &other, Set::from([5]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use eqset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::set::*;
    pub use crate::typeclass::*;
}

mod trace;

pub mod error;
pub mod set;
pub mod typeclass;
