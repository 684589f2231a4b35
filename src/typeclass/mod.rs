//! Type class traits for sets.
//!
//! - [`Semigroup`]: Associative binary operations (`combine`)
//! - [`Monoid`]: Semigroup with identity element (`empty`)
//! - [`Foldable`]: Folding over structures to produce summary values
//!
//! [`Set`](crate::set::Set) is a monoid under union and foldable in
//! iteration order. [`Intersecting`] selects the intersection semigroup
//! instead.
//!
//! # Examples
//!
//! ```rust
//! use eqset::set::Set;
//! use eqset::typeclass::{Foldable, Intersecting, Monoid, Semigroup};
//!
//! let all = Set::combine_all(vec![Set::from([1, 2]), Set::from([2, 3])]);
//! assert_eq!(all, Set::from([1, 2, 3]));
//!
//! let common = Intersecting::reduce_all(vec![
//!     Intersecting::new(Set::from([1, 2])),
//!     Intersecting::new(Set::from([2, 3])),
//! ]);
//! assert_eq!(common.map(Intersecting::into_inner), Some(Set::from([2])));
//!
//! assert_eq!(all.fold_left(0, |total, element| total + element), 6);
//! ```

mod foldable;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::Intersecting;
