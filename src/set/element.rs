//! Element kinds for heterogeneous sets.
//!
//! A plain [`Set<T>`](super::Set) compares elements of one static type, so a
//! comparison between incompatible types does not compile. Two element
//! types here bring back a runtime "different kinds are never equal" path
//! where a set genuinely has to mix kinds:
//!
//! - [`Element<T>`]: a closed variant that is either a value of `T` or a
//!   nested, shared set of further elements. A value never equals a nested
//!   set.
//! - [`AnyElement`]: an open, boxed [`DynEquatable`] that can hold any
//!   `'static` value with an equality test. Values of different concrete
//!   types compare unequal.
//!
//! # Examples
//!
//! ```rust
//! use eqset::set::{Element, Set, SharedSet};
//!
//! let inner: SharedSet<Element<i32>> =
//!     SharedSet::from(Set::from([Element::Value(1), Element::Value(2)]));
//!
//! let mut mixed = Set::new();
//! assert!(mixed.insert(Element::Value(1)));
//! assert!(mixed.insert(Element::Nested(inner.clone())));
//! assert!(!mixed.insert(Element::Nested(inner)));
//! assert_eq!(mixed.len(), 2);
//! ```

use std::any::Any;
use std::fmt;

use super::shared::SharedSet;

/// A set element that is either a plain value or a nested set.
///
/// Equality compares like with like: two values by `T`'s equality, two
/// nested sets structurally. A value and a nested set are never equal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de> + PartialEq"
    ))
)]
pub enum Element<T> {
    /// A leaf value.
    Value(T),
    /// A nested set, shared by reference.
    Nested(SharedSet<Self>),
}

impl<T> Element<T> {
    /// Returns the leaf value, if this is one.
    #[inline]
    #[must_use]
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Nested(_) => None,
        }
    }

    /// Returns the nested set, if this is one.
    #[inline]
    #[must_use]
    pub const fn as_nested(&self) -> Option<&SharedSet<Self>> {
        match self {
            Self::Value(_) => None,
            Self::Nested(set) => Some(set),
        }
    }

    /// Returns `true` if this is a leaf value.
    #[inline]
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this is a nested set.
    #[inline]
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }
}

impl<T: fmt::Display> fmt::Display for Element<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(formatter, "{value}"),
            Self::Nested(set) => write!(formatter, "{set}"),
        }
    }
}

// =============================================================================
// Open element kinds
// =============================================================================

/// Object-safe equality across arbitrary `'static` types.
///
/// Implemented for every `T: Any + PartialEq + Clone + Debug`. Comparing two
/// `DynEquatable`s first checks that they have the same concrete type and
/// returns `false` if not; only then does it use `T`'s equality.
///
/// # Examples
///
/// ```rust
/// use eqset::set::{AnyElement, Set};
///
/// let mut set: Set<AnyElement> = Set::new();
/// assert!(set.insert(Box::new(1_i32)));
/// assert!(set.insert(Box::new(1_i64)));      // different type, not a duplicate
/// assert!(set.insert(Box::new("one")));
/// assert!(!set.insert(Box::new(1_i32)));
/// assert_eq!(set.len(), 3);
/// ```
pub trait DynEquatable: Any + fmt::Debug {
    /// Returns `self` as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns `true` if `other` has the same concrete type as `self` and
    /// compares equal to it.
    fn dyn_equals(&self, other: &dyn DynEquatable) -> bool;

    /// Clones `self` into a new box.
    fn clone_boxed(&self) -> AnyElement;
}

/// A boxed value of any [`DynEquatable`] type.
///
/// Box a value exactly once: `Box::new(element)` where `element` is already
/// an `AnyElement` produces a box of a box, which only equals other boxes of
/// boxes.
pub type AnyElement = Box<dyn DynEquatable>;

impl<T> DynEquatable for T
where
    T: Any + PartialEq + Clone + fmt::Debug,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_equals(&self, other: &dyn DynEquatable) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    #[inline]
    fn clone_boxed(&self) -> AnyElement {
        Box::new(self.clone())
    }
}

impl dyn DynEquatable {
    /// Returns `true` if the boxed value is of type `T`.
    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns the boxed value as `&T` if it is of type `T`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl PartialEq for dyn DynEquatable {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.dyn_equals(other)
    }
}

impl Clone for AnyElement {
    #[inline]
    fn clone(&self) -> Self {
        (**self).clone_boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::Set;
    use rstest::rstest;

    fn nested(values: &[i32]) -> Element<i32> {
        Element::Nested(SharedSet::from(
            values.iter().copied().map(Element::Value).collect::<Set<_>>(),
        ))
    }

    #[rstest]
    fn value_never_equals_nested_set() {
        let empty = Element::Nested(SharedSet::new());
        assert_ne!(Element::Value(0), empty);
        assert_ne!(empty, Element::Value(0));
    }

    #[rstest]
    fn nested_sets_compare_structurally() {
        assert_eq!(nested(&[1, 2]), nested(&[2, 1]));
        assert_ne!(nested(&[1, 2]), nested(&[1, 3]));
    }

    #[rstest]
    fn accessors_match_variant() {
        let value = Element::Value(5);
        assert_eq!(value.as_value(), Some(&5));
        assert!(value.as_nested().is_none());
        assert!(value.is_value());

        let set = nested(&[5]);
        assert!(set.as_value().is_none());
        assert_eq!(set.as_nested().map(SharedSet::len), Some(1));
        assert!(set.is_nested());
    }

    #[rstest]
    fn display_recurses_into_nested_sets() {
        let outer = Element::Nested(SharedSet::from(Set::from([
            Element::Value(1),
            nested(&[2]),
        ])));
        assert_eq!(outer.to_string(), "{{2}, 1}");
    }

    #[rstest]
    fn dyn_elements_of_different_types_are_unequal() {
        let integer: AnyElement = Box::new(7_u8);
        let text: AnyElement = Box::new(String::from("7"));
        assert!(integer != text);
        assert!(integer == Box::new(7_u8) as AnyElement);
    }

    #[rstest]
    fn dyn_element_downcasts() {
        let element: AnyElement = Box::new(String::from("hi"));
        assert!(element.is::<String>());
        assert!(!element.is::<&str>());
        assert_eq!(element.downcast_ref::<String>().map(String::as_str), Some("hi"));
    }

    #[rstest]
    fn dyn_element_clone_keeps_concrete_type() {
        let element: AnyElement = Box::new(vec![1, 2]);
        let copy = element.clone();
        assert!(copy.is::<Vec<i32>>());
        assert!(copy == element);
    }
}
