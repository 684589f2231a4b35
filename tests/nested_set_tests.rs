//! Tests for sets whose elements are sets or mixed element kinds.

use eqset::set::{AnyElement, Element, Set, SharedSet};
use rstest::rstest;

// =============================================================================
// Sets of Sets by Value
// =============================================================================

#[rstest]
fn test_set_of_sets_deduplicates_structurally() {
    let a = Set::from([1, 2]);
    let b = Set::from([1, 2]);
    let c = Set::from([2, 3]);

    let mut d = Set::new();
    assert!(d.insert(a));
    assert!(!d.insert(b));
    assert!(d.insert(c));
    assert_eq!(d.len(), 2);
}

#[rstest]
fn test_set_of_sets_ignores_inner_order() {
    let mut outer = Set::new();
    outer.insert(Set::from(['x', 'y', 'z']));
    assert!(outer.contains(&Set::from(['z', 'x', 'y'])));
    assert!(!outer.contains(&Set::from(['x', 'y'])));
}

#[rstest]
fn test_algebra_on_sets_of_sets() {
    let left = Set::from([Set::from([1]), Set::from([1, 2])]);
    let right = Set::from([Set::from([2, 1]), Set::from([3])]);

    assert_eq!(left.intersection(&right), Set::from([Set::from([1, 2])]));
    assert_eq!(left.union(&right).len(), 3);
    assert_eq!(left.relative_complement(&right), Set::from([Set::from([1])]));
}

#[rstest]
fn test_empty_inner_set_is_a_distinct_element() {
    let mut outer: Set<Set<i32>> = Set::new();
    assert!(outer.insert(Set::new()));
    assert!(!outer.insert(Set::new()));
    assert!(outer.insert(Set::from([0])));
    assert_eq!(outer.len(), 2);
}

#[rstest]
fn test_three_levels_of_nesting() {
    let deep = Set::from([Set::from([Set::from([1])])]);
    let same = Set::from([Set::from([Set::from([1])])]);
    let other = Set::from([Set::from([Set::from([2])])]);
    assert_eq!(deep, same);
    assert_ne!(deep, other);
}

// =============================================================================
// Shared Sets
// =============================================================================

#[rstest]
fn test_shared_sets_deduplicate_structurally() {
    let a = SharedSet::from(Set::from([1, 2]));
    let b = SharedSet::from(Set::from([1, 2]));
    let c = SharedSet::from(Set::from([2, 3]));

    let mut d = Set::new();
    assert!(d.insert(a));
    assert!(!d.insert(b));
    assert!(d.insert(c));
    assert_eq!(d.len(), 2);
}

#[rstest]
fn test_mutating_shared_inner_set_changes_outer_membership() {
    let inner = SharedSet::from(Set::from([1]));
    let mut outer = Set::new();
    outer.insert(inner.clone());

    assert!(outer.contains(&SharedSet::from(Set::from([1]))));
    inner.insert(2);
    assert!(!outer.contains(&SharedSet::from(Set::from([1]))));
    assert!(outer.contains(&SharedSet::from(Set::from([1, 2]))));
}

#[rstest]
fn test_mutation_can_make_outer_elements_collide() {
    let first = SharedSet::from(Set::from([1]));
    let second = SharedSet::from(Set::from([2]));
    let mut outer = Set::new();
    outer.insert(first.clone());
    outer.insert(second.clone());

    first.insert(2);
    second.insert(1);

    assert_eq!(outer.len(), 2);
    let stored: Vec<&SharedSet<i32>> = outer.iter().collect();
    assert_eq!(stored[0], stored[1]);
}

#[rstest]
fn test_snapshot_detaches_from_shared_set() {
    let shared = SharedSet::from(Set::from(["a"]));
    let snapshot = shared.snapshot();
    shared.insert("b");
    assert_eq!(snapshot, Set::from(["a"]));
    assert_eq!(shared.len(), 2);
}

// =============================================================================
// Element
// =============================================================================

fn nested(values: &[i32]) -> Element<i32> {
    Element::Nested(SharedSet::from(
        values.iter().copied().map(Element::Value).collect::<Set<_>>(),
    ))
}

#[rstest]
fn test_element_set_mixes_values_and_sets() {
    let mut set = Set::new();
    assert!(set.insert(Element::Value(1)));
    assert!(set.insert(nested(&[1])));
    assert!(set.insert(nested(&[])));
    assert!(!set.insert(nested(&[1])));
    assert!(!set.insert(Element::Value(1)));
    assert_eq!(set.len(), 3);
}

#[rstest]
fn test_element_value_never_equals_nested() {
    assert_ne!(Element::Value(1), nested(&[1]));
    assert_ne!(nested(&[]), Element::Value(0));
}

#[rstest]
fn test_element_nested_inside_nested() {
    let inner = nested(&[1, 2]);
    let outer = Element::Nested(SharedSet::from(Set::from([inner, Element::Value(3)])));
    let same = Element::Nested(SharedSet::from(Set::from([
        Element::Value(3),
        nested(&[2, 1]),
    ])));
    assert_eq!(outer, same);
}

#[rstest]
fn test_element_algebra() {
    let left = Set::from([Element::Value(1), nested(&[1])]);
    let right = Set::from([nested(&[1]), Element::Value(2)]);
    assert_eq!(left.intersection(&right), Set::from([nested(&[1])]));
    assert_eq!(
        left.symmetric_difference(&right),
        Set::from([Element::Value(1), Element::Value(2)])
    );
}

// =============================================================================
// AnyElement
// =============================================================================

#[rstest]
fn test_any_element_set_keeps_types_apart() {
    let mut set: Set<AnyElement> = Set::new();
    assert!(set.insert(Box::new(1_i32)));
    assert!(set.insert(Box::new(1_u32)));
    assert!(set.insert(Box::new(String::from("1"))));
    assert!(!set.insert(Box::new(1_i32)));
    assert_eq!(set.len(), 3);
    assert!(set.contains(&(Box::new(1_u32) as AnyElement)));
    assert!(!set.contains(&(Box::new(2_u32) as AnyElement)));
}

#[rstest]
fn test_any_element_set_can_hold_sets() {
    let mut set: Set<AnyElement> = Set::new();
    assert!(set.insert(Box::new(Set::from([1_i32, 2]))));
    assert!(!set.insert(Box::new(Set::from([2_i32, 1]))));
    assert!(set.insert(Box::new(7_i32)));
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_any_element_algebra() {
    let left: Set<AnyElement> = Set::from([Box::new(1_i32) as AnyElement, Box::new("one")]);
    let right: Set<AnyElement> = Set::from([Box::new("one") as AnyElement, Box::new(1.0_f64)]);

    let common = left.intersection(&right);
    assert_eq!(common.len(), 1);
    assert_eq!(
        common.front().and_then(|element| element.downcast_ref::<&str>()),
        Some(&"one")
    );
    assert_eq!(left.union(&right).len(), 3);
}
