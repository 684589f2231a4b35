#![cfg(feature = "arc")]

//! Multi-threaded tests for `SharedSet` with the `arc` feature.

use eqset::set::{Set, SharedSet};
use rstest::rstest;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

const ITERATIONS: usize = 20_000;
const DEADLINE: Duration = Duration::from_secs(30);

/// Runs every worker on its own thread and fails if they do not all finish
/// before `DEADLINE`.
fn run_to_completion(workers: Vec<Box<dyn FnOnce() + Send>>) {
    let worker_count = workers.len();
    let (sender, receiver) = mpsc::channel();

    for worker in workers {
        let sender = sender.clone();
        thread::spawn(move || {
            worker();
            let _ = sender.send(());
        });
    }

    for finished in 0..worker_count {
        assert!(
            receiver.recv_timeout(DEADLINE).is_ok(),
            "only {finished} of {worker_count} workers finished"
        );
    }
}

// =============================================================================
// Opposite-Order Comparison
// =============================================================================

#[rstest]
fn opposite_order_comparisons_with_queued_writers_finish() {
    let a = SharedSet::from(Set::from([1, 2]));
    let b = SharedSet::from(Set::from([2, 1]));

    let compare_ab = {
        let (a, b) = (a.clone(), b.clone());
        move || {
            for _ in 0..ITERATIONS {
                let _ = a == b;
            }
        }
    };
    let compare_ba = {
        let (a, b) = (a.clone(), b.clone());
        move || {
            for _ in 0..ITERATIONS {
                let _ = b == a;
            }
        }
    };
    let write_a = {
        let a = a.clone();
        move || {
            for _ in 0..ITERATIONS {
                a.insert(3);
                a.remove(&3);
            }
        }
    };
    let write_b = {
        let b = b.clone();
        move || {
            for _ in 0..ITERATIONS {
                b.insert(3);
                b.remove(&3);
            }
        }
    };

    run_to_completion(vec![
        Box::new(compare_ab),
        Box::new(compare_ba),
        Box::new(write_a),
        Box::new(write_b),
    ]);

    assert_eq!(a, b);
    assert_eq!(a.snapshot(), Set::from([1, 2]));
}

#[rstest]
fn nested_comparisons_with_queued_writers_finish() {
    let inner_a = SharedSet::from(Set::from([1]));
    let inner_b = SharedSet::from(Set::from([1]));
    let outer_a = SharedSet::from(Set::from([inner_a.clone()]));
    let outer_b = SharedSet::from(Set::from([inner_b.clone()]));

    let compare_ab = {
        let (a, b) = (outer_a.clone(), outer_b.clone());
        move || {
            for _ in 0..ITERATIONS {
                let _ = a == b;
            }
        }
    };
    let compare_ba = {
        let (a, b) = (outer_a.clone(), outer_b.clone());
        move || {
            for _ in 0..ITERATIONS {
                let _ = b == a;
            }
        }
    };
    let write_inner_a = move || {
        for _ in 0..ITERATIONS {
            inner_a.insert(2);
            inner_a.remove(&2);
        }
    };
    let write_inner_b = move || {
        for _ in 0..ITERATIONS {
            inner_b.insert(2);
            inner_b.remove(&2);
        }
    };

    run_to_completion(vec![
        Box::new(compare_ab),
        Box::new(compare_ba),
        Box::new(write_inner_a),
        Box::new(write_inner_b),
    ]);

    assert_eq!(outer_a, outer_b);
}

// =============================================================================
// Shared Mutation
// =============================================================================

#[rstest]
fn concurrent_inserts_of_distinct_values_are_all_kept() {
    let shared: SharedSet<usize> = SharedSet::new();

    let workers: Vec<Box<dyn FnOnce() + Send>> = (0..4)
        .map(|worker| {
            let shared = shared.clone();
            Box::new(move || {
                for value in 0..100 {
                    shared.insert(worker * 100 + value);
                }
            }) as Box<dyn FnOnce() + Send>
        })
        .collect();

    run_to_completion(workers);

    assert_eq!(shared.len(), 400);
    assert!((0..400).all(|value| shared.contains(&value)));
}

#[rstest]
fn concurrent_inserts_of_the_same_value_keep_one_copy() {
    let shared: SharedSet<i32> = SharedSet::new();

    let workers: Vec<Box<dyn FnOnce() + Send>> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            Box::new(move || {
                for _ in 0..100 {
                    shared.insert(7);
                }
            }) as Box<dyn FnOnce() + Send>
        })
        .collect();

    run_to_completion(workers);

    assert_eq!(shared.snapshot(), Set::from([7]));
}
