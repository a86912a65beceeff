//! Big-O complexity proofs for the densely indexed queue
//!
//! These tests empirically verify the complexity of batch operations on
//! `IndexedMinPriorityQueue` using the `big-o-test` crate. For batches:
//! - O(1) per-element operations appear as O(n) for n operations
//! - O(log n) per-element operations appear as O(n log n) for n operations
//!
//! The walking backend locates every position from the head of the chain, so
//! a batch of n inserts into it must stay O(n^2).
//!
//! Note: These are empirical tests, not formal proofs. They detect significant
//! deviations from expected behavior but may not catch subtle issues with
//! specific input patterns.

use big_o_test::{test_algorithm, BigOAlgorithmComplexity};
use linked_heap::{IndexedMinPriorityQueue, MinPriorityQueue, PriorityQueue};

use ctor::ctor;
use parking_lot::RwLock;
use std::sync::Arc;

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // cause tests to run serially
    std::env::set_var("RUST_TEST_THREADS", "1");
}

type Queue = IndexedMinPriorityQueue<i32>;
type WalkQueue = MinPriorityQueue<i32>;

/// Ascending inserts never sift, so n inserts are O(n)
#[test]
fn test_dense_insert_ascending() {
    let queue = Arc::new(RwLock::new(Queue::new()));

    test_algorithm(
        "IndexedMinPriorityQueue ascending insert batch",
        3,
        || {
            *queue.write() = MinPriorityQueue::new();
        },
        1000,
        || {
            let mut q = queue.write();
            for i in 0..1000 {
                q.insert(i);
            }
            42
        },
        2000,
        || {
            let mut q = queue.write();
            for i in 0..2000 {
                q.insert(i);
            }
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

/// Descending inserts sift to the root every time: O(n log n) per batch
#[test]
fn test_dense_insert_descending() {
    let queue = Arc::new(RwLock::new(Queue::new()));

    test_algorithm(
        "IndexedMinPriorityQueue descending insert batch",
        3,
        || {
            *queue.write() = MinPriorityQueue::new();
        },
        1000,
        || {
            let mut q = queue.write();
            for i in (0..1000).rev() {
                q.insert(i);
            }
            42
        },
        2000,
        || {
            let mut q = queue.write();
            for i in (0..2000).rev() {
                q.insert(i);
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

/// n extract_min calls after n inserts: O(n log n) per batch
#[test]
fn test_dense_extract_min() {
    let queue = Arc::new(RwLock::new(Queue::new()));

    test_algorithm(
        "IndexedMinPriorityQueue extract_min batch",
        3,
        || {
            *queue.write() = MinPriorityQueue::new();
        },
        1000,
        || {
            let mut q = queue.write();
            for i in 0..1000 {
                q.insert(i);
            }
            for _ in 0..1000 {
                assert!(
                    q.extract_min().is_some(),
                    "extract_min() must succeed after inserting keys"
                );
            }
            42
        },
        2000,
        || {
            let mut q = queue.write();
            for i in 0..2000 {
                q.insert(i);
            }
            for _ in 0..2000 {
                assert!(
                    q.extract_min().is_some(),
                    "extract_min() must succeed after inserting keys"
                );
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

/// Every walking insert counts the chain and walks to the parent: O(n^2) per batch
#[test]
fn test_walk_insert_batch() {
    let queue = Arc::new(RwLock::new(WalkQueue::new()));

    test_algorithm(
        "MinPriorityQueue walking insert batch",
        3,
        || {
            *queue.write() = MinPriorityQueue::new();
        },
        200,
        || {
            let mut q = queue.write();
            for i in 0..200 {
                q.insert(i);
            }
            42
        },
        400,
        || {
            let mut q = queue.write();
            for i in 0..400 {
                q.insert(i);
            }
            42
        },
        BigOAlgorithmComplexity::ON2,
        BigOAlgorithmComplexity::ON,
    );
}
