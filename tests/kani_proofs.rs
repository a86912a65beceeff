//! Kani verification proofs for queue and tree operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani

#[allow(unused_imports)]
use linked_heap::tree::CompleteBinaryTree;
#[allow(unused_imports)]
use linked_heap::{IndexedMinPriorityQueue, MinPriorityQueue, PriorityQueue};

/// Proof that insert always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_insert_increments_len() {
    let mut queue: MinPriorityQueue<u32> = MinPriorityQueue::new();
    queue.insert(kani::any());
    queue.insert(kani::any());
    let initial_len = queue.len();

    queue.insert(kani::any());

    assert!(queue.len() == initial_len + 1);
}

/// Proof that extract_min returns the smallest of three arbitrary keys
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_extract_min_is_minimum() {
    let mut queue: IndexedMinPriorityQueue<u32> = MinPriorityQueue::new();
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    queue.insert(a);
    queue.insert(b);
    queue.insert(c);

    let min = queue.extract_min();
    assert!(min == Some(a.min(b).min(c)));
    assert!(queue.len() == 2);
    assert!(queue.is_heap_ordered());
}

/// Proof that extraction from an empty queue is `None`, never a panic
#[cfg(kani)]
#[kani::proof]
fn verify_extract_from_empty() {
    let mut queue: MinPriorityQueue<u32> = MinPriorityQueue::new();
    assert!(queue.extract_min().is_none());
    assert!(queue.peek().is_none());
}

/// Proof that append/pop keep the child links consistent
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_append_pop_links() {
    let mut tree: CompleteBinaryTree<u8> = CompleteBinaryTree::new();
    let n: usize = kani::any();
    kani::assume(n <= 5);
    for key in 0..n {
        tree.append(key as u8);
    }
    assert!(tree.verify_links().is_ok());

    let popped = tree.pop();
    assert!(popped == n.checked_sub(1).map(|k| k as u8));
    assert!(tree.verify_links().is_ok());
}
