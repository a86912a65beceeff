//! Common traits for the linked priority queues
//!
//! [`PriorityQueue`] is the queue-level API shared by every addressing backend.
//! It follows the shape of Rust's `BinaryHeap` (`push`/`pop`/`peek`) but is a
//! min-queue over bare keys, named after the classic operations
//! (`insert`/`extract_min`).
//!
//! [`TreeError`] covers the structural failures of the underlying
//! [`CompleteBinaryTree`](crate::tree::CompleteBinaryTree). An empty queue is
//! not an error: extraction from it yields `None`.

/// Error type for positional tree operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// A positional index was at or past the current size
    #[error("index {index} out of range for tree of size {len}")]
    IndexOutOfRange {
        /// The requested position
        index: usize,
        /// The tree size at the time of the request
        len: usize,
    },
    /// A node's `left`/`right` link disagrees with `2i+1`/`2i+2`
    #[error("child links of node {index} disagree with positional order")]
    BrokenLink {
        /// Position of the node holding the bad link
        index: usize,
    },
}

/// Base trait for min-priority queues
///
/// # Example
///
/// ```rust
/// use linked_heap::PriorityQueue;
/// use linked_heap::queue::MinPriorityQueue;
///
/// let mut queue: MinPriorityQueue<i32> = MinPriorityQueue::new();
/// queue.insert(3);
/// queue.insert(1);
/// queue.insert(2);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.extract_min(), Some(1));
/// assert_eq!(queue.len(), 2);
/// ```
pub trait PriorityQueue<K: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue holds no keys
    fn is_empty(&self) -> bool;

    /// Returns the number of keys in the queue
    ///
    /// # Time Complexity
    /// O(n) for the walking backend (counts the chain), O(1) for the dense one.
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(n) with the walking backend, O(log n) with the dense one.
    fn insert(&mut self, key: K);

    /// Returns the minimum key without removing it
    fn peek(&self) -> Option<&K>;

    /// Removes and returns the minimum key, or `None` if the queue is empty
    ///
    /// # Time Complexity
    /// O(n) with the walking backend, O(log n) with the dense one.
    fn extract_min(&mut self) -> Option<K>;

    /// Moves every key of `other` into this queue
    fn merge(&mut self, other: Self);
}
