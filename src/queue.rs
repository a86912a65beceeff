//! Min-priority queue on a linked complete binary tree
//!
//! A binary min-heap whose slots are the positions of a
//! [`CompleteBinaryTree`]. Heap order is restored by swapping keys between
//! positions; nodes never change place in the chain.
//!
//! The second type parameter picks the addressing backend. The default
//! [`WalkIndex`] walks the chain for every position it touches, so each
//! operation costs O(n); [`IndexedMinPriorityQueue`] uses a
//! [`DenseIndex`] and brings both operations down to O(log n).
//!
//! # Time Complexity
//!
//! | Operation     | `MinPriorityQueue` | `IndexedMinPriorityQueue` |
//! |---------------|--------------------|---------------------------|
//! | `insert`      | O(n)               | O(log n)                  |
//! | `extract_min` | O(n)               | O(log n)                  |
//! | `peek`        | O(1)               | O(1)                      |
//! | `len`         | O(n)               | O(1)                      |
//! | `merge`       | O(m·n)             | O(m log(n + m))           |
//!
//! # Example
//!
//! ```rust
//! use linked_heap::PriorityQueue;
//! use linked_heap::queue::MinPriorityQueue;
//!
//! let mut queue: MinPriorityQueue<i32> = MinPriorityQueue::new();
//! for key in [5, 2, 1, 3, 4] {
//!     queue.insert(key);
//! }
//!
//! assert_eq!(queue.extract_min(), Some(1));
//! assert_eq!(queue.extract_min(), Some(2));
//! assert_eq!(queue.extract_min(), Some(3));
//! assert_eq!(queue.extract_min(), Some(4));
//! assert_eq!(queue.extract_min(), Some(5));
//! assert_eq!(queue.extract_min(), None);
//! ```
//!
//! # Key aliasing
//!
//! Sift-up and sift-down move keys between existing nodes. A node view handed
//! out by [`MinPriorityQueue::tree`] borrows the queue, so it can never observe
//! a key changing underneath it.

use crate::index::{DenseIndex, NodeIndex, WalkIndex};
use crate::linked::Node;
use crate::traits::PriorityQueue;
use crate::tree::CompleteBinaryTree;
use log::{debug, error, trace};
use std::fmt;

/// A min-priority queue stored in a linked complete binary tree
pub struct MinPriorityQueue<K, I = WalkIndex> {
    tree: CompleteBinaryTree<K, I>,
}

/// [`MinPriorityQueue`] with O(1) positional access
pub type IndexedMinPriorityQueue<K> = MinPriorityQueue<K, DenseIndex<K>>;

impl<K: Ord, I: NodeIndex<K>> PriorityQueue<K> for MinPriorityQueue<K, I> {
    fn new() -> Self {
        Self {
            tree: CompleteBinaryTree::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn insert(&mut self, key: K) {
        let position = self.tree.append(key);
        self.sift_up(position);
    }

    fn peek(&self) -> Option<&K> {
        self.tree.get(0).ok().map(Node::key)
    }

    fn extract_min(&mut self) -> Option<K> {
        match self.tree.len() {
            0 => None,
            1 => self.tree.pop(),
            _ => {
                let last = self.tree.pop()?;
                match self.tree.set_node(0, last) {
                    Ok(min) => {
                        self.sift_down(0);
                        Some(min)
                    }
                    Err(err) => {
                        error!("root missing after pop: {err}");
                        debug_assert!(false, "root missing after pop: {err}");
                        None
                    }
                }
            }
        }
    }

    fn merge(&mut self, other: Self) {
        debug!("merging queues");
        for key in other.tree.into_keys() {
            self.insert(key);
        }
    }
}

impl<K: Ord, I: NodeIndex<K>> MinPriorityQueue<K, I> {
    /// Number of keys in the queue, counted through the tree
    pub fn size(&self) -> usize {
        self.tree.len()
    }

    /// Read-only view of the underlying tree
    pub fn tree(&self) -> &CompleteBinaryTree<K, I> {
        &self.tree
    }

    /// Removes every key
    pub fn clear(&mut self) {
        debug!("clearing queue");
        self.tree.clear();
    }

    /// Drains the queue into a vector in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut sorted = Vec::new();
        while let Some(key) = self.extract_min() {
            sorted.push(key);
        }
        sorted
    }

    /// Checks heap order along every `left`/`right` link
    pub fn is_heap_ordered(&self) -> bool {
        self.tree.nodes().all(|node| {
            let key = node.key();
            node.left()
                .into_iter()
                .chain(node.right())
                .all(|child| key <= child.key())
        })
    }

    fn less(&self, a: usize, b: usize) -> bool {
        matches!((self.tree.key(a), self.tree.key(b)), (Ok(x), Ok(y)) if x < y)
    }

    /// Move the key at `position` up until its parent is no greater
    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.less(position, parent) || self.tree.swap_keys(position, parent).is_err() {
                break;
            }
            position = parent;
        }
        trace!("sift-up settled at position {position}");
    }

    /// Move the key at `position` down until no child is smaller
    fn sift_down(&mut self, mut position: usize) {
        let len = self.tree.len();
        loop {
            let left = 2 * position + 1;
            let right = 2 * position + 2;
            let mut smallest = position;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest == position || self.tree.swap_keys(position, smallest).is_err() {
                break;
            }
            position = smallest;
        }
        trace!("sift-down settled at position {position}");
    }
}

impl<K: Ord, I: NodeIndex<K>> Default for MinPriorityQueue<K, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, I: NodeIndex<K>> Clone for MinPriorityQueue<K, I> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K: fmt::Debug, I> fmt::Debug for MinPriorityQueue<K, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinPriorityQueue")
            .field("tree", &self.tree)
            .finish()
    }
}

impl<K: Ord, I: NodeIndex<K>> Extend<K> for MinPriorityQueue<K, I> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord, I: NodeIndex<K>> FromIterator<K> for MinPriorityQueue<K, I> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
