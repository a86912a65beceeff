//! Linked Complete-Binary-Tree Priority Queue
//!
//! This crate provides a binary min-heap whose complete binary tree is not a
//! flat array but a singly-linked chain of nodes. Array-style heap arithmetic
//! (parent `(i - 1) / 2`, children `2i + 1` and `2i + 2`) is answered on top of
//! the chain, and every node also carries `left`/`right` links mirroring it.
//!
//! # Layers
//!
//! - [`linked::LinkedSequence`]: the owning node chain (append, pop-last, walk)
//! - [`tree::CompleteBinaryTree`]: positional view over the chain (`get`,
//!   `parent`, `left_child`, `right_child`, `append`, `pop`, `set_node`)
//! - [`queue::MinPriorityQueue`]: heap order over the tree's keys via sift-up
//!   and sift-down
//!
//! Positional lookups are answered by a pluggable [`index::NodeIndex`]:
//! [`index::WalkIndex`] walks the chain (O(n) per access, the default) and
//! [`index::DenseIndex`] keeps a pointer table (O(1) per access).
//!
//! # Example
//!
//! ```rust
//! use linked_heap::{IndexedMinPriorityQueue, MinPriorityQueue, PriorityQueue};
//!
//! let mut walked: MinPriorityQueue<u32> = MinPriorityQueue::new();
//! let mut indexed: IndexedMinPriorityQueue<u32> = MinPriorityQueue::new();
//! for key in [42, 7, 19] {
//!     walked.insert(key);
//!     indexed.insert(key);
//! }
//! assert_eq!(walked.extract_min(), Some(7));
//! assert_eq!(indexed.extract_min(), Some(7));
//! ```
//!
//! # Concurrency
//!
//! Queues are `Send` and `Sync` when their keys are, and every operation runs
//! to completion synchronously. Share one across threads behind a single lock
//! such as `std::sync::Mutex`.

pub mod index;
pub mod linked;
pub mod queue;
pub mod traits;
pub mod tree;

// Re-export the main types for convenience
pub use queue::{IndexedMinPriorityQueue, MinPriorityQueue};
pub use traits::{PriorityQueue, TreeError};
