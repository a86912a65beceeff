//! Positional addressing backends for the node chain
//!
//! A [`CompleteBinaryTree`](crate::tree::CompleteBinaryTree) needs array-style
//! access (`get(i)`) on top of a chain that has none. [`NodeIndex`] abstracts
//! over how that access is answered:
//!
//! - [`WalkIndex`]: default. Keeps no state and walks `next` from the head for
//!   every lookup; `len` counts the whole chain. O(i) access, O(n) size.
//! - [`DenseIndex`]: keeps a table of node pointers in positional order beside
//!   the chain. O(1) access and size, one pointer of overhead per node.
//!
//! Both backends answer every query identically; only the cost differs.
//!
//! # Example
//!
//! ```rust
//! use linked_heap::index::{DenseIndex, WalkIndex};
//! use linked_heap::tree::CompleteBinaryTree;
//!
//! let mut walked: CompleteBinaryTree<i32, WalkIndex> = CompleteBinaryTree::new();
//! let mut indexed: CompleteBinaryTree<i32, DenseIndex<i32>> = CompleteBinaryTree::new();
//! for key in [4, 8, 15] {
//!     walked.append(key);
//!     indexed.append(key);
//! }
//! assert_eq!(walked.key(2), indexed.key(2));
//! ```

use crate::linked::{LinkedSequence, Node};
use std::fmt;
use std::ptr::NonNull;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::WalkIndex {}
    impl<K> Sealed for super::DenseIndex<K> {}
}

/// Trait for positional addressing backends
///
/// The tree calls `appended`/`popped`/`cleared` right after the matching
/// change to the chain, so a stateful backend can mirror it. Implementations
/// must return exactly the node a walk of `i` steps from the head would reach.
///
/// The tree dereferences every pointer `locate` hands back, so the trait is
/// sealed: [`WalkIndex`] and [`DenseIndex`] are the only implementations.
///
/// ```compile_fail
/// use linked_heap::index::NodeIndex;
/// use linked_heap::linked::{LinkedSequence, Node};
/// use std::ptr::NonNull;
///
/// #[derive(Default)]
/// struct Dangling;
///
/// impl NodeIndex<u64> for Dangling {
///     fn locate(&self, _: &LinkedSequence<u64>, _: usize) -> Option<NonNull<Node<u64>>> {
///         Some(NonNull::dangling())
///     }
///     fn len(&self, _: &LinkedSequence<u64>) -> usize { 1 }
///     fn appended(&mut self, _: NonNull<Node<u64>>) {}
///     fn popped(&mut self) {}
///     fn cleared(&mut self) {}
/// }
/// ```
pub trait NodeIndex<K>: sealed::Sealed + Default {
    /// The node at position `i`, or `None` when `i` is past the end
    fn locate(&self, seq: &LinkedSequence<K>, i: usize) -> Option<NonNull<Node<K>>>;

    /// Number of nodes in the chain
    fn len(&self, seq: &LinkedSequence<K>) -> usize;

    /// A node was appended at the end of the chain
    fn appended(&mut self, node: NonNull<Node<K>>);

    /// The last node was removed from the chain
    fn popped(&mut self);

    /// The chain was emptied
    fn cleared(&mut self);
}

/// Stateless backend that walks the chain on every lookup
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkIndex;

impl<K> NodeIndex<K> for WalkIndex {
    fn locate(&self, seq: &LinkedSequence<K>, i: usize) -> Option<NonNull<Node<K>>> {
        seq.locate(i)
    }

    fn len(&self, seq: &LinkedSequence<K>) -> usize {
        seq.len()
    }

    fn appended(&mut self, _node: NonNull<Node<K>>) {}

    fn popped(&mut self) {}

    fn cleared(&mut self) {}
}

/// Backend keeping a dense pointer table in positional order
pub struct DenseIndex<K> {
    slots: Vec<NonNull<Node<K>>>,
}

impl<K> NodeIndex<K> for DenseIndex<K> {
    fn locate(&self, _seq: &LinkedSequence<K>, i: usize) -> Option<NonNull<Node<K>>> {
        self.slots.get(i).copied()
    }

    fn len(&self, _seq: &LinkedSequence<K>) -> usize {
        self.slots.len()
    }

    fn appended(&mut self, node: NonNull<Node<K>>) {
        self.slots.push(node);
    }

    fn popped(&mut self) {
        self.slots.pop();
    }

    fn cleared(&mut self) {
        self.slots.clear();
    }
}

impl<K> Default for DenseIndex<K> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<K> fmt::Debug for DenseIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseIndex")
            .field("slots", &self.slots.len())
            .finish()
    }
}

// The table only aliases nodes owned by the sequence it sits next to.
unsafe impl<K: Send> Send for DenseIndex<K> {}
unsafe impl<K: Sync> Sync for DenseIndex<K> {}
