//! Complete binary tree over a linked chain
//!
//! The tree reads the chain of a [`LinkedSequence`] as the level-order layout
//! of a complete binary tree: the node at sequence index `i` is the tree node
//! at positional index `i`, its parent sits at `(i - 1) / 2` and its children
//! at `2i + 1` and `2i + 2`.
//!
//! Each node's `left`/`right` links mirror that arithmetic. `append` attaches a
//! new node under the node at `(n - 1) / 2` and `pop` detaches the node at
//! `n - 1`, so the links and the arithmetic never disagree. All positional
//! lookups, including [`set_node`](CompleteBinaryTree::set_node), go through
//! the same [`NodeIndex`] backend.
//!
//! # Time Complexity
//!
//! | Operation     | [`WalkIndex`] | [`DenseIndex`](crate::index::DenseIndex) |
//! |---------------|---------------|------------------------------------------|
//! | `get`         | O(i)          | O(1)                                     |
//! | `len`         | O(n)          | O(1)                                     |
//! | `append`      | O(n)          | O(1) amortized                           |
//! | `pop`         | O(n)          | O(1)                                     |
//!
//! # Example
//!
//! ```rust
//! use linked_heap::tree::CompleteBinaryTree;
//!
//! let mut tree: CompleteBinaryTree<i32> = CompleteBinaryTree::new();
//! for key in 1..=7 {
//!     tree.append(key);
//! }
//!
//! assert_eq!(tree.key(3), Ok(&4));
//! assert_eq!(tree.parent(3).unwrap().map(|n| *n.key()), Some(2));
//! assert_eq!(tree.left_child(2).map(|n| *n.key()), Some(6));
//! assert_eq!(tree.right_child(1).map(|n| *n.key()), Some(5));
//! assert_eq!(tree.pop(), Some(7));
//! ```

use crate::index::{NodeIndex, WalkIndex};
use crate::linked::{self, LinkedSequence, Node};
use crate::traits::TreeError;
use log::trace;
use std::fmt;
use std::ptr::NonNull;

/// True when `position` hangs from its parent's `left` link
fn is_left_position(position: usize) -> bool {
    position % 2 == 1
}

fn left_index(i: usize) -> Option<usize> {
    i.checked_mul(2)?.checked_add(1)
}

fn right_index(i: usize) -> Option<usize> {
    i.checked_mul(2)?.checked_add(2)
}

/// A complete binary tree stored as a singly-linked chain
pub struct CompleteBinaryTree<K, I = WalkIndex> {
    seq: LinkedSequence<K>,
    index: I,
}

impl<K, I: NodeIndex<K>> CompleteBinaryTree<K, I> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self {
            seq: LinkedSequence::new(),
            index: I::default(),
        }
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.index.len(&self.seq)
    }

    /// Returns true if the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    fn locate(&self, i: usize) -> Result<NonNull<Node<K>>, TreeError> {
        self.index
            .locate(&self.seq, i)
            .ok_or_else(|| TreeError::IndexOutOfRange {
                index: i,
                len: self.len(),
            })
    }

    /// The node at positional index `i`
    ///
    /// # Errors
    /// Returns `TreeError::IndexOutOfRange` when `i >= len()`.
    pub fn get(&self, i: usize) -> Result<&Node<K>, TreeError> {
        // SAFETY: the node belongs to `self.seq`, borrowed for the returned lifetime.
        self.locate(i).map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// The key at positional index `i`
    pub fn key(&self, i: usize) -> Result<&K, TreeError> {
        self.get(i).map(Node::key)
    }

    /// The parent of the node at `i`, or `Ok(None)` for the root
    ///
    /// # Errors
    /// Returns `TreeError::IndexOutOfRange` when `i >= len()`.
    pub fn parent(&self, i: usize) -> Result<Option<&Node<K>>, TreeError> {
        self.locate(i)?;
        if i == 0 {
            return Ok(None);
        }
        self.get((i - 1) / 2).map(Some)
    }

    /// The node at `2i + 1`, if that position exists
    pub fn left_child(&self, i: usize) -> Option<&Node<K>> {
        left_index(i).and_then(|child| self.get(child).ok())
    }

    /// The node at `2i + 2`, if that position exists
    pub fn right_child(&self, i: usize) -> Option<&Node<K>> {
        right_index(i).and_then(|child| self.get(child).ok())
    }

    /// Appends `key` at the next free position and returns that position
    ///
    /// The new node is linked at the end of the chain and attached as the
    /// left child of the node at `(n - 1) / 2` when `n` is odd, the right
    /// child when `n` is even.
    pub fn append(&mut self, key: K) -> usize {
        let position = self.len();
        let parent = match position {
            0 => None,
            _ => self.index.locate(&self.seq, (position - 1) / 2),
        };

        let node = self.seq.append(key);
        self.index.appended(node);

        if let Some(parent) = parent {
            // SAFETY: `parent` is a live node of this chain and no other
            // reference into the chain exists while `self` is borrowed mutably.
            let parent = unsafe { &mut *parent.as_ptr() };
            if is_left_position(position) {
                parent.left = Some(node);
            } else {
                parent.right = Some(node);
            }
        }

        trace!("appended tree node at position {position}");
        position
    }

    /// Removes the node at the last position and returns its key
    ///
    /// The node's parent forgets the matching child link. Returns `None` when
    /// the tree is empty.
    pub fn pop(&mut self) -> Option<K> {
        let last = self.len().checked_sub(1)?;
        let (pred, parent) = match last {
            0 => (None, None),
            _ => (
                Some(self.index.locate(&self.seq, last - 1)?),
                Some(self.index.locate(&self.seq, (last - 1) / 2)?),
            ),
        };

        if let Some(parent) = parent {
            // SAFETY: see `append`.
            let parent = unsafe { &mut *parent.as_ptr() };
            if is_left_position(last) {
                parent.left = None;
            } else {
                parent.right = None;
            }
        }

        // SAFETY: `pred` is the node at `last - 1`, directly before the tail,
        // and the only tree link to the tail was cleared above.
        let key = unsafe { self.seq.detach_tail(pred) };
        self.index.popped();

        trace!("popped tree node at position {last}");
        key
    }

    /// Replaces the key at positional index `i`, returning the old key
    ///
    /// # Errors
    /// Returns `TreeError::IndexOutOfRange` when `i >= len()`.
    pub fn set_node(&mut self, i: usize, key: K) -> Result<K, TreeError> {
        let node = self.locate(i)?;
        // SAFETY: exclusive access through `&mut self`.
        Ok(std::mem::replace(unsafe { &mut (*node.as_ptr()).key }, key))
    }

    /// Exchanges the keys stored at positions `i` and `j`
    ///
    /// Nodes keep their place in the chain; only the keys move.
    ///
    /// # Errors
    /// Returns `TreeError::IndexOutOfRange` when either index is `>= len()`.
    pub fn swap_keys(&mut self, i: usize, j: usize) -> Result<(), TreeError> {
        let a = self.locate(i)?;
        let b = self.locate(j)?;
        if a != b {
            // SAFETY: `a` and `b` are distinct live nodes and `&mut self`
            // guarantees nothing else borrows them.
            unsafe { std::mem::swap(&mut (*a.as_ptr()).key, &mut (*b.as_ptr()).key) };
        }
        Ok(())
    }

    /// Iterates over keys in positional order
    pub fn iter(&self) -> linked::Iter<'_, K> {
        self.seq.iter()
    }

    /// Iterates over nodes in positional order
    pub fn nodes(&self) -> linked::Nodes<'_, K> {
        self.seq.nodes()
    }

    /// The underlying chain
    pub fn sequence(&self) -> &LinkedSequence<K> {
        &self.seq
    }

    /// Removes every node
    pub fn clear(&mut self) {
        self.seq.clear();
        self.index.cleared();
    }

    /// Consumes the tree, yielding keys in positional order
    pub fn into_keys(self) -> linked::IntoIter<K> {
        self.seq.into_iter()
    }

    /// Checks that the index backend and every `left`/`right` link agree with
    /// the chain's positional order
    ///
    /// # Errors
    /// Returns `TreeError::BrokenLink` naming the first inconsistent position.
    pub fn verify_links(&self) -> Result<(), TreeError> {
        let nodes: Vec<NonNull<Node<K>>> = self.seq.node_ptrs().collect();
        if self.index.len(&self.seq) != nodes.len() {
            return Err(TreeError::BrokenLink { index: 0 });
        }

        for (i, &ptr) in nodes.iter().enumerate() {
            if self.index.locate(&self.seq, i) != Some(ptr) {
                return Err(TreeError::BrokenLink { index: i });
            }
            // SAFETY: `ptr` was just reached by walking the chain.
            let node = unsafe { &*ptr.as_ptr() };
            let expected_left = left_index(i).and_then(|c| nodes.get(c).copied());
            let expected_right = right_index(i).and_then(|c| nodes.get(c).copied());
            if node.left != expected_left || node.right != expected_right {
                return Err(TreeError::BrokenLink { index: i });
            }
        }
        Ok(())
    }
}

impl<K, I: NodeIndex<K>> Default for CompleteBinaryTree<K, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, I: NodeIndex<K>> Clone for CompleteBinaryTree<K, I> {
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        for key in self.iter() {
            tree.append(key.clone());
        }
        tree
    }
}

impl<K: fmt::Debug, I> fmt::Debug for CompleteBinaryTree<K, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.seq.iter()).finish()
    }
}
