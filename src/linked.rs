//! Singly-linked node chain
//!
//! [`LinkedSequence`] is the storage layer under the complete binary tree: a
//! chain of heap-allocated [`Node`]s in which each node owns its successor
//! through `next`. Sequence order is the only total order the chain knows
//! about; every positional lookup is a walk from `head`.
//!
//! Nodes also carry `left`/`right` links. The sequence never reads or writes
//! them; they are the secondary tree view maintained by
//! [`CompleteBinaryTree`](crate::tree::CompleteBinaryTree) and always point
//! back into the same chain.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `append`   | O(1) (cached tail) |
//! | `pop_last` | O(n)       |
//! | `len`      | O(n)       |
//! | `get`      | O(i)       |
//!
//! # Example
//!
//! ```rust
//! use linked_heap::linked::LinkedSequence;
//!
//! let mut seq = LinkedSequence::new();
//! seq.append('a');
//! seq.append('b');
//! seq.append('c');
//!
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.get(1).map(|node| *node.key()), Some('b'));
//! assert_eq!(seq.pop_last(), Some('c'));
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec!['a', 'b']);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A key plus its sequence and tree links
///
/// `next` owns the successor. `left` and `right` are non-owning.
pub struct Node<K> {
    pub(crate) key: K,
    next: Option<NonNull<Node<K>>>,
    pub(crate) left: Option<NonNull<Node<K>>>,
    pub(crate) right: Option<NonNull<Node<K>>>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            next: None,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The successor in sequence order
    pub fn next(&self) -> Option<&Node<K>> {
        // SAFETY: `next` is owned by this node and outlives the borrow of `self`.
        self.next.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// The left tree child, if linked
    pub fn left(&self) -> Option<&Node<K>> {
        // SAFETY: tree links only ever target live nodes of the same chain,
        // and the chain cannot be mutated while `self` is borrowed.
        self.left.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// The right tree child, if linked
    pub fn right(&self) -> Option<&Node<K>> {
        // SAFETY: see `left`.
        self.right.map(|ptr| unsafe { &*ptr.as_ptr() })
    }
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("has_next", &self.next.is_some())
            .field("has_left", &self.left.is_some())
            .field("has_right", &self.right.is_some())
            .finish()
    }
}

/// An owning singly-linked chain of nodes
pub struct LinkedSequence<K> {
    head: Option<NonNull<Node<K>>>,
    /// Last node, cached so `append` does not walk
    tail: Option<NonNull<Node<K>>>,
    _phantom: PhantomData<Box<Node<K>>>,
}

impl<K> LinkedSequence<K> {
    /// Creates an empty sequence
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            _phantom: PhantomData,
        }
    }

    /// Returns true if the sequence has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes by walking the whole chain
    pub fn len(&self) -> usize {
        self.node_ptrs().count()
    }

    /// Links a new node holding `key` after the current tail
    ///
    /// Returns a pointer to the new node, valid until it is popped or the
    /// sequence is cleared.
    pub fn append(&mut self, key: K) -> NonNull<Node<K>> {
        let node = Box::into_raw(Box::new(Node::new(key)));
        // SAFETY: `Box::into_raw` never returns null.
        let node_ptr = unsafe { NonNull::new_unchecked(node) };

        match self.tail {
            // SAFETY: the tail is a live node owned by this chain.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node_ptr) },
            None => self.head = Some(node_ptr),
        }
        self.tail = Some(node_ptr);
        node_ptr
    }

    /// Removes the last node and returns its key, or `None` when empty
    pub fn pop_last(&mut self) -> Option<K> {
        let mut current = self.head?;
        let mut pred = None;
        // SAFETY: every pointer reached through `next` is a live node of this chain.
        unsafe {
            while let Some(next) = (*current.as_ptr()).next {
                pred = Some(current);
                current = next;
            }
            self.detach_tail(pred)
        }
    }

    /// Removes the first node and returns its key
    pub(crate) fn pop_front(&mut self) -> Option<K> {
        let head = self.head?;
        // SAFETY: `head` was produced by `Box::into_raw` in `append` and is
        // unlinked from the chain before being reboxed.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.key)
    }

    /// Unlinks and frees the tail, given its predecessor
    ///
    /// # Safety
    ///
    /// `pred` must be the node directly before the tail, or `None` when the
    /// chain holds at most one node. Any tree links pointing at the tail must
    /// already be cleared.
    pub(crate) unsafe fn detach_tail(&mut self, pred: Option<NonNull<Node<K>>>) -> Option<K> {
        let last = match pred {
            Some(pred) => (*pred.as_ptr()).next.take()?,
            None => self.head.take()?,
        };
        debug_assert!((*last.as_ptr()).next.is_none(), "detached node is not the tail");
        self.tail = pred;
        let node = Box::from_raw(last.as_ptr());
        Some(node.key)
    }

    /// The node at sequence index `i`, found by walking `next` `i` times
    pub fn get(&self, i: usize) -> Option<&Node<K>> {
        // SAFETY: the node is owned by this chain, which is borrowed for the
        // lifetime of the returned reference.
        self.locate(i).map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// Pointer form of [`get`](Self::get)
    pub fn locate(&self, i: usize) -> Option<NonNull<Node<K>>> {
        self.node_ptrs().nth(i)
    }

    /// The first node
    pub fn head(&self) -> Option<&Node<K>> {
        // SAFETY: see `get`.
        self.head.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// Iterates over keys in sequence order
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            current: self.head,
            _phantom: PhantomData,
        }
    }

    /// Iterates over nodes in sequence order
    pub fn nodes(&self) -> Nodes<'_, K> {
        Nodes {
            current: self.head,
            _phantom: PhantomData,
        }
    }

    pub(crate) fn node_ptrs(&self) -> impl Iterator<Item = NonNull<Node<K>>> + '_ {
        // SAFETY: every pointer reached through `next` is a live node of this chain.
        std::iter::successors(self.head, |ptr| unsafe { (*ptr.as_ptr()).next })
    }

    /// Frees every node
    ///
    /// Runs iteratively so long chains cannot exhaust the stack.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<K> Drop for LinkedSequence<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> Default for LinkedSequence<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for LinkedSequence<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: Clone> Clone for LinkedSequence<K> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<K> FromIterator<K> for LinkedSequence<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut seq = Self::new();
        for key in iter {
            seq.append(key);
        }
        seq
    }
}

impl<K> IntoIterator for LinkedSequence<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}

impl<'a, K> IntoIterator for &'a LinkedSequence<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// The chain owns all of its nodes exclusively; raw pointers never escape
// except as borrows tied to the sequence.
unsafe impl<K: Send> Send for LinkedSequence<K> {}
unsafe impl<K: Sync> Sync for LinkedSequence<K> {}

/// Borrowing iterator over keys, see [`LinkedSequence::iter`]
pub struct Iter<'a, K> {
    current: Option<NonNull<Node<K>>>,
    _phantom: PhantomData<&'a Node<K>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|ptr| {
            // SAFETY: the sequence is borrowed for `'a`.
            let node = unsafe { &*ptr.as_ptr() };
            self.current = node.next;
            &node.key
        })
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

/// Borrowing iterator over nodes, see [`LinkedSequence::nodes`]
pub struct Nodes<'a, K> {
    current: Option<NonNull<Node<K>>>,
    _phantom: PhantomData<&'a Node<K>>,
}

impl<'a, K> Iterator for Nodes<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|ptr| {
            // SAFETY: the sequence is borrowed for `'a`.
            let node = unsafe { &*ptr.as_ptr() };
            self.current = node.next;
            node
        })
    }
}

impl<K> FusedIterator for Nodes<'_, K> {}

/// Owning iterator over keys in sequence order
pub struct IntoIter<K> {
    seq: LinkedSequence<K>,
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.seq.pop_front()
    }
}

impl<K> FusedIterator for IntoIter<K> {}
