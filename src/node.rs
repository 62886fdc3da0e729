//! A single cell of the AVL tree.
//!
//! Nodes are only ever created and restructured by [`Tree`][crate::tree::Tree]; everyone else
//! gets the read-only view exposed here, which is enough to walk the tree by comparison (see
//! [`PrefixTree`][crate::prefix::PrefixTree]) or to inspect its shape in tests.

use crate::error::TreeError;

/// An owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A tree cell holding a value, its two exclusively owned children, and the cached height of the
/// subtree rooted here.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many edges are on the longest path from this node down to a leaf. A node with no
    /// children has a height of 0.
    pub(crate) height: usize,
}

/// The height of an optional subtree, where an absent subtree is one shorter than a leaf.
pub(crate) fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height as isize)
}

impl<T> Node<T> {
    /// Construct a new leaf holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, if any. Every value below it is less than or equal to [`Node::value`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any. Every value below it is greater than or equal to
    /// [`Node::value`]; equal values only land here through rotations.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The cached height of this subtree. Leaves have height 0.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The difference in height between the right and left subtrees. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        height(&self.right) - height(&self.left)
    }

    /// The in-order predecessor of this node's value: the rightmost value of its left subtree.
    ///
    /// ## Errors
    ///
    /// [`TreeError::InvariantViolation`] when there is no left subtree to look in.
    pub fn predecessor(&self) -> Result<&T, TreeError> {
        let mut current = self.left().ok_or_else(|| {
            TreeError::InvariantViolation("predecessor requires a left child".to_string())
        })?;
        while let Some(right) = current.right() {
            current = right;
        }
        Ok(&current.value)
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        let tallest = height(&self.left).max(height(&self.right));
        // `tallest` is at least -1 so this never goes negative.
        self.height = (tallest + 1) as usize;
    }

    /// Detaches the rightmost node of this subtree, returning its value and what remains of the
    /// subtree. The caller is responsible for rebalancing each level on the way back up, which
    /// `rebalance` does for every node this recurses through.
    pub(crate) fn take_largest(mut self: Box<Self>) -> (T, Link<T>) {
        match self.right.take() {
            None => {
                let Node { value, left, .. } = *self;
                (value, left)
            }
            Some(right) => {
                let (largest, rest) = right.take_largest();
                self.right = rest;
                (largest, Some(crate::tree::rebalance(self)))
            }
        }
    }
}
