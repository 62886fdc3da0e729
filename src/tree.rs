//! A self-balancing Binary Search Tree (specifically, an AVL tree) over any totally ordered
//! element type. Duplicates are kept: an element equal to a node is routed into that node's left
//! subtree, so inserting the same value twice stores it twice.
//!
//! # Examples
//!
//! ```
//! use wordtree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.add(1);
//! tree.add(2);
//! tree.add(3);
//! assert!(tree.contains(&1));
//!
//! // Adding ascending values doesn't leave us with a linked list.
//! assert_eq!(tree.root().map(|root| *root.value()), Some(2));
//!
//! // Removing a value that was never added is a no-op.
//! assert!(!tree.remove(&42));
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//!
//! let values: Vec<_> = tree.snapshot().collect();
//! assert_eq!(values, [2, 3]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::TreeError;
use crate::iter::Snapshot;
use crate::node::{self, Link, Node};

/// A self-balancing Binary Search Tree (specifically, an AVL tree). This can be used for adding,
/// finding, and removing values, and for visiting them in ascending order.
///
/// No element count is stored; [`Tree::len`] walks the tree.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree isn't empty. Nodes are read-only from outside the tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the values in the tree, duplicates included. This is `O(n)`.
    pub fn len(&self) -> usize {
        fn count<T>(node: Option<&Node<T>>) -> usize {
            node.map_or(0, |n| 1 + count(n.left()) + count(n.right()))
        }

        count(self.root())
    }

    /// The height of the root, or `None` for an empty tree. A tree with a single value has height
    /// 0.
    pub fn height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// Adds `value` to the tree, rebalancing every node on the way back up to the root. Adding a
    /// value equal to one already present stores a second copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("b");
    /// tree.add("a");
    /// tree.add("a");
    ///
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn add(&mut self, value: T)
    where
        T: Ord,
    {
        self.root = Some(insert(self.root.take(), value));
    }

    /// Removes one copy of `value` from the tree and returns whether anything was removed. If the
    /// tree doesn't contain `value`, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(String::from("cat"));
    ///
    /// assert!(tree.remove("cat"));
    /// assert!(!tree.remove("cat"));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        remove(&mut self.root, value)
    }

    /// Checks whether at least one copy of `value` is in the tree.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(node.value().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Copies every value, in ascending order, into a cursor that doesn't borrow the tree.
    /// Adding to or removing from the tree afterwards has no effect on the snapshot.
    pub fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        fn in_order<T: Clone>(node: Option<&Node<T>>, values: &mut Vec<T>) {
            if let Some(node) = node {
                in_order(node.left(), values);
                values.push(node.value.clone());
                in_order(node.right(), values);
            }
        }

        let mut values = Vec::new();
        in_order(self.root(), &mut values);
        Snapshot::new(values)
    }

    /// Verifies the ordering, height, and balance invariants at every node.
    ///
    /// ## Errors
    ///
    /// [`TreeError::InvariantViolation`] describing the first broken invariant found.
    pub fn check(&self) -> Result<(), TreeError>
    where
        T: Ord,
    {
        check_node(self.root(), None, None).map(|_| ())
    }

    /// A pre-order rendering of the tree for debugging. Each node is on its own line, indented by
    /// its depth.
    ///
    /// ```
    /// use wordtree::tree::Tree;
    ///
    /// let tree: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.dump().to_string(), "Data: 2\n|--Data: 1\n|--Data: 3\n");
    /// ```
    pub fn dump(&self) -> Dump<'_, T> {
        Dump(self)
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}

/// See [`Tree::dump`].
pub struct Dump<'a, T>(&'a Tree<T>);

impl<T> fmt::Display for Dump<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn pre_order<T: fmt::Display>(
            f: &mut fmt::Formatter<'_>,
            node: Option<&Node<T>>,
            level: usize,
        ) -> fmt::Result {
            let Some(node) = node else {
                return Ok(());
            };
            if level > 0 {
                write!(f, "{}|--", "   ".repeat(level - 1))?;
            }
            writeln!(f, "Data: {}", node.value())?;
            pre_order(f, node.left(), level + 1)?;
            pre_order(f, node.right(), level + 1)
        }

        pre_order(f, self.0.root(), 0)
    }
}

fn insert<T>(link: Link<T>, value: T) -> Box<Node<T>>
where
    T: Ord,
{
    let Some(mut node) = link else {
        return Node::new_boxed(value);
    };

    if value <= node.value {
        node.left = Some(insert(node.left.take(), value));
    } else {
        node.right = Some(insert(node.right.take(), value));
    }

    rebalance(node)
}

fn remove<T, Q>(link: &mut Link<T>, value: &Q) -> bool
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some(mut node) = link.take() else {
        return false;
    };

    let removed = match value.cmp(node.value.borrow()) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // Both of these leave the slot in a balanced state already: a lone child of an AVL
            // node is at most a leaf.
            (None, None) => return true,
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
                return true;
            }

            // If we have two children we have to figure out which value to promote. We choose
            // here this node's predecessor. That is, the largest value in this node's left
            // subtree.
            (Some(left), Some(right)) => {
                let (predecessor, new_left) = left.take_largest();
                node.value = predecessor;
                node.left = new_left;
                node.right = Some(right);
                true
            }
        },
    };

    *link = Some(rebalance(node));
    removed
}

/// Refreshes the height of `node` and, if its subtrees' heights differ by two, rotates it. Returns
/// the new root of this subtree. The children must already be balanced.
///
/// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
pub(crate) fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.fix_height();

    let factors = (
        node.balance_factor(),
        node.left().map(Node::balance_factor),
        node.right().map(Node::balance_factor),
    );
    let node = match factors {
        (-2, Some(1), _) => {
            trace!(rotation = "LR", "rebalancing");
            rotate_left_right(node)
        }
        // A left child with a balance factor of 0 only happens after a removal. A single rotation
        // still leaves the new root within one.
        (-2, Some(_), _) => {
            trace!(rotation = "LL", "rebalancing");
            rotate_right(node)
        }
        (2, _, Some(-1)) => {
            trace!(rotation = "RL", "rebalancing");
            rotate_right_left(node)
        }
        (2, _, Some(_)) => {
            trace!(rotation = "RR", "rebalancing");
            rotate_left(node)
        }
        _ => node,
    };

    if cfg!(debug_assertions) {
        let left_height = node::height(&node.left);
        let right_height = node::height(&node.right);
        assert_eq!(node.height as isize, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }

    node
}

/// Rotate `a` to the right. This moves the left child up vertically and `a` down vertically.
/// Used to rebalance the tree when the left child's left subtree is too tall (the "left-left"
/// case). As such, it must only be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///        a                b
///       / \              / \
///      b   z   rotate-> x   a
///     / \                  / \
///    x   y                y   z
/// ```
fn rotate_right<T>(mut a: Box<Node<T>>) -> Box<Node<T>> {
    let mut b = a.left.take().expect("Rotate right => left child");

    a.left = b.right.take();
    a.fix_height();

    b.right = Some(a);
    b.fix_height();
    b
}

/// Mirror of [`rotate_right`] for the "right-right" case.
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left<T>(mut a: Box<Node<T>>) -> Box<Node<T>> {
    let mut b = a.right.take().expect("Rotate left => right child");

    a.right = b.left.take();
    a.fix_height();

    b.left = Some(a);
    b.fix_height();
    b
}

/// Double rotation for the "left-right" case: the left child is right-heavy, so its right child
/// `c` is lifted two levels to become the new root.
///
/// ## Panics
///
/// When `a` has no left child or that child has no right child.
///
/// # Diagram
///
/// ```text
///        a                  c
///       / \               /   \
///      b   z   rotate->  b     a
///     / \               / \   / \
///    w   c             w   x y   z
///       / \
///      x   y
/// ```
fn rotate_left_right<T>(mut a: Box<Node<T>>) -> Box<Node<T>> {
    let mut b = a.left.take().expect("Rotate left-right => left child");
    let mut c = b.right.take().expect("Rotate left-right => left-right grandchild");

    a.left = c.right.take();
    b.right = c.left.take();
    a.fix_height();
    b.fix_height();

    c.left = Some(b);
    c.right = Some(a);
    c.fix_height();
    c
}

/// Mirror of [`rotate_left_right`] for the "right-left" case.
///
/// ## Panics
///
/// When `a` has no right child or that child has no left child.
fn rotate_right_left<T>(mut a: Box<Node<T>>) -> Box<Node<T>> {
    let mut b = a.right.take().expect("Rotate right-left => right child");
    let mut c = b.left.take().expect("Rotate right-left => right-left grandchild");

    a.right = c.left.take();
    b.left = c.right.take();
    a.fix_height();
    b.fix_height();

    c.right = Some(b);
    c.left = Some(a);
    c.fix_height();
    c
}

/// Checks the subtree at `node` against the bounds inherited from its ancestors and returns its
/// height (-1 when absent).
///
/// Rotations can carry a duplicate into the right subtree of an equal value, so both bounds are
/// inclusive.
fn check_node<T>(
    node: Option<&Node<T>>,
    lower: Option<&T>,
    upper: Option<&T>,
) -> Result<isize, TreeError>
where
    T: Ord,
{
    let Some(node) = node else {
        return Ok(-1);
    };

    if lower.map_or(false, |lower| node.value() < lower) {
        return Err(TreeError::InvariantViolation(
            "right subtree holds a value less than its ancestor".to_string(),
        ));
    }
    if upper.map_or(false, |upper| node.value() > upper) {
        return Err(TreeError::InvariantViolation(
            "left subtree holds a value greater than its ancestor".to_string(),
        ));
    }

    let left_height = check_node(node.left(), lower, Some(node.value()))?;
    let right_height = check_node(node.right(), Some(node.value()), upper)?;

    let expected = left_height.max(right_height) + 1;
    if node.height() as isize != expected {
        return Err(TreeError::InvariantViolation(format!(
            "cached height {} should be {expected}",
            node.height()
        )));
    }
    if left_height.abs_diff(right_height) > 1 {
        return Err(TreeError::InvariantViolation(format!(
            "balance factor {} is out of range",
            right_height - left_height
        )));
    }

    Ok(expected)
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a multiset of counts.
    /// This way we can ensure that after a random smattering of adds and removes we have the same
    /// values in both, and that the tree stays balanced throughout.
    fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, counts: &mut BTreeMap<T, usize>)
    where
        T: Ord + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Add(x) => {
                    tree.add(x.clone());
                    *counts.entry(x.clone()).or_default() += 1;
                }
                Op::Remove(x) => {
                    let expected = match counts.get(x).copied() {
                        Some(1) => {
                            counts.remove(x);
                            true
                        }
                        Some(count) => {
                            counts.insert(x.clone(), count - 1);
                            true
                        }
                        None => false,
                    };
                    assert_eq!(tree.remove(x), expected);
                }
                Op::Snapshot => {
                    let expected: Vec<_> = counts
                        .iter()
                        .flat_map(|(x, count)| std::iter::repeat(x.clone()).take(*count))
                        .collect();
                    assert_eq!(tree.snapshot().collect::<Vec<_>>(), expected);
                }
            }
            assert_eq!(tree.check(), Ok(()));
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut counts = BTreeMap::new();

            do_ops(&ops, &mut tree, &mut counts);
            (i8::MIN..=i8::MAX).all(|x| tree.contains(&x) == counts.contains_key(&x))
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();

            xs.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn add_then_remove(xs: Vec<i8>, x: i8) -> bool {
            let mut tree: Tree<_> = xs.iter().copied().filter(|y| *y != x).collect();
            tree.add(x);
            tree.remove(&x);

            !tree.contains(&x) && tree.check().is_ok()
        }
    }
}
