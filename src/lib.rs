//! This crate provides a self-balancing Binary Search Tree (an AVL tree) along with a string
//! flavour of it that answers prefix queries, and uses the two to find every dictionary word that
//! can be spelled from a handful of letters.
//!
//! ## AVL Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored values. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a value and will sometimes have child `Node`s. The most important invariants of this
//! BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than or equal to
//!    its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than or equal to
//!    its own value. (Equal values are added on the left; only rotations move one to the right.)
//!
//! Searching for values in the tree takes `O(height)`, where `height` is the longest path from
//! the root `Node` down to a leaf `Node`. An AVL tree additionally keeps, at every `Node`, the
//! heights of its two subtrees within one of each other. It restores that after every addition
//! and removal by rotating a few `Node`s, which bounds the height to `O(lg N)`.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! ## Finding words
//!
//! [`discover::discover`] tries orderings of the given [`letters::Letters`] against a
//! [`dictionary::Dictionary`], abandoning an ordering as soon as no dictionary word starts with
//! it. The `findword` binary wraps that in a command line interface.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod dictionary;
pub mod discover;
pub mod error;
pub mod iter;
pub mod letters;
pub mod node;
pub mod prefix;
pub mod tree;
