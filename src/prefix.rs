//! An AVL tree of strings that can also answer "does any stored string start with this?".

use std::cmp::Ordering;

use crate::iter::Snapshot;
use crate::node::Node;
use crate::tree::Tree;

/// A [`Tree`] of `String`s with prefix membership.
///
/// # Examples
///
/// ```
/// use wordtree::prefix::PrefixTree;
///
/// let words: PrefixTree = ["cat", "car", "dog"].into_iter().map(String::from).collect();
///
/// assert!(words.contains_prefix("ca"));
/// assert!(words.contains_prefix("do"));
/// assert!(!words.contains_prefix("z"));
/// assert!(!words.contains("ca"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PrefixTree {
    tree: Tree<String>,
}

impl PrefixTree {
    /// Generate a new, empty `PrefixTree`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying tree.
    pub fn tree(&self) -> &Tree<String> {
        &self.tree
    }

    /// See [`Tree::add`].
    pub fn add(&mut self, word: impl Into<String>) {
        self.tree.add(word.into());
    }

    /// See [`Tree::remove`].
    pub fn remove(&mut self, word: &str) -> bool {
        self.tree.remove(word)
    }

    /// See [`Tree::contains`].
    pub fn contains(&self, word: &str) -> bool {
        self.tree.contains(word)
    }

    /// See [`Tree::len`].
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// See [`Tree::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// See [`Tree::snapshot`].
    pub fn snapshot(&self) -> Snapshot<String> {
        self.tree.snapshot()
    }

    /// Checks whether any stored string starts with `prefix`. The empty prefix matches any
    /// non-empty tree.
    ///
    /// This is a single root-to-leaf descent. A node that doesn't start with `prefix` differs
    /// from it at some byte within `prefix` (or is a proper prefix of it), so every string that
    /// does start with `prefix` sorts to the same side of that node as `prefix` itself.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        let mut current = self.tree.root();
        while let Some(node) = current {
            let word = node.value();
            if word.starts_with(prefix) {
                return true;
            }
            current = match prefix.cmp(word.as_str()) {
                Ordering::Less => node.left(),
                _ => node.right(),
            };
        }

        false
    }

    /// The stored strings starting with `prefix`, in ascending order.
    pub fn with_prefix(&self, prefix: &str) -> Vec<&str> {
        fn collect<'a>(node: Option<&'a Node<String>>, prefix: &str, found: &mut Vec<&'a str>) {
            let Some(node) = node else {
                return;
            };
            let word = node.value();
            if word.starts_with(prefix) {
                collect(node.left(), prefix, found);
                found.push(word);
                collect(node.right(), prefix, found);
            } else if prefix < word.as_str() {
                collect(node.left(), prefix, found);
            } else {
                collect(node.right(), prefix, found);
            }
        }

        let mut found = Vec::new();
        collect(self.tree.root(), prefix, &mut found);
        found
    }
}

impl Extend<String> for PrefixTree {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl FromIterator<String> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}
