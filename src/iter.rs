//! Snapshot iteration over a [`Tree`][crate::tree::Tree].
//!
//! A [`Snapshot`] is taken eagerly: creating one walks the whole tree once and copies out its
//! values in ascending order. After that it is an independent value, so the tree can be changed
//! while a snapshot is being consumed without affecting it.

use std::iter::FusedIterator;
use std::vec;

use crate::error::TreeError;

/// An owned cursor over the ascending values a tree held when the snapshot was taken.
///
/// It is a regular [`Iterator`], and also offers the explicit `has_next`/`try_next` protocol for
/// callers that want a typed error at the end instead of `None`.
///
/// # Examples
///
/// ```
/// use wordtree::error::TreeError;
/// use wordtree::tree::Tree;
///
/// let mut tree: Tree<_> = [3, 1, 2].into_iter().collect();
/// let mut snapshot = tree.snapshot();
///
/// // Later changes aren't seen by the snapshot.
/// tree.add(0);
///
/// let mut seen = Vec::new();
/// while snapshot.has_next() {
///     seen.push(snapshot.try_next()?);
/// }
/// assert_eq!(seen, [1, 2, 3]);
/// assert_eq!(snapshot.try_next(), Err(TreeError::NoMoreElements));
/// # Ok::<(), TreeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Snapshot<T> {
    values: vec::IntoIter<T>,
}

impl<T> Snapshot<T> {
    /// `values` must already be in ascending order.
    pub(crate) fn new(values: Vec<T>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }

    /// Whether [`Snapshot::try_next`] would succeed.
    pub fn has_next(&self) -> bool {
        !self.values.as_slice().is_empty()
    }

    /// Yields the next value.
    ///
    /// ## Errors
    ///
    /// [`TreeError::NoMoreElements`] once every value has been yielded.
    pub fn try_next(&mut self) -> Result<T, TreeError> {
        self.values.next().ok_or(TreeError::NoMoreElements)
    }

    /// Removing through a snapshot isn't supported; remove from the tree itself instead.
    ///
    /// ## Errors
    ///
    /// Always [`TreeError::UnsupportedOperation`].
    pub fn remove(&mut self) -> Result<(), TreeError> {
        Err(TreeError::UnsupportedOperation)
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

impl<T> FusedIterator for Snapshot<T> {}
