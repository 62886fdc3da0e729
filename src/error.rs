//! Errors surfaced by the tree and its snapshot cursor.

use thiserror::Error;

/// Failure outcomes of tree operations that can't simply be no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A [`Snapshot`][crate::iter::Snapshot] was advanced past its last value. Check
    /// [`has_next`][crate::iter::Snapshot::has_next] first.
    #[error("no more elements")]
    NoMoreElements,
    /// Structural removal was requested through a snapshot cursor.
    #[error("remove() is not supported through a tree snapshot")]
    UnsupportedOperation,
    /// A structural invariant didn't hold, e.g. asking a node without a left child for its
    /// predecessor.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
