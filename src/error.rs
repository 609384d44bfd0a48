/// Errors returned by [`Tree::delete_node`][crate::arena::Tree::delete_node] when the
/// `(parent, current)` pair it is given does not describe a node that is actually linked into
/// the tree. The tree is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SpliceError {
    /// There is no node to delete.
    #[error("no current node to delete")]
    MissingCurrent,
    /// A handle points at a slot that holds no node.
    #[error("node handle {0} does not refer to a live node")]
    VacantNode(usize),
    /// No parent was given but the current node is not the root.
    #[error("node {0} has no parent but is not the root")]
    NotRoot(usize),
    /// The current node is not a child of the given parent.
    #[error("node {current} is not a child of node {parent}")]
    NotChild {
        /// Index of the claimed parent.
        parent: usize,
        /// Index of the node that was to be deleted.
        current: usize,
    },
}
