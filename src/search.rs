use crate::node::NodeId;

/// The outcome of [`Tree::search`][crate::arena::Tree::search]: the node holding the target
/// key and its parent.
///
/// | `parent` | `current` | meaning                                         |
/// |----------|-----------|-------------------------------------------------|
/// | `None`   | `None`    | the tree is empty                               |
/// | `None`   | `Some`    | the key is at the root                          |
/// | `Some`   | `None`    | the key is absent, `parent` is where it would go |
/// | `Some`   | `Some`    | the key was found below the root                |
///
/// Like [`NodeId`], a `SearchResult` goes stale as soon as the tree is modified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// The last node visited before `current`.
    pub parent: Option<NodeId>,
    /// The node holding the key, if any.
    pub current: Option<NodeId>,
}

impl SearchResult {
    /// Whether the searched key was found.
    pub fn is_found(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the searched key was found at the root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none() && self.current.is_some()
    }
}
