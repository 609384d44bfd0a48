/// A handle to a node stored in a [`Tree`][crate::arena::Tree].
///
/// Handles are only meaningful for the tree that produced them and only until that tree is
/// next modified. A deleted node's slot is reused by later insertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The arena index this handle points at.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which child link of a parent a node hangs off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A `Node` has a key that is used for searching/sorting and up to two children.
#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` with the given `key`.
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Which side of this node `id` is linked on, if it is a child at all.
    pub(crate) fn side_of(&self, id: NodeId) -> Option<Side> {
        if self.left == Some(id) {
            Some(Side::Left)
        } else if self.right == Some(id) {
            Some(Side::Right)
        } else {
            None
        }
    }
}
