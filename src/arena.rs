//! An unbalanced BST whose nodes live in a single growable arena. Child links are indices into
//! that arena instead of pointers, so a lookup can hand back handles to a node and its parent
//! and the caller can relink them afterwards without holding two mutable borrows.
//!
//! # Examples
//!
//! ```
//! use bst_set::arena::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8].into_iter().collect();
//!
//! assert!(tree.contains(&3));
//! assert!(!tree.contains(&4));
//!
//! // Deleting the root replaces its key with the largest key of its left subtree.
//! tree.delete(&5);
//! let root = tree.root().unwrap();
//! assert_eq!(tree.key(root), Some(&3));
//! assert_eq!(tree.max(), Some(&8));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::SpliceError;
use crate::node::{Node, NodeId, Side};
use crate::search::SearchResult;

/// The link a node hangs off: the tree's root link when `None`, otherwise one side of a parent.
type Slot = Option<(NodeId, Side)>;

/// An unbalanced Binary Search Tree storing a set of unique keys.
#[derive(Clone)]
pub struct Tree<K> {
    /// Every node ever allocated. `None` marks a slot freed by a deletion.
    nodes: Vec<Option<Node<K>>>,
    /// Indices of `None` slots in `nodes`, reused before the arena grows.
    free: Vec<usize>,
    root: Option<NodeId>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
        }
    }

    /// Generate a new, empty `Tree` with room for `capacity` nodes before the arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            root: None,
        }
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key, keeping the arena's allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
    }

    /// The handle of the root node, if the tree is not empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The key stored at `id`, or `None` if `id` is not a live node.
    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.node(id).map(|n| &n.key)
    }

    /// The left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.left)
    }

    /// The right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.right)
    }

    /// Returns the largest key in the subtree rooted at `subtree`. Returns `None` when there is
    /// no such subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::arena::Tree;
    ///
    /// let tree: Tree<i32> = [10, 5, 7, 15].into_iter().collect();
    /// let root = tree.root();
    ///
    /// assert_eq!(tree.maxima(root), Some(&15));
    /// assert_eq!(tree.maxima(tree.left(root.unwrap())), Some(&7));
    /// assert_eq!(tree.maxima(None), None);
    /// ```
    pub fn maxima(&self, subtree: Option<NodeId>) -> Option<&K> {
        let mut node = self.node(subtree?)?;
        while let Some(right) = node.right {
            node = self.get(right);
        }
        Some(&node.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.maxima(self.root)
    }

    /// Looks for `target` and returns the node holding it along with that node's parent. See
    /// [`SearchResult`] for how to read the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::arena::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1].into_iter().collect();
    ///
    /// assert!(tree.search(&2).is_root());
    ///
    /// let found = tree.search(&1);
    /// assert_eq!(found.parent, tree.root());
    /// assert!(found.is_found());
    ///
    /// // A missing key reports where it would be attached.
    /// let missing = tree.search(&0);
    /// assert_eq!(missing.parent, found.current);
    /// assert!(!missing.is_found());
    /// ```
    pub fn search(&self, target: &K) -> SearchResult
    where
        K: Ord,
    {
        let (slot, current) = self.descend(target);
        SearchResult {
            parent: slot.map(|(parent, _)| parent),
            current,
        }
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_found()
    }

    /// Adds `key` to the tree. Returns `false`, leaving the tree untouched, if an equal key was
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let (slot, current) = self.descend(&key);
        if current.is_some() {
            return false;
        }

        let id = self.alloc(key);
        self.relink(slot, Some(id));
        match slot {
            Some((parent, side)) => {
                tracing::trace!(node = id.0, parent = parent.0, ?side, "attached new node");
                self.check_local(parent);
            }
            None => tracing::trace!(node = id.0, "inserted new root"),
        }
        true
    }

    /// Removes `key` from the tree. Returns `false` if it was not there.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::arena::Tree;
    ///
    /// let mut tree: Tree<i32> = [1].into_iter().collect();
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        match self.descend(key) {
            (slot, Some(current)) => {
                self.splice(slot, current);
                true
            }
            (_, None) => false,
        }
    }

    /// Unlinks the `current` node of a [`SearchResult`] from the tree and returns its key.
    ///
    /// `found.current` must be the root when `found.parent` is `None`, and a child of
    /// `found.parent` otherwise. Any other pair is rejected with a [`SpliceError`] before the
    /// tree is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::arena::Tree;
    /// use bst_set::{SearchResult, SpliceError};
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// let found = tree.search(&3);
    /// assert_eq!(tree.delete_node(found), Ok(3));
    ///
    /// assert_eq!(
    ///     tree.delete_node(SearchResult::default()),
    ///     Err(SpliceError::MissingCurrent)
    /// );
    /// ```
    pub fn delete_node(&mut self, found: SearchResult) -> Result<K, SpliceError>
    where
        K: Ord,
    {
        let current = found.current.ok_or(SpliceError::MissingCurrent)?;
        if self.node(current).is_none() {
            return Err(SpliceError::VacantNode(current.0));
        }

        let slot = match found.parent {
            None if self.root == Some(current) => None,
            None => return Err(SpliceError::NotRoot(current.0)),
            Some(parent) => {
                let side = self
                    .node(parent)
                    .ok_or(SpliceError::VacantNode(parent.0))?
                    .side_of(current)
                    .ok_or(SpliceError::NotChild {
                        parent: parent.0,
                        current: current.0,
                    })?;
                Some((parent, side))
            }
        };

        Ok(self.splice(slot, current))
    }

    /// Walks down from the root towards `target`. Returns the link the walk ended on and the
    /// node holding `target`, if there is one.
    fn descend(&self, target: &K) -> (Slot, Option<NodeId>)
    where
        K: Ord,
    {
        let mut slot = None;
        let mut current = self.root;
        while let Some(id) = current {
            let side = match target.cmp(&self.get(id).key) {
                Ordering::Less => Side::Left,
                Ordering::Equal => break,
                Ordering::Greater => Side::Right,
            };
            slot = Some((id, side));
            current = self.get(id).child(side);
        }
        (slot, current)
    }

    /// Removes `current`, which hangs off `slot`, and returns its key.
    fn splice(&mut self, slot: Slot, current: NodeId) -> K
    where
        K: Ord,
    {
        let node = self.get(current);
        match (node.left, node.right) {
            (None, child) | (child, None) => {
                tracing::trace!(node = current.0, "splicing out node with at most one child");
                self.relink(slot, child);
                if let Some((parent, _)) = slot {
                    self.check_local(parent);
                }
                self.release(current)
            }
            (Some(left), Some(_)) => {
                tracing::trace!(node = current.0, "replacing node with its predecessor");
                // The predecessor is the rightmost node of the left subtree so it never has a
                // right child.
                let mut predecessor_parent = current;
                let mut predecessor = left;
                while let Some(right) = self.get(predecessor).right {
                    predecessor_parent = predecessor;
                    predecessor = right;
                }

                let orphan = self.get(predecessor).left;
                if predecessor_parent == current {
                    self.get_mut(current).left = orphan;
                } else {
                    self.get_mut(predecessor_parent).right = orphan;
                }

                let predecessor_key = self.release(predecessor);
                let removed = mem::replace(&mut self.get_mut(current).key, predecessor_key);
                self.check_local(current);
                removed
            }
        }
    }

    /// Points `slot` at `child`.
    fn relink(&mut self, slot: Slot, child: Option<NodeId>) {
        match slot {
            Some((parent, side)) => *self.get_mut(parent).child_mut(side) = child,
            None => self.root = child,
        }
    }

    fn alloc(&mut self, key: K) -> NodeId {
        let node = Some(Node::new(key));
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                NodeId(index)
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Frees the slot of a node that has already been unlinked and hands back its key.
    fn release(&mut self, id: NodeId) -> K {
        let node = self.nodes[id.0]
            .take()
            .expect("Only live nodes are released");
        self.free.push(id.0);
        node.key
    }

    fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Follows a link stored in the tree. Links always point at live nodes.
    fn get(&self, id: NodeId) -> &Node<K> {
        self.node(id).expect("Tree links point at live nodes")
    }

    fn get_mut(&mut self, id: NodeId) -> &mut Node<K> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .expect("Tree links point at live nodes")
    }

    /// In debug builds, assert the BST ordering between `id` and its children.
    fn check_local(&self, id: NodeId)
    where
        K: Ord,
    {
        if cfg!(debug_assertions) {
            let node = self.get(id);
            if let Some(left) = node.left {
                assert!(self.get(left).key < node.key);
            }
            if let Some(right) = node.right {
                assert!(self.get(right).key > node.key);
            }
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    /// Prints the root handle and then every node in pre-order. Children are printed as handles
    /// so a tree that has degraded into a long list doesn't recurse once per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = Vec::new();
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.get(id);
            stack.extend(node.right);
            stack.extend(node.left);
            nodes.push(DebugNode { id, node });
        }

        f.debug_struct("Tree")
            .field("root", &self.root)
            .field("nodes", &nodes)
            .finish()
    }
}

/// Borrowed view of a single node with its children shown as handles.
struct DebugNode<'a, K> {
    id: NodeId,
    node: &'a Node<K>,
}

impl<K> fmt::Debug for DebugNode<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("key", &self.node.key)
            .field("left", &self.node.left)
            .field("right", &self.node.right)
            .finish()
    }
}
