//! This crate exposes an ordered set built on a plain, unbalanced Binary Search
//! Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`. This tree never rebalances itself so
//! inserting keys in sorted order degrades it to a linked list with a height
//! of `N`.
//!
//! ## Set semantics
//!
//! Keys are unique. Inserting a key that is already present and deleting a key
//! that is absent are both no-ops.
//!
//! ```
//! use bst_set::arena::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.insert(5));
//! assert!(!tree.insert(5));
//!
//! assert!(tree.contains(&5));
//! assert!(tree.delete(&5));
//! assert!(!tree.delete(&5));
//! assert!(tree.is_empty());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod arena;
mod error;
mod node;
mod search;

pub use error::SpliceError;
pub use node::NodeId;
pub use search::SearchResult;
