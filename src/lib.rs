//! A mutable, key-only Binary Search Tree (BST) that can explain its own
//! lookups.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## Search paths
//!
//! The tree in this crate additionally records, on request, the full trail of
//! nodes a lookup visits. [`Tree::search_path`] returns a [`SearchPath`]: one
//! [`PathStep`] per visited node carrying the node's key, the comparison that
//! decided the next move, and whether the node has children. Callers use this
//! to narrate a lookup one step at a time or to replay it visually with their
//! own pacing - the tree itself defines no timing and performs no I/O.
//!
//! ```
//! use pathbst::Tree;
//!
//! let mut tree = Tree::new();
//! for key in vec![5, 3, 8, 1, 4] {
//!     tree.insert(key);
//! }
//!
//! let path = tree.search_path(&4);
//! let visited: Vec<_> = path.keys().copied().collect();
//! assert_eq!(visited, [5, 3, 4]);
//! assert!(path.found());
//! ```
//!
//! The tree never balances itself; keys inserted in sorted order degenerate
//! it into a chain. It stores each key exactly once, holds no parent
//! back-pointers, and is single-threaded: callers sharing a tree across
//! execution contexts must serialize their own access.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod path;
pub mod tree;

pub use path::{PathStep, SearchPath};
pub use tree::{DeleteOutcome, InsertOutcome, Tree};
