//! The mutable, key-only BST engine.
//!
//! All operations run to completion synchronously and touch nothing outside
//! the tree. Edge cases are total: inserting a duplicate or deleting an
//! absent key mutate nothing and report a dedicated [`InsertOutcome`] /
//! [`DeleteOutcome`] variant instead of failing.
//!
//! # Examples
//!
//! ```
//! use pathbst::{DeleteOutcome, InsertOutcome, Tree};
//!
//! let mut tree = Tree::new();
//!
//! assert_eq!(tree.insert(5), InsertOutcome::Inserted);
//! assert_eq!(tree.insert(5), InsertOutcome::DuplicateIgnored);
//!
//! assert!(tree.contains(&5));
//! assert_eq!(tree.delete(&5), DeleteOutcome::Deleted);
//! assert_eq!(tree.delete(&5), DeleteOutcome::NotFound);
//! ```

use std::cmp::Ordering;

use crate::path::{PathStep, SearchPath};

/// The result of a call to [`Tree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key wasn't present and a new node was created for it.
    Inserted,
    /// The key was already present. The tree was left untouched.
    DuplicateIgnored,
}

/// The result of a call to [`Tree::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The key was found and its node removed from the tree.
    Deleted,
    /// The key wasn't present. The tree was left untouched.
    NotFound,
}

type Link<K> = Option<Box<Node<K>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// A mutable Binary Search Tree storing each key exactly once.
///
/// Every node exclusively owns its children and nodes hold no pointer back to
/// their parent, so any operation needing ancestor context derives it from a
/// freshly computed [search path](Tree::search_path) instead.
///
/// The tree does not balance itself: its shape is entirely determined by the
/// insertion and deletion history.
///
/// # Examples
///
/// ```
/// use pathbst::Tree;
///
/// let mut tree = Tree::new();
/// for key in vec![5, 3, 8, 1, 4] {
///     tree.insert(key);
/// }
///
/// // In-order traversal yields the keys in ascending order.
/// assert_eq!(tree.in_order(), [&1, &3, &4, &5, &8]);
/// assert_eq!(tree.height(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many keys the tree holds. Counted fresh on every call; the tree
    /// caches nothing.
    pub fn len(&self) -> usize {
        Self::count(self.root.as_deref())
    }

    /// Removes every node, leaving the tree empty.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Ensures `key` is present in the tree exactly once.
    ///
    /// If the tree is empty the new node becomes the root; otherwise the key
    /// descends from the root and becomes a new leaf where the matching child
    /// link is absent. Inserting a key that is already present is a no-op,
    /// not an update.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathbst::{InsertOutcome, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.insert(1), InsertOutcome::Inserted);
    /// assert_eq!(tree.insert(1), InsertOutcome::DuplicateIgnored);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> InsertOutcome
    where
        K: Ord,
    {
        Self::insert_at(&mut self.root, key)
    }

    /// Potentially finds the stored key equal to the given key. If no node
    /// holds it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathbst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether the tree holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Performs the same descent as [`find`](Self::find) but records every
    /// visited node, starting at the root, before each comparison decides the
    /// next move.
    ///
    /// The returned path ends either on the node matching `key` or on the
    /// deepest node reached before a required child link was absent. On an
    /// empty tree the path is empty - there is no node to report. The path
    /// borrows the tree, so it stays valid exactly until the next mutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathbst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in vec![5, 3, 8, 1, 4] {
    ///     tree.insert(key);
    /// }
    ///
    /// // 9 > 5, then 9 > 8, and 8 has no right child: a miss.
    /// let path = tree.search_path(&9);
    /// let visited: Vec<_> = path.keys().copied().collect();
    /// assert_eq!(visited, [5, 8]);
    /// assert!(!path.found());
    /// ```
    pub fn search_path(&self, key: &K) -> SearchPath<'_, K>
    where
        K: Ord,
    {
        let mut steps = Vec::new();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            let decision = key.cmp(&node.key);
            steps.push(PathStep::new(
                &node.key,
                decision,
                node.left.is_some(),
                node.right.is_some(),
            ));
            current = match decision {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => break,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        SearchPath::new(steps)
    }

    /// Removes the node holding `key`, if any.
    ///
    /// A leaf is simply detached; a node with one child is replaced by that
    /// child's subtree; a node with two children takes over the key of its
    /// in-order successor (the leftmost node of its right subtree) and the
    /// successor's node is detached instead. Deleting an absent key is a
    /// no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathbst::{DeleteOutcome, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for key in vec![5, 3, 8, 1, 4] {
    ///     tree.insert(key);
    /// }
    ///
    /// // 3 has two children, so its in-order successor 4 takes its place.
    /// assert_eq!(tree.delete(&3), DeleteOutcome::Deleted);
    /// assert_eq!(tree.in_order(), [&1, &4, &5, &8]);
    /// assert_eq!(tree.delete(&3), DeleteOutcome::NotFound);
    /// ```
    pub fn delete(&mut self, key: &K) -> DeleteOutcome
    where
        K: Ord,
    {
        Self::delete_at(&mut self.root, key)
    }

    /// All keys in ascending order: left subtree, node, right subtree.
    ///
    /// The sequence is computed fresh on every call.
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        Self::collect_in_order(self.root.as_deref(), &mut keys);
        keys
    }

    /// All keys in pre-order: node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        Self::collect_pre_order(self.root.as_deref(), &mut keys);
        keys
    }

    /// All keys in post-order: left subtree, right subtree, node.
    pub fn post_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        Self::collect_post_order(self.root.as_deref(), &mut keys);
        keys
    }

    /// The height of the tree: `-1` when empty, `0` for a single node, and
    /// otherwise one more than the taller subtree below the root.
    ///
    /// The `-1` convention for an empty tree is contractual - callers size
    /// per-level spacing directly from this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathbst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        Self::height_at(self.root.as_deref())
    }

    fn insert_at(link: &mut Link<K>, key: K) -> InsertOutcome
    where
        K: Ord,
    {
        match link {
            None => {
                *link = Some(Box::new(Node::new(key)));
                InsertOutcome::Inserted
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_at(&mut node.left, key),
                Ordering::Equal => InsertOutcome::DuplicateIgnored,
                Ordering::Greater => Self::insert_at(&mut node.right, key),
            },
        }
    }

    fn delete_at(link: &mut Link<K>, key: &K) -> DeleteOutcome
    where
        K: Ord,
    {
        if let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => return Self::delete_at(&mut node.left, key),
                Ordering::Greater => return Self::delete_at(&mut node.right, key),
                Ordering::Equal => {}
            }
        } else {
            return DeleteOutcome::NotFound;
        }

        // `link` holds the node to remove.
        Self::remove_at(link);
        DeleteOutcome::Deleted
    }

    /// Removes the node at `link`, which must be occupied, according to its
    /// structural case: a leaf empties the link, a single child subtree moves
    /// up untouched, and a node with two children takes over the key of its
    /// in-order successor while the successor's node is detached instead.
    fn remove_at(link: &mut Link<K>) {
        if let Some(mut node) = link.take() {
            match (node.left.take(), node.right.take()) {
                (None, None) => {}
                (Some(child), None) | (None, Some(child)) => *link = Some(child),
                (Some(left), Some(right)) => {
                    node.left = Some(left);
                    node.right = Some(right);
                    // The successor has no left child, so detaching it is a
                    // leaf or one-child removal and the recursion bottoms out
                    // after one structural step.
                    if let Some(successor) = Self::take_min(&mut node.right) {
                        node.key = successor;
                    }
                    *link = Some(node);
                }
            }
        }
    }

    /// Detaches the node with the smallest key below `link` and returns its
    /// key, replacing it with its right subtree. `None` when `link` is empty.
    fn take_min(link: &mut Link<K>) -> Option<K> {
        if link.as_ref()?.left.is_some() {
            Self::take_min(&mut link.as_mut()?.left)
        } else {
            let node = link.take()?;
            let Node { key, right, .. } = *node;
            *link = right;
            Some(key)
        }
    }

    fn collect_in_order<'a>(node: Option<&'a Node<K>>, keys: &mut Vec<&'a K>) {
        if let Some(node) = node {
            Self::collect_in_order(node.left.as_deref(), keys);
            keys.push(&node.key);
            Self::collect_in_order(node.right.as_deref(), keys);
        }
    }

    fn collect_pre_order<'a>(node: Option<&'a Node<K>>, keys: &mut Vec<&'a K>) {
        if let Some(node) = node {
            keys.push(&node.key);
            Self::collect_pre_order(node.left.as_deref(), keys);
            Self::collect_pre_order(node.right.as_deref(), keys);
        }
    }

    fn collect_post_order<'a>(node: Option<&'a Node<K>>, keys: &mut Vec<&'a K>) {
        if let Some(node) = node {
            Self::collect_post_order(node.left.as_deref(), keys);
            Self::collect_post_order(node.right.as_deref(), keys);
            keys.push(&node.key);
        }
    }

    fn height_at(node: Option<&Node<K>>) -> isize {
        match node {
            None => -1,
            Some(node) => {
                1 + Self::height_at(node.left.as_deref()).max(Self::height_at(node.right.as_deref()))
            }
        }
    }

    fn count(node: Option<&Node<K>>) -> usize {
        node.map_or(0, |node| {
            1 + Self::count(node.left.as_deref()) + Self::count(node.right.as_deref())
        })
    }
}
