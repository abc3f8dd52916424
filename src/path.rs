//! Read-only views over the trail of nodes one lookup visited.
//!
//! A [`SearchPath`] is produced by [`Tree::search_path`][crate::Tree::search_path]
//! and never retained by the tree. It borrows the tree immutably, so the
//! borrow checker guarantees the view is only readable until the next
//! mutation. Callers turn it into step-by-step log lines or feed it to a
//! timer-driven loop that highlights one node per tick; the path itself
//! carries no notion of timing.

use std::cmp::Ordering;
use std::slice;
use std::vec;

/// One visited node in a [`SearchPath`].
///
/// A step records everything needed to narrate or draw the visit: the node's
/// key, the comparison against the target key that decided the next move, and
/// whether the node has a left or right child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep<'a, K> {
    key: &'a K,
    decision: Ordering,
    has_left: bool,
    has_right: bool,
}

impl<'a, K> PathStep<'a, K> {
    pub(crate) fn new(key: &'a K, decision: Ordering, has_left: bool, has_right: bool) -> Self {
        Self {
            key,
            decision,
            has_left,
            has_right,
        }
    }

    /// The key stored in the visited node.
    pub fn key(&self) -> &'a K {
        self.key
    }

    /// How the target key compared against [`key`](Self::key):
    /// [`Ordering::Less`] means the lookup continued into the left subtree,
    /// [`Ordering::Greater`] into the right subtree, and [`Ordering::Equal`]
    /// means the lookup stopped here on a match.
    pub fn decision(&self) -> Ordering {
        self.decision
    }

    /// Whether the visited node has a left child.
    pub fn has_left(&self) -> bool {
        self.has_left
    }

    /// Whether the visited node has a right child.
    pub fn has_right(&self) -> bool {
        self.has_right
    }

    /// Whether this step's node matched the target key.
    pub fn is_match(&self) -> bool {
        self.decision == Ordering::Equal
    }
}

/// The ordered trail of nodes visited while descending from the root toward a
/// target key.
///
/// The trail ends either on the node holding the target (see [`found`]) or on
/// the deepest node reached before the branch that would have continued was
/// absent. An empty path means the tree itself was empty - distinct from a
/// miss on a non-empty tree, which still visits at least the root.
///
/// [`found`]: Self::found
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use pathbst::Tree;
///
/// let mut tree = Tree::new();
/// for key in vec![5, 3, 8] {
///     tree.insert(key);
/// }
///
/// // A miss: 9 > 5, then 9 > 8, and 8 has no right child.
/// let path = tree.search_path(&9);
/// assert!(!path.found());
/// assert_eq!(path.len(), 2);
///
/// let last = path.terminal().unwrap();
/// assert_eq!(last.key(), &8);
/// assert_eq!(last.decision(), Ordering::Greater);
/// assert!(!last.has_right());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath<'a, K> {
    steps: Vec<PathStep<'a, K>>,
}

impl<'a, K> SearchPath<'a, K> {
    pub(crate) fn new(steps: Vec<PathStep<'a, K>>) -> Self {
        Self { steps }
    }

    /// How many nodes the lookup visited.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no node was visited at all, i.e. the tree was empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the lookup ended on a node holding the target key.
    pub fn found(&self) -> bool {
        self.steps.last().map_or(false, PathStep::is_match)
    }

    /// The deepest node the lookup reached: the match on success, the last
    /// node before the missing branch on a miss, or `None` on an empty tree.
    pub fn terminal(&self) -> Option<&PathStep<'a, K>> {
        self.steps.last()
    }

    /// The step at `index`, in root-to-terminal order. Step-pacing callers
    /// use this to highlight one node per tick.
    pub fn get(&self, index: usize) -> Option<&PathStep<'a, K>> {
        self.steps.get(index)
    }

    /// Iterates over the visited steps in order.
    pub fn steps(&self) -> slice::Iter<'_, PathStep<'a, K>> {
        self.steps.iter()
    }

    /// Iterates over just the visited keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &'a K> + '_ {
        self.steps.iter().map(|step| step.key)
    }
}

impl<'a, K> IntoIterator for SearchPath<'a, K> {
    type Item = PathStep<'a, K>;
    type IntoIter = vec::IntoIter<PathStep<'a, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, 'b, K> IntoIterator for &'b SearchPath<'a, K> {
    type Item = &'b PathStep<'a, K>;
    type IntoIter = slice::Iter<'b, PathStep<'a, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::tree::Tree;

    fn sample_tree() -> Tree<i32> {
        let mut tree = Tree::new();
        for key in vec![5, 3, 8, 1, 4] {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn path_to_present_key_ends_on_match() {
        let tree = sample_tree();
        let path = tree.search_path(&4);

        let visited: Vec<i32> = path.keys().copied().collect();
        assert_eq!(visited, [5, 3, 4]);
        assert!(path.found());

        let decisions: Vec<Ordering> = path.steps().map(|step| step.decision()).collect();
        assert_eq!(
            decisions,
            [Ordering::Less, Ordering::Greater, Ordering::Equal]
        );
    }

    #[test]
    fn path_to_absent_key_stops_at_missing_branch() {
        let tree = sample_tree();
        let path = tree.search_path(&9);

        let visited: Vec<i32> = path.keys().copied().collect();
        assert_eq!(visited, [5, 8]);
        assert!(!path.found());

        let last = path.terminal().expect("non-empty tree visits the root");
        assert_eq!(last.decision(), Ordering::Greater);
        assert!(!last.has_right());
    }

    #[test]
    fn path_on_empty_tree_is_empty() {
        let tree: Tree<i32> = Tree::new();
        let path = tree.search_path(&1);

        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert!(!path.found());
        assert_eq!(path.terminal(), None);
    }

    #[test]
    fn steps_expose_child_structure() {
        let tree = sample_tree();
        let path = tree.search_path(&4);

        let root = path.get(0).unwrap();
        assert!(root.has_left() && root.has_right());

        let inner = path.get(1).unwrap();
        assert!(inner.has_left() && inner.has_right());

        let target = path.get(2).unwrap();
        assert!(target.is_match());
        assert!(!target.has_left() && !target.has_right());

        assert_eq!(path.get(3), None);
    }

    #[test]
    fn indexed_stepping_visits_every_node_once() {
        let tree = sample_tree();
        let path = tree.search_path(&1);

        // Drive the path the way a timer-based caller would: one index per
        // tick until the trail runs out.
        let mut highlighted = Vec::new();
        for tick in 0..path.len() {
            if let Some(step) = path.get(tick) {
                highlighted.push(*step.key());
            }
        }
        assert_eq!(highlighted, [5, 3, 1]);
    }

    #[test]
    fn by_value_iteration_matches_by_ref() {
        let tree = sample_tree();
        let path = tree.search_path(&8);

        let by_ref: Vec<i32> = (&path).into_iter().map(|step| *step.key()).collect();
        let by_value: Vec<i32> = path.into_iter().map(|step| *step.key()).collect();
        assert_eq!(by_ref, by_value);
        assert_eq!(by_value, [5, 8]);
    }
}
