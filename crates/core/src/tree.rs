//! Hierarchical key-value store addressed by dotted keys

use crate::key::{split_key, PathError};
use crate::node::{Branch, Node};
use crate::walk;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// A tree of values addressed by dotted keys
///
/// `set("menu.file.open", v)` creates the `menu` and `file` branches on the
/// way down; `get("menu.file")` returns the whole subtree. After any
/// `remove`, no branch below the root is left empty.
///
/// The tree owns its data and performs no locking. Share it across threads
/// behind a `Mutex`/`RwLock` if needed.
///
/// # Example
/// ```
/// use m17n_core::{Node, PathTree};
///
/// let mut tree = PathTree::new();
/// tree.set("menu.file.open", "Open")?;
/// tree.set("menu.file.save", "Save")?;
///
/// assert_eq!(tree.get_leaf("menu.file.open"), Some(&"Open"));
/// assert_eq!(tree.len(), 2);
///
/// tree.remove("menu.file.open");
/// tree.remove("menu.file.save");
/// assert!(tree.get("menu").is_none());
/// # Ok::<(), m17n_core::PathError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PathTree<V> {
    root: Branch<V>,
}

impl<V> PathTree<V> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            root: Branch::default(),
        }
    }

    /// Create a tree seeded from a nested, flat or mixed source
    ///
    /// See [`merge`](Self::merge) for how the source is absorbed.
    pub fn from_source<I>(source: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = (String, Node<V>)>,
    {
        let mut tree = Self::new();
        tree.merge(source)?;
        Ok(tree)
    }

    /// Borrow the node stored at `key`
    ///
    /// Returns the leaf, or the whole subtree when `key` names a branch. The
    /// borrow is a live view into the tree, not a copy; clone it to keep a
    /// snapshot. Missing keys, keys that descend past a leaf and malformed
    /// keys all return `None`.
    pub fn get(&self, key: &str) -> Option<&Node<V>> {
        let segments = split_key(key).ok()?;
        let (last, parents) = segments.split_last()?;

        let mut current = &self.root;
        for segment in parents {
            current = current.get(*segment)?.as_branch()?;
        }
        current.get(*last)
    }

    /// Borrow the leaf value stored at `key`
    pub fn get_leaf(&self, key: &str) -> Option<&V> {
        self.get(key).and_then(Node::as_leaf)
    }

    /// Whether `key` names a leaf or a branch
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Store `value` at `key`
    ///
    /// Missing branches are created. Whatever sits at `key` is replaced, and a
    /// leaf found on the way down is replaced by a fresh branch.
    pub fn set(&mut self, key: &str, value: V) -> Result<(), PathError> {
        let segments = split_key(key)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(PathError::EmptyKey);
        };

        let mut current = &mut self.root;
        for segment in parents {
            current = current
                .entry((*segment).to_owned())
                .or_insert_with(Node::branch)
                .make_branch();
        }
        current.insert((*last).to_owned(), Node::Leaf(value));
        Ok(())
    }

    /// Remove the node at `key` and prune branches left empty
    ///
    /// Returns the detached node. Removing a missing or malformed key is a
    /// no-op. The root itself is never removed and may end up empty.
    pub fn remove(&mut self, key: &str) -> Option<Node<V>> {
        let segments = split_key(key).ok()?;
        remove_pruning(&mut self.root, &segments)
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.root = Branch::default();
    }

    /// Absorb every leaf of `source` into the tree
    ///
    /// Source keys may be dotted at any level and values may nest arbitrarily;
    /// each leaf is written with [`set`](Self::set) under the joined path, in
    /// breadth-first order. Leaves on the same level keep the source's
    /// iteration order, so the later one wins a collision. All keys are
    /// validated first: on error the tree is left unchanged.
    pub fn merge<I>(&mut self, source: I) -> Result<(), PathError>
    where
        I: IntoIterator<Item = (String, Node<V>)>,
    {
        let leaves = walk::into_leaves(source);
        for (key, _) in &leaves {
            split_key(key)?;
        }

        let count = leaves.len();
        for (key, value) in leaves {
            self.set(&key, value)?;
        }
        debug!(leaves = count, "merged source into tree");
        Ok(())
    }

    /// Flat mapping from full dotted key to leaf value
    pub fn flatten(&self) -> BTreeMap<String, V>
    where
        V: Clone,
    {
        walk::leaves(&self.root)
            .into_iter()
            .map(|(key, value)| (key, value.clone()))
            .collect()
    }

    /// All leaf keys in lexicographic order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = walk::leaves(&self.root)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        keys.sort_unstable();
        keys
    }

    /// The `n`-th leaf key in lexicographic order
    pub fn key(&self, n: usize) -> Option<String> {
        self.keys().into_iter().nth(n)
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        walk::count_leaves(&self.root)
    }

    /// Whether the tree holds no leaves
    pub fn is_empty(&self) -> bool {
        // Branches are never left empty, so any child implies a leaf
        self.root.is_empty()
    }

    /// Borrow the root mapping
    pub fn root(&self) -> &Branch<V> {
        &self.root
    }
}

impl PathTree<serde_json::Value> {
    /// Build a tree from a JSON document
    ///
    /// An object is merged (dotted keys expand); any other value, `null`
    /// included, yields an empty tree.
    pub fn from_json(value: serde_json::Value) -> Result<Self, PathError> {
        match Node::from(value) {
            Node::Branch(children) => Self::from_source(children),
            Node::Leaf(_) => Ok(Self::new()),
        }
    }

    /// Convert the tree into a nested JSON object
    pub fn into_json(self) -> serde_json::Value {
        serde_json::Value::from(Node::Branch(self.root))
    }
}

impl<V> Default for PathTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_pruning<V>(branch: &mut Branch<V>, segments: &[&str]) -> Option<Node<V>> {
    let (head, rest) = segments.split_first()?;
    if rest.is_empty() {
        return branch.shift_remove(*head);
    }

    let child = match branch.get_mut(*head)? {
        Node::Branch(children) => children,
        Node::Leaf(_) => return None,
    };
    let removed = remove_pruning(child, rest)?;

    // Ancestors above a non-empty branch are non-empty too, so pruning
    // stops on its own once this check fails.
    if child.is_empty() {
        branch.shift_remove(*head);
        trace!(segment = *head, "pruned empty branch");
    }
    Some(removed)
}

impl<V: Serialize> Serialize for PathTree<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for PathTree<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = Branch::<V>::deserialize(deserializer)?;
        Self::from_source(source).map_err(serde::de::Error::custom)
    }
}
