//! Tree nodes: leaves and branches

use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Children of a branch, keyed by segment, in insertion order
pub type Branch<V> = IndexMap<String, Node<V>, RandomState>;

/// A node in a [`PathTree`](crate::PathTree)
///
/// Whether a node is a leaf or a branch is decided by the variant, never by
/// inspecting the value: a map-shaped `V` stored through `set` stays a leaf.
///
/// Serialized untagged, so a map in a document becomes a branch and anything
/// else a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node<V> {
    /// Interior node
    Branch(Branch<V>),
    /// Stored value
    Leaf(V),
}

impl<V> Node<V> {
    /// Create an empty branch
    pub fn branch() -> Self {
        Node::Branch(Branch::default())
    }

    /// Whether this node is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Borrow the leaf value, if any
    pub fn as_leaf(&self) -> Option<&V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Borrow the children, if this is a branch
    pub fn as_branch(&self) -> Option<&Branch<V>> {
        match self {
            Node::Branch(children) => Some(children),
            Node::Leaf(_) => None,
        }
    }

    /// Take the leaf value, if any
    pub fn into_leaf(self) -> Option<V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Turn this slot into a branch, discarding a leaf, and borrow it
    pub(crate) fn make_branch(&mut self) -> &mut Branch<V> {
        if self.is_leaf() {
            *self = Node::branch();
        }
        match self {
            Node::Branch(children) => children,
            Node::Leaf(_) => unreachable!("leaf slot was replaced with a branch"),
        }
    }
}

impl<V> From<Branch<V>> for Node<V> {
    fn from(children: Branch<V>) -> Self {
        Node::Branch(children)
    }
}

/// JSON objects become branches, keeping the document's key order; every
/// other value, `null` included, becomes a leaf
impl From<serde_json::Value> for Node<serde_json::Value> {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => Node::Branch(
                map.into_iter()
                    .map(|(key, child)| (key, Node::from(child)))
                    .collect(),
            ),
            leaf => Node::Leaf(leaf),
        }
    }
}

/// Inverse of the `From<serde_json::Value>` conversion
impl From<Node<serde_json::Value>> for serde_json::Value {
    fn from(node: Node<serde_json::Value>) -> Self {
        match node {
            Node::Leaf(value) => value,
            Node::Branch(children) => serde_json::Value::Object(
                children
                    .into_iter()
                    .map(|(key, child)| (key, serde_json::Value::from(child)))
                    .collect(),
            ),
        }
    }
}
