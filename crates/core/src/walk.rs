//! Breadth-first worklist over nested nodes
//!
//! Both directions of the flatten/merge pair use the same traversal: a FIFO
//! queue of `(path, node)` items, where a branch is expanded into one item per
//! child and a leaf is emitted under its joined path. Items are processed
//! level by level, so the emission order is breadth-first.

use crate::key::join_path;
use crate::node::{Branch, Node};
use smallvec::SmallVec;
use std::collections::VecDeque;

type BorrowedPath<'a> = SmallVec<[&'a str; 8]>;
type OwnedPath = SmallVec<[String; 4]>;

/// Collect every leaf below `root`, borrowing values
pub(crate) fn leaves<V>(root: &Branch<V>) -> Vec<(String, &V)> {
    let mut out = Vec::new();
    let mut queue: VecDeque<(BorrowedPath<'_>, &Node<V>)> = root
        .iter()
        .map(|(key, node)| (BorrowedPath::from_elem(key.as_str(), 1), node))
        .collect();

    while let Some((path, node)) = queue.pop_front() {
        match node {
            Node::Leaf(value) => out.push((join_path(&path), value)),
            Node::Branch(children) => {
                for (key, child) in children {
                    let mut child_path = path.clone();
                    child_path.push(key.as_str());
                    queue.push_back((child_path, child));
                }
            }
        }
    }
    out
}

/// Count leaves below `root` without building keys
pub(crate) fn count_leaves<V>(root: &Branch<V>) -> usize {
    let mut count = 0;
    let mut queue: VecDeque<&Branch<V>> = VecDeque::from([root]);

    while let Some(branch) = queue.pop_front() {
        for child in branch.values() {
            match child {
                Node::Leaf(_) => count += 1,
                Node::Branch(children) => queue.push_back(children),
            }
        }
    }
    count
}

/// Consume a source mapping into `(joined key, value)` pairs
///
/// Source keys are taken verbatim; a key containing the separator yields a
/// joined key with more segments than the source has levels.
pub(crate) fn into_leaves<V, I>(source: I) -> Vec<(String, V)>
where
    I: IntoIterator<Item = (String, Node<V>)>,
{
    let mut out = Vec::new();
    let mut queue: VecDeque<(OwnedPath, Node<V>)> = source
        .into_iter()
        .map(|(key, node)| (OwnedPath::from_elem(key, 1), node))
        .collect();

    while let Some((path, node)) = queue.pop_front() {
        match node {
            Node::Leaf(value) => out.push((join_path(&path), value)),
            Node::Branch(children) => {
                for (key, child) in children {
                    let mut child_path = path.clone();
                    child_path.push(key);
                    queue.push_back((child_path, child));
                }
            }
        }
    }
    out
}
