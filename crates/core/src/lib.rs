//! m17n core - hierarchical key-value storage for message catalogs
//!
//! This crate provides:
//! - Dotted key parsing with an explicit malformed-key policy
//! - A tagged leaf/branch node model
//! - `PathTree`: get/set/remove by dotted key, prefix retrieval, prune on
//!   remove, and the flatten/merge transform pair

pub mod key;
pub mod node;
pub mod tree;
mod walk;


// Re-export main types for convenience
pub use key::{PathError, SEPARATOR};
pub use node::{Branch, Node};
pub use tree::PathTree;
