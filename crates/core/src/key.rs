//! Dotted key parsing
//!
//! A key such as `menu.file.open` addresses a path of segments from the root
//! of a [`PathTree`](crate::PathTree). Keys are split once, up front, and
//! every segment must be non-empty.

use smallvec::SmallVec;
use thiserror::Error;

/// Reserved separator between key segments
pub const SEPARATOR: char = '.';

/// Segments of a split key
///
/// Most catalog keys are shallow, so eight segments stay on the stack.
pub type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Errors raised for keys that cannot address a tree entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The key is the empty string
    #[error("key is empty")]
    EmptyKey,

    /// A leading, trailing or doubled separator produced an empty segment
    #[error("key '{key}' has an empty segment at position {position}")]
    EmptySegment {
        /// The offending key
        key: String,
        /// Zero-based index of the empty segment
        position: usize,
    },
}

/// Split a dotted key into its segments
///
/// # Example
/// ```
/// use m17n_core::key::split_key;
///
/// let segments = split_key("menu.file.open")?;
/// assert_eq!(segments.as_slice(), &["menu", "file", "open"]);
/// # Ok::<(), m17n_core::PathError>(())
/// ```
pub fn split_key(key: &str) -> Result<Segments<'_>, PathError> {
    if key.is_empty() {
        return Err(PathError::EmptyKey);
    }

    let mut segments = Segments::new();
    for (position, segment) in key.split(SEPARATOR).enumerate() {
        if segment.is_empty() {
            return Err(PathError::EmptySegment {
                key: key.to_owned(),
                position,
            });
        }
        segments.push(segment);
    }
    Ok(segments)
}

/// Join path elements with the separator
///
/// Elements are not inspected; an element that itself contains the separator
/// is re-split when the joined key is parsed.
pub fn join_path<S: AsRef<str>>(path: &[S]) -> String {
    let capacity = path.iter().map(|s| s.as_ref().len() + 1).sum();
    let mut key = String::with_capacity(capacity);
    for (i, element) in path.iter().enumerate() {
        if i > 0 {
            key.push(SEPARATOR);
        }
        key.push_str(element.as_ref());
    }
    key
}
