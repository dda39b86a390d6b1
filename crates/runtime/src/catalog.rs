//! Message catalogs
//!
//! A catalog is either a nested mapping of groups and messages, addressed by
//! dotted keys, or a flat sequence addressed by index. Lookup never fails:
//! anything that does not resolve to a message yields `None`.

use crate::runtime::M17n;
use ahash::AHashMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Separates the segments of a [`MessageKey::Path`]
pub const KEY_SEPARATOR: char = '.';

/// Renders a message from its arguments
pub type RenderFn = Arc<dyn Fn(&Value, &M17n) -> String + Send + Sync>;

/// A single translatable message
#[derive(Clone)]
pub enum Message {
    /// Literal text
    Text(String),
    /// Computed from arguments and the runtime
    Render(RenderFn),
}

impl Message {
    /// Wrap a render function
    pub fn render<F>(f: F) -> Self
    where
        F: Fn(&Value, &M17n) -> String + Send + Sync + 'static,
    {
        Message::Render(Arc::new(f))
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Message::Render(_) => f.write_str("Render(..)"),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

/// Entry of a nested catalog
#[derive(Debug, Clone)]
pub enum CatalogEntry {
    Group(AHashMap<String, CatalogEntry>),
    Message(Message),
}

impl From<Message> for CatalogEntry {
    fn from(message: Message) -> Self {
        CatalogEntry::Message(message)
    }
}

impl From<&str> for CatalogEntry {
    fn from(text: &str) -> Self {
        CatalogEntry::Message(text.into())
    }
}

/// Key into a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey<'a> {
    /// Dotted path, e.g. `menu.file.open`
    Path(&'a str),
    /// Position in an indexed catalog
    Index(usize),
}

impl<'a> From<&'a str> for MessageKey<'a> {
    fn from(path: &'a str) -> Self {
        MessageKey::Path(path)
    }
}

impl From<usize> for MessageKey<'_> {
    fn from(index: usize) -> Self {
        MessageKey::Index(index)
    }
}

/// Messages for one locale
#[derive(Debug, Clone)]
pub enum Catalog {
    Nested(AHashMap<String, CatalogEntry>),
    Indexed(Vec<Message>),
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::Nested(AHashMap::default())
    }
}

impl Catalog {
    /// Build a nested catalog from JSON
    ///
    /// Strings become messages and objects become groups. Other values are
    /// skipped; a non-object document yields an empty catalog.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Catalog::Nested(group_from_json(map)),
            _ => Catalog::default(),
        }
    }

    /// Resolve `key` to a message
    pub fn lookup(&self, key: MessageKey<'_>) -> Option<&Message> {
        match (self, key) {
            (Catalog::Indexed(messages), MessageKey::Index(index)) => messages.get(index),
            (Catalog::Indexed(messages), MessageKey::Path(path)) => {
                messages.get(path.parse::<usize>().ok()?)
            }
            (Catalog::Nested(root), MessageKey::Index(index)) => {
                match root.get(index.to_string().as_str())? {
                    CatalogEntry::Message(message) => Some(message),
                    CatalogEntry::Group(_) => None,
                }
            }
            (Catalog::Nested(root), MessageKey::Path(path)) => lookup_path(root, path),
        }
    }
}

fn lookup_path<'a>(root: &'a AHashMap<String, CatalogEntry>, path: &str) -> Option<&'a Message> {
    let mut group = root;
    let mut segments = path.split(KEY_SEPARATOR).peekable();

    while let Some(segment) = segments.next() {
        match group.get(segment)? {
            CatalogEntry::Group(children) => group = children,
            CatalogEntry::Message(message) => {
                // A message must be the last segment
                return segments.peek().is_none().then_some(message);
            }
        }
    }
    None
}

fn group_from_json(map: serde_json::Map<String, Value>) -> AHashMap<String, CatalogEntry> {
    map.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, CatalogEntry::Message(Message::Text(text)))),
            Value::Object(children) => Some((key, CatalogEntry::Group(group_from_json(children)))),
            _ => None,
        })
        .collect()
}
