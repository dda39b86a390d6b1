//! m17n runtime - message lookup and locale-aware formatting
//!
//! This crate provides:
//! - Catalog lookup by dotted key or index, with render functions
//! - Plural, ordinal and select case selection
//! - Date/time and number/currency formatting with per-instance caching
//! - A pluggable `FormatProvider` with a built-in implementation

pub mod catalog;
pub mod datetime;
pub mod error;
pub mod locale;
pub mod number;
pub mod plural;
pub mod provider;
pub mod runtime;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogEntry, Message, MessageKey, KEY_SEPARATOR};
pub use datetime::{DateStyle, DateTimeFormat};
pub use error::FormatError;
pub use number::{NumberFormat, NumberFormatId, NumberOptions};
pub use plural::{Cases, PluralCategory, PluralFn};
pub use provider::{BasicFormatProvider, FormatProvider};
pub use runtime::M17n;
