//! Formatting errors

use thiserror::Error;

/// Errors raised while building a formatter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Date style index outside 0..=7
    #[error("unknown date style index {0} (expected 0-7)")]
    UnknownDateStyle(usize),

    /// Numeric format id that maps to no style
    #[error("unknown number format id {0}")]
    UnknownNumberFormat(i64),

    /// Currency code that is not three ASCII letters
    #[error("invalid currency code '{0}'")]
    InvalidCurrencyCode(String),

    /// Minimum integer digits outside 1..=21
    #[error("minimum integer digits must be between 1 and 21, got {0}")]
    IntegerDigitsOutOfRange(u32),
}
