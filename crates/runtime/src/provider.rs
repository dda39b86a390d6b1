//! Source of locale-aware formatters

use crate::datetime::{BasicDateTimeFormat, DateStyle, DateTimeFormat};
use crate::locale;
use crate::number::{BasicNumberFormat, NumberFormat, NumberOptions};
use std::sync::Arc;

/// Builds formatters for a locale
///
/// The runtime calls the provider once per distinct format id and caches the
/// result, so building may be expensive.
pub trait FormatProvider: Send + Sync {
    fn date_time_format(&self, locale: &str, style: DateStyle) -> Arc<dyn DateTimeFormat>;

    fn number_format(&self, locale: &str, options: NumberOptions) -> Arc<dyn NumberFormat>;
}

/// Built-in provider backed by [`locale::conventions`]
///
/// Dates use English month and weekday names in every locale; only field
/// order and the 12/24-hour clock vary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFormatProvider;

impl FormatProvider for BasicFormatProvider {
    fn date_time_format(&self, locale: &str, style: DateStyle) -> Arc<dyn DateTimeFormat> {
        Arc::new(BasicDateTimeFormat::new(style, locale::conventions(locale)))
    }

    fn number_format(&self, locale: &str, options: NumberOptions) -> Arc<dyn NumberFormat> {
        Arc::new(BasicNumberFormat::new(options, locale::conventions(locale)))
    }
}
