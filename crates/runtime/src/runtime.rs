//! Per-locale message runtime
//!
//! # Caching
//!
//! Formatters are built lazily through the [`FormatProvider`] and cached per
//! instance, one per date style and one per normalized number format id.
//! The caches are `DashMap`s, so a runtime can be shared behind an `Arc` and
//! used from several threads without external locking.

use crate::catalog::{Catalog, Message, MessageKey};
use crate::datetime::{DateStyle, DateTimeFormat};
use crate::error::FormatError;
use crate::number::{NumberFormat, NumberFormatId, NumberOptions};
use crate::plural::{count_key, Cases, PluralCategory, PluralFn};
use crate::provider::{BasicFormatProvider, FormatProvider};
use chrono::{DateTime, FixedOffset};
use dashmap::DashMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Translation lookup, plural selection and formatting for one locale
pub struct M17n {
    locale: String,
    currency: String,
    plural: PluralFn,
    catalog: Catalog,
    provider: Arc<dyn FormatProvider>,
    date_formats: DashMap<DateStyle, Arc<dyn DateTimeFormat>>,
    number_formats: DashMap<NumberFormatId, Arc<dyn NumberFormat>>,
}

impl M17n {
    /// Create a runtime with an empty catalog and the built-in provider
    ///
    /// `default_currency` is validated lazily, on the first currency format.
    pub fn new<F>(locale: impl Into<String>, default_currency: impl Into<String>, plural: F) -> Self
    where
        F: Fn(f64, bool) -> PluralCategory + Send + Sync + 'static,
    {
        Self {
            locale: locale.into(),
            currency: default_currency.into(),
            plural: Arc::new(plural),
            catalog: Catalog::default(),
            provider: Arc::new(BasicFormatProvider),
            date_formats: DashMap::new(),
            number_formats: DashMap::new(),
        }
    }

    /// Use `catalog` for [`translate`](Self::translate)
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Build formatters with `provider`, dropping anything already cached
    pub fn with_provider(mut self, provider: Arc<dyn FormatProvider>) -> Self {
        self.provider = provider;
        self.date_formats.clear();
        self.number_formats.clear();
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Look up and render a message
    ///
    /// Text is returned as is and render functions are called with
    /// `(args, self)`. Keys that resolve to nothing give an empty string.
    pub fn translate<'k>(&self, key: impl Into<MessageKey<'k>>, args: &Value) -> String {
        match self.catalog.lookup(key.into()) {
            Some(Message::Text(text)) => text.clone(),
            Some(Message::Render(render)) => render(args, self),
            None => String::new(),
        }
    }

    /// Pick the cardinal plural case for `count`
    ///
    /// An exact-value case (`"0"`, `"2"`) matches `count` itself; otherwise
    /// the category of `count - offset` is selected.
    pub fn plural<'c>(&self, count: f64, cases: &'c Cases, offset: f64) -> &'c str {
        self.plural_case(count, cases, offset, false)
    }

    /// Pick the ordinal plural case for `count`
    pub fn ordinal<'c>(&self, count: f64, cases: &'c Cases, offset: f64) -> &'c str {
        self.plural_case(count, cases, offset, true)
    }

    /// Pick `cases[arg]`, falling back to `other`, then to the empty string
    pub fn select<'c>(&self, arg: &str, cases: &'c Cases) -> &'c str {
        cases
            .get(arg)
            .or_else(|| cases.get("other"))
            .unwrap_or_default()
    }

    fn plural_case<'c>(&self, count: f64, cases: &'c Cases, offset: f64, ordinal: bool) -> &'c str {
        if let Some(text) = cases.get(&count_key(count)) {
            return text;
        }
        let category = (self.plural)(count - offset, ordinal);
        self.select(category.as_str(), cases)
    }

    /// Format a date and/or time in one of the preset styles
    pub fn date_time(&self, value: &DateTime<FixedOffset>, style: DateStyle) -> String {
        let format = self
            .date_formats
            .entry(style)
            .or_insert_with(|| {
                debug!(locale = %self.locale, ?style, "building date formatter");
                self.provider.date_time_format(&self.locale, style)
            })
            .value()
            .clone();
        format.format(value)
    }

    /// Format a number
    ///
    /// Fails when `id` names an invalid currency code or digit count, or when
    /// `Currency` is requested and the default currency is invalid.
    pub fn number(&self, value: f64, id: impl Into<NumberFormatId>) -> Result<String, FormatError> {
        let id = id.into();
        if let Some(format) = self.number_formats.get(&id) {
            return Ok(format.format(value));
        }

        let options = NumberOptions::resolve(&id, &self.currency)?;
        debug!(locale = %self.locale, ?options, "building number formatter");
        let format = self
            .number_formats
            .entry(id)
            .or_insert_with(|| self.provider.number_format(&self.locale, options))
            .value()
            .clone();
        Ok(format.format(value))
    }

    /// Number of cached date formatters
    pub fn cached_date_formats(&self) -> usize {
        self.date_formats.len()
    }

    /// Number of cached number formatters
    pub fn cached_number_formats(&self) -> usize {
        self.number_formats.len()
    }

    /// Whether a formatter for `id` has been built
    pub fn has_number_format(&self, id: &NumberFormatId) -> bool {
        self.number_formats.contains_key(id)
    }
}

impl fmt::Debug for M17n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("M17n")
            .field("locale", &self.locale)
            .field("currency", &self.currency)
            .field("catalog", &self.catalog)
            .field("date_formats", &self.date_formats.len())
            .field("number_formats", &self.number_formats.len())
            .finish()
    }
}
