//! Plural categories and case selection

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// CLDR plural category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// The case label used in message cases
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps `(count, ordinal)` to a plural category for one locale
pub type PluralFn = Arc<dyn Fn(f64, bool) -> PluralCategory + Send + Sync>;

/// CLDR rules for English
///
/// Cardinal: `one` for exactly 1, otherwise `other`. Ordinal: `one`, `two`
/// and `few` for 1st/2nd/3rd (but not 11th/12th/13th), otherwise `other`.
pub fn english(count: f64, ordinal: bool) -> PluralCategory {
    if !ordinal {
        return if count == 1.0 {
            PluralCategory::One
        } else {
            PluralCategory::Other
        };
    }

    if !count.is_finite() || count.fract() != 0.0 {
        return PluralCategory::Other;
    }
    let n = count.abs();
    match (n % 10.0, n % 100.0) {
        (m10, m100) if m10 == 1.0 && m100 != 11.0 => PluralCategory::One,
        (m10, m100) if m10 == 2.0 && m100 != 12.0 => PluralCategory::Two,
        (m10, m100) if m10 == 3.0 && m100 != 13.0 => PluralCategory::Few,
        _ => PluralCategory::Other,
    }
}

/// Message variants keyed by case label or exact value
///
/// Empty strings count as missing, so a blank case falls through to `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cases(AHashMap<String, String>);

impl Cases {
    /// Create an empty case set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a case
    pub fn insert(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.0.insert(label.into(), text.into());
    }

    /// Non-empty text for `label`
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .get(label)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Number of cases
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no cases
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, T: Into<String>, const N: usize> From<[(K, T); N]> for Cases {
    fn from(cases: [(K, T); N]) -> Self {
        cases.into_iter().collect()
    }
}

impl<K: Into<String>, T: Into<String>> FromIterator<(K, T)> for Cases {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, text)| (label.into(), text.into()))
                .collect(),
        )
    }
}

/// Canonical string of a count, as used for exact-value cases
///
/// Integral values print without a fraction (`2`, not `2.0`).
pub fn count_key(count: f64) -> String {
    if count == 0.0 {
        // Covers -0.0 as well
        "0".to_string()
    } else if count.is_infinite() {
        if count > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{count}")
    }
}
