//! Number, percent and currency styles

use crate::error::FormatError;
use crate::locale::{self, Conventions, SymbolPlacement};

/// Identifies a number format; also the cache key for built formatters
///
/// `Currency` means the runtime's default currency and is cached separately
/// from an explicit `CurrencyCode` of the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormatId {
    /// Grouped decimal with up to three fraction digits
    #[default]
    Decimal,
    /// Value times 100 with a percent sign
    Percent,
    /// Default currency of the runtime
    Currency,
    /// Explicit ISO 4217 currency, stored uppercase
    CurrencyCode(String),
    /// Decimal zero-padded to at least this many integer digits
    IntegerDigits(u32),
}

impl From<&str> for NumberFormatId {
    fn from(id: &str) -> Self {
        match id {
            "" | "decimal" => NumberFormatId::Decimal,
            "%" | "percent" => NumberFormatId::Percent,
            "$" | "currency" => NumberFormatId::Currency,
            code => NumberFormatId::CurrencyCode(code.to_ascii_uppercase()),
        }
    }
}

impl From<u32> for NumberFormatId {
    fn from(digits: u32) -> Self {
        NumberFormatId::IntegerDigits(digits)
    }
}

/// Numeric ids: positive values pad digits, `-1` is the default currency and
/// `-2` is percent
impl TryFrom<i64> for NumberFormatId {
    type Error = FormatError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        match id {
            -1 => Ok(NumberFormatId::Currency),
            -2 => Ok(NumberFormatId::Percent),
            n if n > 0 => u32::try_from(n)
                .map(NumberFormatId::IntegerDigits)
                .map_err(|_| FormatError::UnknownNumberFormat(id)),
            _ => Err(FormatError::UnknownNumberFormat(id)),
        }
    }
}

/// Fully resolved options handed to a [`FormatProvider`](crate::FormatProvider)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberOptions {
    Decimal { minimum_integer_digits: u32 },
    Percent,
    Currency { code: String },
}

impl NumberOptions {
    /// Resolve `id`, substituting `default_currency` for `Currency`
    pub fn resolve(id: &NumberFormatId, default_currency: &str) -> Result<Self, FormatError> {
        match id {
            NumberFormatId::Decimal => Ok(NumberOptions::Decimal {
                minimum_integer_digits: 1,
            }),
            NumberFormatId::Percent => Ok(NumberOptions::Percent),
            NumberFormatId::Currency => currency_options(default_currency),
            NumberFormatId::CurrencyCode(code) => currency_options(code),
            NumberFormatId::IntegerDigits(digits) => {
                if (1..=21).contains(digits) {
                    Ok(NumberOptions::Decimal {
                        minimum_integer_digits: *digits,
                    })
                } else {
                    Err(FormatError::IntegerDigitsOutOfRange(*digits))
                }
            }
        }
    }
}

fn currency_options(code: &str) -> Result<NumberOptions, FormatError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(NumberOptions::Currency {
            code: code.to_ascii_uppercase(),
        })
    } else {
        Err(FormatError::InvalidCurrencyCode(code.to_string()))
    }
}

/// A ready-to-use number formatter
pub trait NumberFormat: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Formatter using the symbols from [`locale::conventions`]
#[derive(Debug, Clone)]
pub struct BasicNumberFormat {
    options: NumberOptions,
    conventions: Conventions,
}

impl BasicNumberFormat {
    pub fn new(options: NumberOptions, conventions: Conventions) -> Self {
        Self {
            options,
            conventions,
        }
    }

    fn digits(&self, value: f64, min_int: usize, min_frac: usize, max_frac: usize) -> String {
        let fixed = format!("{:.*}", max_frac, value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut frac = frac_part.trim_end_matches('0').to_string();
        while frac.len() < min_frac {
            frac.push('0');
        }

        let padded = format!("{int_part:0>min_int$}");
        let mut out = group_digits(&padded, self.conventions.group);
        if !frac.is_empty() {
            out.push_str(self.conventions.decimal);
            out.push_str(&frac);
        }
        out
    }
}

impl NumberFormat for BasicNumberFormat {
    fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        let sign = if value < 0.0 { "-" } else { "" };

        match &self.options {
            NumberOptions::Decimal {
                minimum_integer_digits,
            } => {
                if value.is_infinite() {
                    return format!("{sign}∞");
                }
                format!("{sign}{}", self.digits(value, *minimum_integer_digits as usize, 0, 3))
            }
            NumberOptions::Percent => {
                let body = if value.is_infinite() {
                    "∞".to_string()
                } else {
                    self.digits(value * 100.0, 1, 0, 0)
                };
                format!("{sign}{body}{}%", self.conventions.percent_spacing)
            }
            NumberOptions::Currency { code } => {
                let (symbol, fraction) = locale::currency(code);
                let body = if value.is_infinite() {
                    "∞".to_string()
                } else {
                    let fraction = fraction as usize;
                    self.digits(value, 1, fraction, fraction)
                };
                match self.conventions.currency_placement {
                    SymbolPlacement::Prefix => {
                        let gap = if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
                            "\u{a0}"
                        } else {
                            ""
                        };
                        format!("{sign}{symbol}{gap}{body}")
                    }
                    SymbolPlacement::Suffix => format!("{sign}{body}\u{a0}{symbol}"),
                }
            }
        }
    }
}

/// Insert `group` between every three integer digits, from the right
fn group_digits(digits: &str, group: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * group.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(group);
        }
        out.push(c);
    }
    out
}
