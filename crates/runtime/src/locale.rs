//! Locale conventions used by the built-in formatters

use unic_langid::LanguageIdentifier;

/// Where the currency symbol goes relative to the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`
    Prefix,
    /// `1,00 €` (separated by a no-break space)
    Suffix,
}

/// Field order of a numeric date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `1/2/2017`
    MonthDayYear,
    /// `02/01/2017`
    DayMonthYearSlash,
    /// `2.1.2017`
    DayMonthYearDot,
    /// `2017/1/2`
    YearMonthDay,
}

/// Number and calendar conventions for a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    pub decimal: &'static str,
    pub group: &'static str,
    pub currency_placement: SymbolPlacement,
    /// Inserted between the number and `%`
    pub percent_spacing: &'static str,
    pub date_order: DateOrder,
    /// `3:04 AM` rather than `03:04`
    pub hour12: bool,
}

const US: Conventions = Conventions {
    decimal: ".",
    group: ",",
    currency_placement: SymbolPlacement::Prefix,
    percent_spacing: "",
    date_order: DateOrder::MonthDayYear,
    hour12: true,
};

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

/// Parse a BCP 47 tag; `_` is accepted as a subtag separator
pub fn parse_tag(tag: &str) -> Option<LanguageIdentifier> {
    tag.parse().ok()
}

/// Conventions for `tag`, falling back to US English
pub fn conventions(tag: &str) -> Conventions {
    let Some(langid) = parse_tag(tag) else {
        tracing::debug!(locale = tag, "unparseable locale tag, using en-US");
        return US;
    };

    let region = langid.region.as_ref().map(|region| region.as_str());
    match (langid.language.as_str(), region) {
        ("en", Some("GB" | "IE")) => Conventions {
            date_order: DateOrder::DayMonthYearSlash,
            hour12: false,
            ..US
        },
        ("en", _) => US,
        ("de" | "es" | "it" | "pt", _) => Conventions {
            decimal: ",",
            group: ".",
            currency_placement: SymbolPlacement::Suffix,
            percent_spacing: NBSP,
            date_order: DateOrder::DayMonthYearDot,
            hour12: false,
        },
        ("fr", _) => Conventions {
            decimal: ",",
            group: NNBSP,
            currency_placement: SymbolPlacement::Suffix,
            percent_spacing: NNBSP,
            date_order: DateOrder::DayMonthYearDot,
            hour12: false,
        },
        ("ru", _) => Conventions {
            decimal: ",",
            group: NBSP,
            currency_placement: SymbolPlacement::Suffix,
            percent_spacing: NBSP,
            date_order: DateOrder::DayMonthYearDot,
            hour12: false,
        },
        ("ja" | "zh", _) => Conventions {
            date_order: DateOrder::YearMonthDay,
            hour12: false,
            ..US
        },
        _ => {
            tracing::debug!(locale = tag, "no conventions for locale, using en-US");
            US
        }
    }
}

/// Symbol and fraction digits for an ISO 4217 code
///
/// Unknown codes are shown as the code itself.
pub fn currency(code: &str) -> (&str, u32) {
    match code {
        "USD" => ("$", 2),
        "EUR" => ("€", 2),
        "GBP" => ("£", 2),
        "JPY" => ("¥", 0),
        "CNY" => ("CN¥", 2),
        "KRW" => ("₩", 0),
        "INR" => ("₹", 2),
        "CAD" => ("CA$", 2),
        "AUD" => ("A$", 2),
        "BRL" => ("R$", 2),
        "RUB" => ("RUB", 2),
        other => (other, 2),
    }
}
