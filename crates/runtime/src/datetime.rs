//! Date and time styles

use crate::error::FormatError;
use crate::locale::{Conventions, DateOrder};
use chrono::{DateTime, Datelike, FixedOffset, Timelike};

/// The eight date/time presets, addressed by index 0-7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateStyle {
    /// `1/2/2017`
    ShortDate,
    /// `Jan 2, 2017`
    MediumDate,
    /// `January 2, 2017`
    LongDate,
    /// `Monday, January 2, 2017`
    FullDate,
    /// `3:04 AM`
    ShortTime,
    /// `3:04:05 AM`
    MediumTime,
    /// `3:04:05 AM UTC`
    LongTime,
    /// `3:04:05 AM Coordinated Universal Time`
    FullTime,
}

impl DateStyle {
    pub const ALL: [DateStyle; 8] = [
        DateStyle::ShortDate,
        DateStyle::MediumDate,
        DateStyle::LongDate,
        DateStyle::FullDate,
        DateStyle::ShortTime,
        DateStyle::MediumTime,
        DateStyle::LongTime,
        DateStyle::FullTime,
    ];

    /// Position of this style in [`DateStyle::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for DateStyle {
    type Error = FormatError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(FormatError::UnknownDateStyle(index))
    }
}

/// A ready-to-use date/time formatter
pub trait DateTimeFormat: Send + Sync {
    fn format(&self, value: &DateTime<FixedOffset>) -> String;
}

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// English-language formatter honouring a locale's field order and clock
#[derive(Debug, Clone, Copy)]
pub struct BasicDateTimeFormat {
    style: DateStyle,
    conventions: Conventions,
}

impl BasicDateTimeFormat {
    pub fn new(style: DateStyle, conventions: Conventions) -> Self {
        Self { style, conventions }
    }

    fn numeric_date(&self, value: &DateTime<FixedOffset>) -> String {
        let (y, m, d) = (value.year(), value.month(), value.day());
        match self.conventions.date_order {
            DateOrder::MonthDayYear => format!("{m}/{d}/{y}"),
            DateOrder::DayMonthYearSlash => format!("{d:02}/{m:02}/{y}"),
            DateOrder::DayMonthYearDot => format!("{d}.{m}.{y}"),
            DateOrder::YearMonthDay => format!("{y}/{m}/{d}"),
        }
    }

    fn named_date(&self, value: &DateTime<FixedOffset>, abbreviate: bool) -> String {
        let month = MONTHS[value.month0() as usize];
        let month = if abbreviate { &month[..3] } else { month };
        let (y, d) = (value.year(), value.day());
        match self.conventions.date_order {
            DateOrder::MonthDayYear => format!("{month} {d}, {y}"),
            _ => format!("{d} {month} {y}"),
        }
    }

    fn full_date(&self, value: &DateTime<FixedOffset>) -> String {
        let weekday = WEEKDAYS[value.weekday().num_days_from_monday() as usize];
        match self.conventions.date_order {
            DateOrder::MonthDayYear => format!("{weekday}, {}", self.named_date(value, false)),
            _ => format!("{weekday} {}", self.named_date(value, false)),
        }
    }

    fn time(&self, value: &DateTime<FixedOffset>, seconds: bool) -> String {
        let (h, m, s) = (value.hour(), value.minute(), value.second());
        if self.conventions.hour12 {
            let period = if h < 12 { "AM" } else { "PM" };
            let h12 = match h % 12 {
                0 => 12,
                h => h,
            };
            if seconds {
                format!("{h12}:{m:02}:{s:02} {period}")
            } else {
                format!("{h12}:{m:02} {period}")
            }
        } else if seconds {
            format!("{h:02}:{m:02}:{s:02}")
        } else {
            format!("{h:02}:{m:02}")
        }
    }
}

impl DateTimeFormat for BasicDateTimeFormat {
    fn format(&self, value: &DateTime<FixedOffset>) -> String {
        match self.style {
            DateStyle::ShortDate => self.numeric_date(value),
            DateStyle::MediumDate => self.named_date(value, true),
            DateStyle::LongDate => self.named_date(value, false),
            DateStyle::FullDate => self.full_date(value),
            DateStyle::ShortTime => self.time(value, false),
            DateStyle::MediumTime => self.time(value, true),
            DateStyle::LongTime => {
                let (short, _) = zone_names(value.offset());
                format!("{} {short}", self.time(value, true))
            }
            DateStyle::FullTime => {
                let (_, long) = zone_names(value.offset());
                format!("{} {long}", self.time(value, true))
            }
        }
    }
}

/// Short and long names for a fixed offset
fn zone_names(offset: &FixedOffset) -> (String, String) {
    let total = offset.local_minus_utc();
    if total == 0 {
        return ("UTC".to_string(), "Coordinated Universal Time".to_string());
    }

    let sign = if total < 0 { '-' } else { '+' };
    let minutes = total.abs() / 60;
    let (h, m) = (minutes / 60, minutes % 60);
    let short = if m == 0 {
        format!("GMT{sign}{h}")
    } else {
        format!("GMT{sign}{h}:{m:02}")
    };
    (short, format!("GMT{sign}{h:02}:{m:02}"))
}
