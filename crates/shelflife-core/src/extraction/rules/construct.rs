//! Building calendar dates from matched label fields.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which reading of an ambiguous numeric date (`A/B/YEAR`) is tried first.
///
/// The other reading is still used when the first is not a calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericOrder {
    /// `MM/DD/YYYY` first, then `DD/MM/YYYY`.
    #[default]
    MonthFirst,
    /// `DD/MM/YYYY` first, then `MM/DD/YYYY`.
    DayFirst,
}

/// Expand a matched year.
///
/// Two-digit years are windowed: 00-50 -> 2000-2050, 51-99 -> 1951-1999.
/// Longer years pass through unchanged.
pub fn normalize_year(year: &str) -> Option<i32> {
    let value: i32 = year.parse().ok()?;
    if year.len() == 2 {
        Some(if value <= 50 { 2000 + value } else { 1900 + value })
    } else {
        Some(value)
    }
}

/// Month number (1-12) for an English month name or 3-letter abbreviation.
pub fn month_from_name(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}

/// A calendar date whose fields are exactly `year`, `month`, `day`.
///
/// Rejects rollover (Feb 30 is not Mar 2) and years below 100, which only
/// arise from zero-padded forms such as `0049`.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if year < 100 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|date| date.year() == year && date.month() == month && date.day() == day)
}

/// Ambiguous `A/B/YEAR` date, resolved by trying both field orders.
pub fn numeric_date(first: &str, second: &str, year: &str, order: NumericOrder) -> Option<NaiveDate> {
    let year = normalize_year(year)?;
    let a: u32 = first.parse().ok()?;
    let b: u32 = second.parse().ok()?;

    let (month_first, day_first) = ((a, b), (b, a));
    let attempts = match order {
        NumericOrder::MonthFirst => [month_first, day_first],
        NumericOrder::DayFirst => [day_first, month_first],
    };

    attempts
        .into_iter()
        .find_map(|(month, day)| calendar_date(year, month, day))
}

/// Date with a named month, e.g. `JAN 25 2027` or `25 JAN 2027`.
pub fn month_name_date(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let month = month_from_name(month)?;
    let day: u32 = day.parse().ok()?;
    let year = normalize_year(year)?;

    calendar_date(year, month, day)
}

/// Year-first date, e.g. `2027-01-25`. The year is taken literally.
pub fn iso_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    calendar_date(year, month, day)
}
