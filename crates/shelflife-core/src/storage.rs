//! Canonical string forms of expiration dates.
//!
//! Confirmed dates are stored as zero-padded `YYYY-MM-DD`. Reading a stored
//! date back is strict: anything else is an error rather than a guess.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::StoredDateError;

lazy_static! {
    static ref STORED_DATE: Regex = Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap();
}

/// Format a date for storage, e.g. `2027-01-05`.
pub fn format_for_storage(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a stored `YYYY-MM-DD` date.
pub fn parse_stored_date(s: &str) -> Result<NaiveDate, StoredDateError> {
    let trimmed = s.trim();
    let caps = STORED_DATE
        .captures(trimmed)
        .ok_or_else(|| StoredDateError::Format(s.to_string()))?;

    let field = |i: usize| caps[i].parse::<u32>().map_err(|_| StoredDateError::Format(s.to_string()));
    let (year, month, day) = (field(1)? as i32, field(2)?, field(3)?);

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(StoredDateError::NotACalendarDate { year, month, day })
}

/// Format a date for people, e.g. `Jan 5, 2027`.
pub fn format_for_display(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
