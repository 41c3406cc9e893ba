//! Expiry status of an item relative to today.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Items expiring within this many days count as expiring soon.
pub const DEFAULT_SOON_WITHIN_DAYS: i64 = 7;

/// Where an item stands relative to its expiration date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Expired,
    Soon,
    Ok,
}

impl ItemStatus {
    /// Classify an item that expires `days_until` days from today.
    pub fn from_days(days_until: i64, soon_within_days: i64) -> Self {
        if days_until < 0 {
            ItemStatus::Expired
        } else if days_until <= soon_within_days {
            ItemStatus::Soon
        } else {
            ItemStatus::Ok
        }
    }

    /// Short badge text.
    pub fn badge(&self, days_until: i64) -> String {
        match self {
            ItemStatus::Expired => "Expired".to_string(),
            ItemStatus::Soon => match days_until {
                0 => "Today".to_string(),
                1 => "1 day".to_string(),
                n => format!("{} days", n),
            },
            ItemStatus::Ok => "OK".to_string(),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemStatus::Expired => "expired",
            ItemStatus::Soon => "soon",
            ItemStatus::Ok => "ok",
        };
        f.write_str(s)
    }
}

/// Whole calendar days from `today` until `expiry`; negative once expired.
pub fn days_until_expiry(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

/// Status of an item expiring on `expiry`.
pub fn item_status(expiry: NaiveDate, today: NaiveDate, soon_within_days: i64) -> ItemStatus {
    ItemStatus::from_days(days_until_expiry(expiry, today), soon_within_days)
}

/// Relative wording, e.g. "Expires in 3 days" or "Expired 1 day ago".
pub fn describe_expiry(days_until: i64) -> String {
    match days_until {
        0 => "Expires today".to_string(),
        d if d < 0 => format!("Expired {} ago", plural_days(-d)),
        d => format!("Expires in {}", plural_days(d)),
    }
}

/// Next expiry of an item that recurs every `every_days` days.
///
/// An expired item moves forward by whole periods until it falls on or after
/// `today`; items not yet expired, and non-recurring items (`every_days == 0`),
/// keep their date.
pub fn next_recurrence(expiry: NaiveDate, every_days: u32, today: NaiveDate) -> NaiveDate {
    if every_days == 0 || expiry >= today {
        return expiry;
    }

    let overdue = days_until_expiry(today, expiry) as u64;
    let every = u64::from(every_days);
    let periods = overdue.div_ceil(every);

    expiry
        .checked_add_days(Days::new(periods * every))
        .unwrap_or(NaiveDate::MAX)
}

/// Last expiry date an item may have and still be kept, when expired items
/// are deleted `after_days` days past expiry. `None` when auto-delete is off.
pub fn auto_delete_cutoff(today: NaiveDate, after_days: u32) -> Option<NaiveDate> {
    if after_days == 0 {
        return None;
    }
    today.checked_sub_days(Days::new(u64::from(after_days)))
}

/// Whether an item expiring on `expiry` is due for automatic deletion.
pub fn is_auto_deleted(expiry: NaiveDate, today: NaiveDate, after_days: u32) -> bool {
    auto_delete_cutoff(today, after_days).is_some_and(|cutoff| expiry < cutoff)
}

fn plural_days(n: i64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_expiry() {
        let today = ymd(2026, 12, 30);
        assert_eq!(days_until_expiry(ymd(2027, 1, 2), today), 3);
        assert_eq!(days_until_expiry(today, today), 0);
        assert_eq!(days_until_expiry(ymd(2026, 12, 1), today), -29);
    }

    #[test]
    fn test_status_thresholds() {
        let today = ymd(2026, 6, 1);
        let status = |d| item_status(d, today, DEFAULT_SOON_WITHIN_DAYS);

        assert_eq!(status(ymd(2026, 5, 31)), ItemStatus::Expired);
        assert_eq!(status(today), ItemStatus::Soon);
        assert_eq!(status(ymd(2026, 6, 8)), ItemStatus::Soon);
        assert_eq!(status(ymd(2026, 6, 9)), ItemStatus::Ok);
    }

    #[test]
    fn test_describe_expiry() {
        assert_eq!(describe_expiry(0), "Expires today");
        assert_eq!(describe_expiry(1), "Expires in 1 day");
        assert_eq!(describe_expiry(5), "Expires in 5 days");
        assert_eq!(describe_expiry(-1), "Expired 1 day ago");
        assert_eq!(describe_expiry(-12), "Expired 12 days ago");
    }

    #[test]
    fn test_next_recurrence() {
        let today = ymd(2026, 6, 1);

        assert_eq!(next_recurrence(ymd(2026, 5, 20), 7, today), ymd(2026, 6, 3));
        assert_eq!(next_recurrence(ymd(2026, 5, 25), 7, today), ymd(2026, 6, 1));
        assert_eq!(next_recurrence(ymd(2025, 6, 1), 30, today), ymd(2026, 6, 26));
    }

    #[test]
    fn test_next_recurrence_keeps_current_dates() {
        let today = ymd(2026, 6, 1);

        assert_eq!(next_recurrence(today, 7, today), today);
        assert_eq!(next_recurrence(ymd(2026, 6, 9), 7, today), ymd(2026, 6, 9));
        assert_eq!(next_recurrence(ymd(2026, 5, 1), 0, today), ymd(2026, 5, 1));
    }

    #[test]
    fn test_auto_delete() {
        let today = ymd(2026, 6, 1);

        assert_eq!(auto_delete_cutoff(today, 0), None);
        assert_eq!(auto_delete_cutoff(today, 3), Some(ymd(2026, 5, 29)));

        assert!(is_auto_deleted(ymd(2026, 5, 28), today, 3));
        assert!(!is_auto_deleted(ymd(2026, 5, 29), today, 3));
        assert!(!is_auto_deleted(ymd(2020, 1, 1), today, 0));
    }

    #[test]
    fn test_badge() {
        assert_eq!(ItemStatus::Soon.badge(0), "Today");
        assert_eq!(ItemStatus::Soon.badge(1), "1 day");
        assert_eq!(ItemStatus::Soon.badge(4), "4 days");
        assert_eq!(ItemStatus::Expired.badge(-3), "Expired");
        assert_eq!(ItemStatus::Ok.badge(30), "OK");
        assert_eq!(ItemStatus::Soon.to_string(), "soon");
    }
}
