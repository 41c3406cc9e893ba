//! Reminder planning for expiring items.
//!
//! Computes when reminders should fire; delivering them is left to the
//! platform scheduler.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ReminderError;

/// Notification title used for every reminder.
pub const REMINDER_TITLE: &str = "Expiration Reminder";

/// Time of day a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderTime {
    pub hour: u32,
    pub minute: u32,
}

impl Default for ReminderTime {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

impl ReminderTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ReminderError> {
        let time = Self { hour, minute };
        time.validate()?;
        Ok(time)
    }

    /// Check the fields form a 24h clock time.
    pub fn validate(&self) -> Result<(), ReminderError> {
        self.to_naive_time().map(|_| ())
    }

    fn to_naive_time(self) -> Result<NaiveTime, ReminderError> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).ok_or(ReminderError::InvalidTime {
            hour: self.hour,
            minute: self.minute,
        })
    }
}

impl FromStr for ReminderTime {
    type Err = ReminderError;

    /// Parse `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || ReminderError::TimeFormat(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(format_err)?;
        let hour = hour.parse().map_err(|_| format_err())?;
        let minute = minute.parse().map_err(|_| format_err())?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A reminder that should be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedReminder {
    /// Days before expiry this reminder is for.
    pub days_before: u32,
    /// Local date and time to fire at.
    pub fire_at: NaiveDateTime,
    /// Whole seconds from planning time until `fire_at`.
    pub seconds_until: i64,
}

/// When the reminder `days_before` days ahead of `expiry` fires.
///
/// Returns `None` only if the date falls outside chrono's range.
pub fn reminder_at(
    expiry: NaiveDate,
    days_before: u32,
    time: ReminderTime,
) -> Result<Option<NaiveDateTime>, ReminderError> {
    let clock = time.to_naive_time()?;
    Ok(expiry
        .checked_sub_days(Days::new(u64::from(days_before)))
        .map(|day| day.and_time(clock)))
}

/// Plan reminders for an item expiring on `expiry`.
///
/// Duplicate offsets are planned once, in first-seen order. Reminders whose
/// firing time is not after `now` are skipped.
pub fn plan_reminders(
    expiry: NaiveDate,
    days_before: &[u32],
    time: ReminderTime,
    now: NaiveDateTime,
) -> Result<Vec<PlannedReminder>, ReminderError> {
    let mut seen = Vec::with_capacity(days_before.len());
    let mut planned = Vec::new();

    for &days in days_before {
        if seen.contains(&days) {
            continue;
        }
        seen.push(days);

        let Some(fire_at) = reminder_at(expiry, days, time)? else {
            continue;
        };

        if fire_at <= now {
            debug!(days_before = days, %fire_at, "skipping reminder in the past");
            continue;
        }

        planned.push(PlannedReminder {
            days_before: days,
            fire_at,
            seconds_until: fire_at.signed_duration_since(now).num_seconds(),
        });
    }

    Ok(planned)
}

/// Reminder body text, e.g. `"Milk" expires in 2 days!`.
pub fn reminder_message(item_name: &str, days_before: u32) -> String {
    let when = match days_before {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        n => format!("in {} days", n),
    };
    format!("\"{}\" expires {}!", item_name, when)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_reminder_time_parse() {
        assert_eq!("09:30".parse::<ReminderTime>(), Ok(ReminderTime { hour: 9, minute: 30 }));
        assert_eq!("7:05".parse::<ReminderTime>().unwrap().to_string(), "07:05");
        assert_eq!(
            "24:00".parse::<ReminderTime>(),
            Err(ReminderError::InvalidTime { hour: 24, minute: 0 })
        );
        assert_eq!(
            "noon".parse::<ReminderTime>(),
            Err(ReminderError::TimeFormat("noon".to_string()))
        );
    }

    #[test]
    fn test_reminder_at() {
        let time = ReminderTime::new(9, 0).unwrap();
        assert_eq!(
            reminder_at(ymd(2027, 3, 1), 2, time),
            Ok(Some(at(ymd(2027, 2, 27), 9, 0)))
        );
        assert_eq!(
            reminder_at(ymd(2027, 3, 1), 0, time),
            Ok(Some(at(ymd(2027, 3, 1), 9, 0)))
        );
    }

    #[test]
    fn test_plan_dedups_and_skips_past() {
        let expiry = ymd(2027, 1, 10);
        let time = ReminderTime::new(9, 0).unwrap();
        let now = at(ymd(2027, 1, 8), 12, 0);

        // 2 days before fires Jan 8 09:00, already past at noon.
        let plan = plan_reminders(expiry, &[1, 2, 0, 1], time, now).unwrap();

        assert_eq!(
            plan,
            vec![
                PlannedReminder {
                    days_before: 1,
                    fire_at: at(ymd(2027, 1, 9), 9, 0),
                    seconds_until: 21 * 3600,
                },
                PlannedReminder {
                    days_before: 0,
                    fire_at: at(expiry, 9, 0),
                    seconds_until: 45 * 3600,
                },
            ]
        );
    }

    #[test]
    fn test_plan_fire_time_equal_to_now_is_skipped() {
        let expiry = ymd(2027, 1, 10);
        let time = ReminderTime::new(9, 0).unwrap();

        let plan = plan_reminders(expiry, &[0], time, at(expiry, 9, 0)).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_rejects_invalid_time() {
        let time = ReminderTime { hour: 9, minute: 60 };
        let result = plan_reminders(ymd(2027, 1, 10), &[1], time, at(ymd(2027, 1, 1), 0, 0));
        assert_eq!(result, Err(ReminderError::InvalidTime { hour: 9, minute: 60 }));
    }

    #[test]
    fn test_reminder_message() {
        assert_eq!(reminder_message("Milk", 0), "\"Milk\" expires today!");
        assert_eq!(reminder_message("Milk", 1), "\"Milk\" expires in 1 day!");
        assert_eq!(reminder_message("Milk", 3), "\"Milk\" expires in 3 days!");
    }
}
