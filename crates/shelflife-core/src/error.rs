//! Error types for the shelflife-core library.
//!
//! Date extraction itself never fails: a label without a usable date yields
//! `None`. These errors cover the surrounding helpers (stored dates, reminder
//! settings, configuration files).

use thiserror::Error;

/// Main error type for the shelflife library.
#[derive(Error, Debug)]
pub enum ShelflifeError {
    /// Stored date string could not be read back.
    #[error("stored date error: {0}")]
    StoredDate(#[from] StoredDateError),

    /// Reminder settings are out of range.
    #[error("reminder error: {0}")]
    Reminder(#[from] ReminderError),

    /// Configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to the canonical `YYYY-MM-DD` storage form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoredDateError {
    /// The string is not shaped like `YYYY-MM-DD`.
    #[error("expected YYYY-MM-DD, got {0:?}")]
    Format(String),

    /// The fields are well formed but do not name a real calendar day.
    #[error("not a calendar date: {year:04}-{month:02}-{day:02}")]
    NotACalendarDate { year: i32, month: u32, day: u32 },
}

/// Errors related to reminder settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReminderError {
    /// Hour or minute outside of a 24h clock.
    #[error("invalid reminder time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    /// Reminder time string is not `HH:MM`.
    #[error("expected HH:MM, got {0:?}")]
    TimeFormat(String),
}

/// Errors related to configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No reminder offsets configured.
    #[error("reminders.days_before must not be empty")]
    NoReminderDays,

    /// Reminder offset beyond the supported window.
    #[error("reminders.days_before entry {0} exceeds {max}", max = crate::models::config::MAX_REMINDER_DAYS)]
    ReminderDaysOutOfRange(u32),

    /// Reminder time is not a valid clock time.
    #[error("reminders.time: {0}")]
    ReminderTime(#[from] ReminderError),

    /// The "expiring soon" window is negative.
    #[error("status.soon_within_days must not be negative, got {0}")]
    NegativeSoonWindow(i64),
}

/// Result type for the shelflife library.
pub type Result<T> = std::result::Result<T, ShelflifeError>;
