//! Configuration structures for extraction, status and reminders.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::extraction::NumericOrder;
use crate::reminders::ReminderTime;

/// Largest supported reminder offset, in days before expiry.
pub const MAX_REMINDER_DAYS: u32 = 14;

/// Main configuration for shelflife.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelflifeConfig {
    /// Date extraction configuration.
    pub extraction: ExtractionConfig,

    /// Reminder configuration.
    pub reminders: ReminderConfig,

    /// Expiry status configuration.
    pub status: StatusConfig,
}

/// Date extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Which reading of an ambiguous `A/B/YEAR` date is tried first.
    pub numeric_order: NumericOrder,
}

/// Reminder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Days before expiry to remind on (0 = on the day).
    pub days_before: Vec<u32>,

    /// Time of day reminders fire at.
    pub time: ReminderTime,

    /// Play a sound with the reminder.
    pub sound: bool,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            days_before: vec![2],
            time: ReminderTime::default(),
            sound: true,
        }
    }
}

/// Expiry status configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Items expiring within this many days are "soon".
    pub soon_within_days: i64,

    /// Expired items this many days past expiry are due for deletion
    /// (0 = never).
    pub auto_delete_expired_days: u32,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            soon_within_days: crate::status::DEFAULT_SOON_WITHIN_DAYS,
            auto_delete_expired_days: 0,
        }
    }
}

/// Check a list of reminder offsets: non-empty, each within
/// [`MAX_REMINDER_DAYS`].
pub fn validate_reminder_days(days_before: &[u32]) -> std::result::Result<(), ConfigError> {
    if days_before.is_empty() {
        return Err(ConfigError::NoReminderDays);
    }

    if let Some(&days) = days_before.iter().find(|&&d| d > MAX_REMINDER_DAYS) {
        return Err(ConfigError::ReminderDaysOutOfRange(days));
    }

    Ok(())
}

impl ShelflifeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        validate_reminder_days(&self.reminders.days_before)?;
        self.reminders.time.validate()?;

        if self.status.soon_within_days < 0 {
            return Err(ConfigError::NegativeSoonWindow(self.status.soon_within_days));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ShelflifeConfig::default();

        assert_eq!(config.extraction.numeric_order, NumericOrder::MonthFirst);
        assert_eq!(config.reminders.days_before, vec![2]);
        assert_eq!(config.reminders.time, ReminderTime::new(9, 0).unwrap());
        assert!(config.reminders.sound);
        assert_eq!(config.status.soon_within_days, 7);
        assert_eq!(config.status.auto_delete_expired_days, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ShelflifeConfig = serde_json::from_str(
            r#"{ "extraction": { "numeric_order": "day_first" }, "reminders": { "days_before": [0, 7] } }"#,
        )
        .unwrap();

        assert_eq!(config.extraction.numeric_order, NumericOrder::DayFirst);
        assert_eq!(config.reminders.days_before, vec![0, 7]);
        assert_eq!(config.reminders.time, ReminderTime::default());
        assert_eq!(config.status, StatusConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_reminders() {
        let mut config = ShelflifeConfig::default();
        config.reminders.days_before.clear();
        assert_eq!(config.validate(), Err(ConfigError::NoReminderDays));

        config.reminders.days_before = vec![1, 30];
        assert_eq!(config.validate(), Err(ConfigError::ReminderDaysOutOfRange(30)));

        config.reminders.days_before = vec![1];
        config.reminders.time = ReminderTime { hour: 24, minute: 0 };
        assert!(matches!(config.validate(), Err(ConfigError::ReminderTime(_))));
    }

    #[test]
    fn test_validate_reminder_days() {
        assert_eq!(validate_reminder_days(&[0, 14]), Ok(()));
        assert_eq!(validate_reminder_days(&[]), Err(ConfigError::NoReminderDays));
        assert_eq!(
            validate_reminder_days(&[2, 400]),
            Err(ConfigError::ReminderDaysOutOfRange(400))
        );
    }

    #[test]
    fn test_validate_rejects_negative_soon_window() {
        let mut config = ShelflifeConfig::default();
        config.status.soon_within_days = 0;
        assert!(config.validate().is_ok());

        config.status.soon_within_days = -1;
        assert_eq!(config.validate(), Err(ConfigError::NegativeSoonWindow(-1)));
    }

    #[test]
    fn test_auto_delete_from_json() {
        let config: ShelflifeConfig =
            serde_json::from_str(r#"{ "status": { "auto_delete_expired_days": 30 } }"#).unwrap();

        assert_eq!(config.status.auto_delete_expired_days, 30);
        assert_eq!(config.status.soon_within_days, 7);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ShelflifeConfig::default();
        config.reminders.days_before = vec![1, 3];
        config.save(&path).unwrap();

        let loaded = ShelflifeConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
