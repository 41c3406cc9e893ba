//! Core library for shelflife, an expiration date tracker.
//!
//! This crate provides:
//! - Expiration date extraction from OCR'd label text
//! - Canonical storage and display forms for dates
//! - Expiry status classification, recurrence and auto-delete cutoffs
//! - Reminder planning

pub mod error;
pub mod extraction;
pub mod models;
pub mod reminders;
pub mod status;
pub mod storage;

pub use error::{ShelflifeError, Result};
pub use extraction::{extract_expiration_date, DateExtractor, FieldExtractor, NumericOrder};
pub use models::{Confidence, ParsedDate, ShelflifeConfig};
pub use reminders::{plan_reminders, PlannedReminder, ReminderTime};
pub use status::{days_until_expiry, is_auto_deleted, item_status, next_recurrence, ItemStatus};
pub use storage::{format_for_display, format_for_storage, parse_stored_date};
