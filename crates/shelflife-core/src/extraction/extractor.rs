//! Expiration date extractor for OCR'd label text.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::parsed::ParsedDate;

use super::rules::{NumericOrder, TIERS};
use super::select::select_best;
use super::FieldExtractor;

/// Finds the most plausible expiration date in label text.
#[derive(Debug, Clone, Default)]
pub struct DateExtractor {
    /// Fixed "today"; the local date is read on every call when unset.
    today: Option<NaiveDate>,
    /// Field order tried first for ambiguous numeric dates.
    numeric_order: NumericOrder,
}

impl DateExtractor {
    /// Create an extractor that compares against the local date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_numeric_order(config.numeric_order)
    }

    /// Pin the date candidates are compared against.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Set which reading of an ambiguous numeric date is tried first.
    pub fn with_numeric_order(mut self, order: NumericOrder) -> Self {
        self.numeric_order = order;
        self
    }

    /// The date used to split upcoming from expired candidates.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Candidates of the first tier that yields any, in scan order.
    fn candidates(&self, text: &str) -> Vec<ParsedDate> {
        for tier in TIERS.iter() {
            let candidates = tier.scan(text, self.numeric_order);
            if !candidates.is_empty() {
                debug!(tier = tier.name, count = candidates.len(), "found date candidates");
                return candidates;
            }
        }

        debug!("no date candidates in {} characters of text", text.len());
        Vec::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ParsedDate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let candidates = self.candidates(text);
        if candidates.is_empty() {
            return None;
        }
        select_best(candidates, self.today())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.candidates(text)
    }
}

/// Extract the expiration date from label text, relative to the local date.
pub fn extract_expiration_date(text: &str) -> Option<ParsedDate> {
    DateExtractor::new().extract(text)
}
