//! Extraction result types.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Qualitative trust in an extracted date, assigned by the rule that matched.
///
/// Variants are declared in rank order, so the derived `Ord` sorts `High`
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Date preceded by an expiration keyword (`EXP`, `BEST BY`, ...).
    High,
    /// Unlabeled date with an unambiguous shape (ISO or month name).
    Medium,
    /// Unlabeled numeric date, field order guessed.
    Low,
}

impl Confidence {
    /// Lowercase tag, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date read from label text.
///
/// Also used for the provisional candidates collected while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDate {
    /// Calendar day, no time component.
    pub date: NaiveDate,

    /// Confidence tier of the rule that produced the date.
    pub confidence: Confidence,

    /// Exact substring of the input that matched.
    pub raw_match: String,
}

impl ParsedDate {
    pub fn new(date: NaiveDate, confidence: Confidence, raw_match: impl Into<String>) -> Self {
        Self {
            date,
            confidence,
            raw_match: raw_match.into(),
        }
    }
}
