//! Rule table for expiration date extraction.
//!
//! Each rule pairs a pattern with the way its three captures form a date and
//! the confidence a match earns. Rules are grouped into tiers; a later tier
//! is only consulted when every rule of the earlier tiers came up empty.
//! Adding a label format means adding a rule here, selection is unaffected.

pub mod construct;
pub mod patterns;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::trace;

use crate::models::parsed::{Confidence, ParsedDate};

pub use construct::NumericOrder;
use patterns::*;

/// How the three captures of a rule form a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateForm {
    /// `A sep B sep YEAR`, field order ambiguous.
    Numeric,
    /// `MONTHNAME DAY YEAR`.
    MonthDayYear,
    /// `DAY MONTHNAME YEAR`.
    DayMonthYear,
    /// `YYYY sep MM sep DD`.
    YearMonthDay,
}

impl DateForm {
    fn build(&self, caps: &Captures<'_>, order: NumericOrder) -> Option<NaiveDate> {
        match self {
            DateForm::Numeric => construct::numeric_date(&caps[1], &caps[2], &caps[3], order),
            DateForm::MonthDayYear => construct::month_name_date(&caps[1], &caps[2], &caps[3]),
            DateForm::DayMonthYear => construct::month_name_date(&caps[2], &caps[1], &caps[3]),
            DateForm::YearMonthDay => construct::iso_date(&caps[1], &caps[2], &caps[3]),
        }
    }
}

/// A single extraction rule.
#[derive(Debug)]
pub struct Rule {
    /// Short name used in logs.
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub form: DateForm,
    pub confidence: Confidence,
}

impl Rule {
    /// Append every calendar-valid match of this rule in `text` to `out`.
    pub fn scan(&self, text: &str, order: NumericOrder, out: &mut Vec<ParsedDate>) {
        for caps in self.pattern.captures_iter(text) {
            let raw = &caps[0];
            match self.form.build(&caps, order) {
                Some(date) => out.push(ParsedDate::new(date, self.confidence, raw)),
                None => trace!(rule = self.name, raw, "dropped match that is not a calendar date"),
            }
        }
    }
}

/// An ordered group of rules sharing a precedence level.
#[derive(Debug)]
pub struct Tier {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

impl Tier {
    /// All candidates this tier finds, in rule order then match order.
    pub fn scan(&self, text: &str, order: NumericOrder) -> Vec<ParsedDate> {
        let mut candidates = Vec::new();
        for rule in &self.rules {
            rule.scan(text, order, &mut candidates);
        }
        candidates
    }
}

lazy_static! {
    /// Extraction tiers in precedence order.
    pub static ref TIERS: Vec<Tier> = vec![
        Tier {
            name: "labeled",
            rules: vec![
                Rule {
                    name: "labeled_numeric",
                    pattern: &LABELED_NUMERIC,
                    form: DateForm::Numeric,
                    confidence: Confidence::High,
                },
                Rule {
                    name: "labeled_month_day_year",
                    pattern: &LABELED_MONTH_DAY_YEAR,
                    form: DateForm::MonthDayYear,
                    confidence: Confidence::High,
                },
                Rule {
                    name: "labeled_day_month_year",
                    pattern: &LABELED_DAY_MONTH_YEAR,
                    form: DateForm::DayMonthYear,
                    confidence: Confidence::High,
                },
                Rule {
                    name: "labeled_iso",
                    pattern: &LABELED_ISO,
                    form: DateForm::YearMonthDay,
                    confidence: Confidence::High,
                },
            ],
        },
        Tier {
            name: "standalone",
            rules: vec![
                Rule {
                    name: "standalone_iso",
                    pattern: &STANDALONE_ISO,
                    form: DateForm::YearMonthDay,
                    confidence: Confidence::Medium,
                },
                Rule {
                    name: "standalone_numeric",
                    pattern: &STANDALONE_NUMERIC,
                    form: DateForm::Numeric,
                    confidence: Confidence::Low,
                },
                Rule {
                    name: "standalone_month_day_year",
                    pattern: &STANDALONE_MONTH_DAY_YEAR,
                    form: DateForm::MonthDayYear,
                    confidence: Confidence::Medium,
                },
                Rule {
                    name: "standalone_day_month_year",
                    pattern: &STANDALONE_DAY_MONTH_YEAR,
                    form: DateForm::DayMonthYear,
                    confidence: Confidence::Medium,
                },
            ],
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tier_order_and_confidence() {
        assert_eq!(TIERS.len(), 2);
        assert_eq!(TIERS[0].name, "labeled");
        assert!(TIERS[0].rules.iter().all(|r| r.confidence == Confidence::High));

        let standalone: Vec<_> = TIERS[1].rules.iter().map(|r| (r.form, r.confidence)).collect();
        assert_eq!(
            standalone,
            vec![
                (DateForm::YearMonthDay, Confidence::Medium),
                (DateForm::Numeric, Confidence::Low),
                (DateForm::MonthDayYear, Confidence::Medium),
                (DateForm::DayMonthYear, Confidence::Medium),
            ]
        );
    }

    #[test]
    fn test_labeled_tier_pools_every_form() {
        let text = "EXP 01/25/2027\nBEST BY FEB 3, 2027\nUSE BY 4 MAR 2027\nSELL BY 2027-04-05";
        let candidates = TIERS[0].scan(text, NumericOrder::MonthFirst);

        let dates: Vec<_> = candidates.iter().map(|c| c.date).collect();
        assert_eq!(
            dates,
            vec![ymd(2027, 1, 25), ymd(2027, 2, 3), ymd(2027, 3, 4), ymd(2027, 4, 5)]
        );
        assert_eq!(candidates[1].raw_match, "BEST BY FEB 3, 2027");
    }

    #[test]
    fn test_scan_finds_all_matches_of_a_rule() {
        let text = "MFG 2026-01-10 EXP 2027-01-10";
        let candidates = TIERS[1].scan(text, NumericOrder::MonthFirst);

        let raw: Vec<_> = candidates.iter().map(|c| c.raw_match.as_str()).collect();
        assert_eq!(raw, vec!["2026-01-10", "2027-01-10"]);
        assert!(candidates.iter().all(|c| c.confidence == Confidence::Medium));
    }

    #[test]
    fn test_invalid_matches_are_dropped() {
        let candidates = TIERS[0].scan("BEST BY FEB 30 2027", NumericOrder::MonthFirst);
        assert!(candidates.is_empty());
    }
}
