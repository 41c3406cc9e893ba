//! Choosing one date out of a tier's candidates.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::parsed::ParsedDate;

/// Pick the most plausible expiration date.
///
/// Dates on or after `today` win over past ones. Among those, higher
/// confidence wins, then the soonest date. When every candidate is already
/// past, the most recent one is returned. Sorts are stable, so exact ties
/// keep scan order.
pub fn select_best(candidates: Vec<ParsedDate>, today: NaiveDate) -> Option<ParsedDate> {
    let (mut upcoming, mut past): (Vec<_>, Vec<_>) =
        candidates.into_iter().partition(|c| c.date >= today);

    if !upcoming.is_empty() {
        upcoming.sort_by(|a, b| a.confidence.cmp(&b.confidence).then(a.date.cmp(&b.date)));
        debug!(upcoming = upcoming.len(), past = past.len(), "selecting upcoming date");
        return upcoming.into_iter().next();
    }

    past.sort_by(|a, b| b.date.cmp(&a.date));
    if !past.is_empty() {
        debug!(past = past.len(), "all candidates expired, selecting most recent");
    }
    past.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parsed::Confidence;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn candidate(date: NaiveDate, confidence: Confidence, raw: &str) -> ParsedDate {
        ParsedDate::new(date, confidence, raw)
    }

    fn today() -> NaiveDate {
        ymd(2026, 6, 1)
    }

    #[test]
    fn test_empty() {
        assert_eq!(select_best(Vec::new(), today()), None);
    }

    #[test]
    fn test_confidence_beats_distance() {
        let best = select_best(
            vec![
                candidate(ymd(2026, 7, 1), Confidence::Low, "07/01/26"),
                candidate(ymd(2027, 7, 1), Confidence::Medium, "2027-07-01"),
            ],
            today(),
        );
        assert_eq!(best.unwrap().raw_match, "2027-07-01");
    }

    #[test]
    fn test_soonest_within_confidence() {
        let best = select_best(
            vec![
                candidate(ymd(2027, 3, 1), Confidence::High, "a"),
                candidate(ymd(2026, 12, 1), Confidence::High, "b"),
                candidate(ymd(2028, 1, 1), Confidence::High, "c"),
            ],
            today(),
        );
        assert_eq!(best.unwrap().raw_match, "b");
    }

    #[test]
    fn test_today_counts_as_upcoming() {
        let best = select_best(
            vec![
                candidate(ymd(2026, 5, 31), Confidence::High, "yesterday"),
                candidate(today(), Confidence::High, "today"),
            ],
            today(),
        );
        assert_eq!(best.unwrap().raw_match, "today");
    }

    #[test]
    fn test_upcoming_beats_more_confident_past() {
        let best = select_best(
            vec![
                candidate(ymd(2026, 1, 1), Confidence::High, "past"),
                candidate(ymd(2026, 8, 1), Confidence::Low, "future"),
            ],
            today(),
        );
        assert_eq!(best.unwrap().raw_match, "future");
    }

    #[test]
    fn test_most_recent_past() {
        let best = select_best(
            vec![
                candidate(ymd(2019, 6, 1), Confidence::High, "EXP 06/01/2019"),
                candidate(ymd(2020, 1, 1), Confidence::High, "EXP 01/01/2020"),
            ],
            today(),
        );
        assert_eq!(best.unwrap().date, ymd(2020, 1, 1));
    }

    #[test]
    fn test_exact_ties_keep_scan_order() {
        let date = ymd(2027, 1, 1);
        let best = select_best(
            vec![
                candidate(date, Confidence::Medium, "first"),
                candidate(date, Confidence::Medium, "second"),
            ],
            today(),
        );
        assert_eq!(best.unwrap().raw_match, "first");

        let past = ymd(2025, 1, 1);
        let best = select_best(
            vec![
                candidate(past, Confidence::Low, "first"),
                candidate(past, Confidence::High, "second"),
            ],
            today(),
        );
        assert_eq!(best.unwrap().raw_match, "first");
    }
}
