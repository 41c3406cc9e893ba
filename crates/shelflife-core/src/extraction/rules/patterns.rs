//! Regex patterns for expiration dates on product labels.

use lazy_static::lazy_static;
use regex::Regex;

/// Expiration keyword variants: EXP, EXPIRES, EXPIRY, EXPIRATION, BEST BY,
/// BEST BEFORE, BEST IF USED BY, USE BY, BB, SELL BY.
pub const EXPIRY_KEYWORD: &str = r"(?:EXP(?:IR(?:ES?|Y|ATION))?|BEST\s*(?:BY|BEFORE|IF\s*USED\s*BY)|USE\s*BY|BB|SELL\s*BY)";

fn labeled(tail: &str) -> Regex {
    Regex::new(&["(?i)", EXPIRY_KEYWORD, tail].concat()).unwrap()
}

lazy_static! {
    // Labeled: "EXP 01/25/27", "BEST BY 01-25-2027", "USE BY: 01/25/2027", "SELL BY 01.25.27"
    pub static ref LABELED_NUMERIC: Regex = labeled(
        r"[:\s./]*([0-9]{1,2})[-/.\s]([0-9]{1,2})[-/.\s]([0-9]{2,4})"
    );

    // Labeled: "EXP JAN 25 2027", "BEST BY JAN 25, 2027"
    pub static ref LABELED_MONTH_DAY_YEAR: Regex = labeled(
        r"[:\s]*([A-Z]{3,9})[\s.,]*([0-9]{1,2})[\s,]*([0-9]{2,4})"
    );

    // Labeled: "EXP 25 JAN 2027", "BEST BY 25 JAN 27"
    pub static ref LABELED_DAY_MONTH_YEAR: Regex = labeled(
        r"[:\s]*([0-9]{1,2})[\s.,]*([A-Z]{3,9})[\s.,]*([0-9]{2,4})"
    );

    // Labeled: "EXP 2027-01-25"
    pub static ref LABELED_ISO: Regex = labeled(
        r"[:\s]*([0-9]{4})[-/.]([0-9]{1,2})[-/.]([0-9]{1,2})"
    );

    // Standalone boundaries are ASCII-only: an accented letter touching a
    // date is a break, not part of a word.

    // Standalone: 2027-01-25, 2027/01/25, 2027.01.25
    pub static ref STANDALONE_ISO: Regex = Regex::new(
        r"(?-u:\b)([0-9]{4})[-/.]([0-9]{1,2})[-/.]([0-9]{1,2})(?-u:\b)"
    ).unwrap();

    // Standalone: MM/DD/YY, MM/DD/YYYY (or DD/MM)
    pub static ref STANDALONE_NUMERIC: Regex = Regex::new(
        r"(?-u:\b)([0-9]{1,2})[-/.]([0-9]{1,2})[-/.]([0-9]{2,4})(?-u:\b)"
    ).unwrap();

    // Standalone: JAN 25 2027, JAN 25, 2027
    pub static ref STANDALONE_MONTH_DAY_YEAR: Regex = Regex::new(
        r"(?i)(?-u:\b)([A-Z]{3,9})[\s.,]+([0-9]{1,2})[\s,]+([0-9]{2,4})(?-u:\b)"
    ).unwrap();

    // Standalone: 25 JAN 2027
    pub static ref STANDALONE_DAY_MONTH_YEAR: Regex = Regex::new(
        r"(?i)(?-u:\b)([0-9]{1,2})[\s.,]+([A-Z]{3,9})[\s.,]+([0-9]{2,4})(?-u:\b)"
    ).unwrap();
}
