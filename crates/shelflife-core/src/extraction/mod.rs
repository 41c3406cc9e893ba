//! Expiration date extraction from label text.

mod extractor;
pub mod rules;
mod select;

pub use extractor::{extract_expiration_date, DateExtractor};
pub use rules::NumericOrder;
pub use select::select_best;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the single best value from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract every candidate value considered for `extract`.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
