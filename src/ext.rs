//! Boundary conveniences for host code that holds card numbers as plain
//! strings, typically straight from a form field.
//!
//! Normalization happens here and only here: the core `Detector` takes its
//! input verbatim. These helpers strip the common group separators before
//! querying, so `"4111 1111 1111 1111"` classifies like its digit form.

use crate::detector::Detector;
use crate::registry::BrandId;

/// Removes ASCII space and hyphen group separators. Every other character
/// is kept and will fail digit parsing downstream.
pub fn strip_separators(number: &str) -> String {
    number.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

/// Card queries directly on string-typed numbers.
pub trait CardNumberExt {
    /// Resolved brand of the number, after separator stripping.
    fn card_brand(&self) -> Option<BrandId>;

    /// Whether the number resolves to one of `candidates` (any registered
    /// brand when empty), after separator stripping.
    fn is_valid_card(&self, candidates: &[&str]) -> bool;
}

impl CardNumberExt for str {
    fn card_brand(&self) -> Option<BrandId> {
        Detector::new(strip_separators(self)).brand()
    }

    fn is_valid_card(&self, candidates: &[&str]) -> bool {
        Detector::new(strip_separators(self)).is_valid_among(candidates)
    }
}
