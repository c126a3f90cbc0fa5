//! Card number classification and validity queries.
//!
//! A `Detector` wraps one raw card number and answers read-only queries
//! against the default brand registry. It holds no other state, so every
//! answer is a pure function of the stored number and the registry
//! contents at call time.
//!
//! The input is taken verbatim. Separator stripping is a caller concern
//! (see `ext::strip_separators`); any non-digit byte simply makes every
//! structural query come back empty. Queries never fail: card numbers
//! arrive from untrusted form fields, and classifying garbage must yield
//! "no match", not a fault.

use smallvec::SmallVec;
use tracing::trace;

use crate::luhn;
use crate::mii::IssuerCategory;
use crate::registry::{with_default_registry, BrandId, BrandRegistry};

/// Brand and validity queries over a single card number.
#[derive(Debug, Clone)]
pub struct Detector {
    number: String,
    digits: Option<SmallVec<[u8; 20]>>,
}

impl Detector {
    /// Wraps a raw card number. The string is stored unmodified.
    pub fn new(number: impl Into<String>) -> Self {
        let number = number.into();
        let digits = parse_digits(&number);
        Self { number, digits }
    }

    /// The stored number, exactly as supplied.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// ISO/IEC 7812 issuer category of the leading digit, if the number
    /// starts with one.
    pub fn issuer_category(&self) -> Option<IssuerCategory> {
        self.number
            .chars()
            .next()
            .and_then(IssuerCategory::from_leading_digit)
    }

    /// All brands whose length and prefix rules accept the number, in
    /// registry order. Checksum is not consulted.
    pub fn matching_brands(&self) -> Vec<BrandId> {
        let Some(digits) = self.digits.as_deref() else {
            return Vec::new();
        };
        with_default_registry(|registry| {
            registry
                .all()
                .filter(|(_, rule)| rule.matches(digits))
                .map(|(id, _)| id.clone())
                .collect()
        })
    }

    /// Whether `brand`'s rule structurally accepts the number. Structural
    /// only: a failing checksum does not change the answer.
    pub fn matches_brand(&self, brand: &str) -> bool {
        let Some(digits) = self.digits.as_deref() else {
            return false;
        };
        with_default_registry(|registry| {
            registry
                .lookup(brand)
                .is_some_and(|rule| rule.matches(digits))
        })
    }

    /// The first brand in registry order that structurally accepts the
    /// number and passes its checksum condition, or `None`.
    pub fn brand(&self) -> Option<BrandId> {
        self.brand_among(&[])
    }

    /// Like `brand`, restricted to `candidates` (any-brand when empty).
    /// Registry order still decides between several matching candidates.
    pub fn brand_among(&self, candidates: &[&str]) -> Option<BrandId> {
        let digits = self.digits.as_deref()?;
        with_default_registry(|registry| {
            first_valid(digits, registry, candidates, luhn::valid_digits).cloned()
        })
    }

    /// Whether the number resolves to any registered brand.
    pub fn is_valid(&self) -> bool {
        self.is_valid_among(&[])
    }

    /// Whether the number resolves to one of `candidates` (any-brand when
    /// empty).
    pub fn is_valid_among(&self, candidates: &[&str]) -> bool {
        let Some(digits) = self.digits.as_deref() else {
            return false;
        };
        with_default_registry(|registry| {
            first_valid(digits, registry, candidates, luhn::valid_digits).is_some()
        })
    }
}

/// Walks the registry in order and returns the first brand that passes the
/// candidate filter, matches structurally, and satisfies its checksum
/// condition.
///
/// The checksum runs only after a structural match and at most once per
/// evaluated brand; `skip_luhn` brands never invoke it. Taking the checksum
/// as a parameter keeps that contract observable in tests.
fn first_valid<'r, F>(
    digits: &[u8],
    registry: &'r BrandRegistry,
    candidates: &[&str],
    mut checksum: F,
) -> Option<&'r BrandId>
where
    F: FnMut(&[u8]) -> bool,
{
    for (id, rule) in registry.all() {
        if !candidates.is_empty()
            && !candidates
                .iter()
                .any(|candidate| id.as_str().eq_ignore_ascii_case(candidate))
        {
            continue;
        }
        if !rule.matches(digits) {
            continue;
        }
        if rule.options.skip_luhn || checksum(digits) {
            trace!(brand = %id, "card number resolved");
            return Some(id);
        }
    }
    None
}

fn parse_digits(number: &str) -> Option<SmallVec<[u8; 20]>> {
    if number.is_empty() {
        return None;
    }
    number
        .bytes()
        .map(|b| {
            if b.is_ascii_digit() {
                Some(b - b'0')
            } else {
                None
            }
        })
        .collect()
}
