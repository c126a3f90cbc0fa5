//! Brand rule data model.
//!
//! Rules are declarative records: accepted digit counts, leading-digit
//! patterns, and a fixed-shape option set. They carry no procedural logic
//! and deserialize directly from host configuration.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Brand identifier in lowercase canonical form.
///
/// Construction lowercases ASCII, so `"Visa"`, `"VISA"` and `"visa"` name
/// the same registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct BrandId(String);

impl BrandId {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.bytes().any(|b| b.is_ascii_uppercase()) {
            Self(id.to_ascii_lowercase())
        } else {
            Self(id)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BrandId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BrandId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for BrandId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for BrandId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BrandId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BrandId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for BrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Leading-digit pattern: a fixed digit string or an inclusive numeric
/// range between two equal-length digit strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefixPattern {
    Literal(String),
    Range { start: String, end: String },
}

impl PrefixPattern {
    pub fn literal(prefix: impl Into<String>) -> Self {
        Self::Literal(prefix.into())
    }

    pub fn range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::Range {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether the leading digits of `digits` (values 0-9) satisfy the
    /// pattern. A number shorter than the pattern never matches.
    pub fn matches(&self, digits: &[u8]) -> bool {
        match self {
            Self::Literal(prefix) => {
                digits.len() >= prefix.len()
                    && prefix
                        .bytes()
                        .zip(digits)
                        .all(|(p, &d)| p.wrapping_sub(b'0') == d)
            }
            Self::Range { start, end } => {
                let width = start.len();
                digits.len() >= width
                    && cmp_prefix(&digits[..width], start) != Ordering::Less
                    && cmp_prefix(&digits[..width], end) != Ordering::Greater
            }
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            Self::Literal(prefix) => require_digits(prefix),
            Self::Range { start, end } => {
                require_digits(start)?;
                require_digits(end)?;
                if start.len() != end.len() {
                    return Err(format!(
                        "range bounds {start:?} and {end:?} differ in length"
                    ));
                }
                if start > end {
                    return Err(format!("range start {start:?} exceeds end {end:?}"));
                }
                Ok(())
            }
        }
    }
}

/// Numeric comparison of a digit prefix against an equal-length bound.
/// Same-length digit sequences order identically by value and position.
fn cmp_prefix(prefix: &[u8], bound: &str) -> Ordering {
    prefix
        .iter()
        .copied()
        .cmp(bound.bytes().map(|b| b.wrapping_sub(b'0')))
}

fn require_digits(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("empty prefix pattern".to_string());
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("prefix {s:?} contains a non-digit character"));
    }
    Ok(())
}

/// Per-brand options. Fixed shape with documented defaults, not an open
/// key/value bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Exempts the brand from the Luhn checksum; structural match alone
    /// decides validity.
    pub skip_luhn: bool,
    /// Display label. Never consulted by matching.
    pub brand_name: Option<String>,
}

/// One brand's structural rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRule {
    /// Accepted total digit counts.
    pub lengths: SmallVec<[u8; 8]>,
    /// Leading-digit patterns; one match suffices.
    pub prefixes: Vec<PrefixPattern>,
    #[serde(default)]
    pub options: RuleOptions,
}

impl BrandRule {
    pub fn new(
        lengths: impl IntoIterator<Item = u8>,
        prefixes: impl IntoIterator<Item = PrefixPattern>,
    ) -> Self {
        Self::with_options(lengths, prefixes, RuleOptions::default())
    }

    pub fn with_options(
        lengths: impl IntoIterator<Item = u8>,
        prefixes: impl IntoIterator<Item = PrefixPattern>,
        options: RuleOptions,
    ) -> Self {
        Self {
            lengths: lengths.into_iter().collect(),
            prefixes: prefixes.into_iter().collect(),
            options,
        }
    }

    /// Structural acceptance: digit count is one of `lengths` and at least
    /// one prefix pattern matches. Checksum is not consulted here.
    pub fn matches(&self, digits: &[u8]) -> bool {
        u8::try_from(digits.len()).is_ok_and(|count| self.lengths.contains(&count))
            && self.prefixes.iter().any(|prefix| prefix.matches(digits))
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.lengths.is_empty() {
            return Err("no accepted lengths".to_string());
        }
        if self.lengths.contains(&0) {
            return Err("length 0 is not a valid digit count".to_string());
        }
        if self.prefixes.is_empty() {
            return Err("no prefix patterns".to_string());
        }
        for prefix in &self.prefixes {
            prefix.validate()?;
        }
        Ok(())
    }
}
