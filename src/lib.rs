//! cardbrand: payment card brand detection and structural validation
//!
//! This crate classifies card numbers and checks that they are well-formed
//! before further processing:
//! - Registry: declarative per-brand rules (digit counts, prefix patterns,
//!   checksum exemption) in a fixed registration order that doubles as the
//!   tie-break for overlapping prefixes
//! - Detector: structural matching and first-match brand resolution over a
//!   single card number
//! - Luhn: mod-10 checksum for catching transcription errors
//! - MII: ISO/IEC 7812 issuer-category classification of the leading digit
//!
//! Validity here means structure only. Nothing in this crate contacts a
//! network, knows whether an account is funded, or looks at cardholder
//! name, expiry, or CVV.

pub mod detector;
pub mod ext;
pub mod luhn;
pub mod mii;
pub mod registry;

// Re-exports for convenience
pub use detector::Detector;
pub use ext::{strip_separators, CardNumberExt};
pub use mii::IssuerCategory;
pub use registry::{
    register_brand, reset_default_registry, with_default_registry, BrandId, BrandRegistry,
    BrandRule, PrefixPattern, RegistryError, RuleOptions,
};
