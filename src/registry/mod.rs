//! Brand rule registry.
//!
//! An ordered set of declarative brand rules with an O(1) id index.
//! Iteration order equals registration order (built-ins first, in canonical
//! order, then dynamic additions) and is the deterministic tie-break when a
//! number structurally matches several brands. A process-wide default
//! registry backs `Detector` queries; isolated instances are available for
//! hosts that need their own table.
//!
//! Registration is additive only. Rules are validated on entry so queries
//! never fail.

mod builtin;
mod types;

pub use types::{BrandId, BrandRule, PrefixPattern, RuleOptions};

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Errors raised while registering a brand rule. Queries have no error
/// path: a lookup miss is `None`.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("brand {id} is already registered")]
    DuplicateBrand { id: BrandId },

    #[error("invalid rule for brand {id}: {reason}")]
    InvalidRule { id: BrandId, reason: String },
}

/// Ordered brand rule table.
#[derive(Debug, Clone)]
pub struct BrandRegistry {
    entries: Vec<(BrandId, BrandRule)>,
    index: FxHashMap<BrandId, usize>,
}

impl BrandRegistry {
    /// Registry seeded with the built-in brands in canonical order.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (id, rule) in builtin::BUILTIN_BRANDS.iter() {
            registry.insert(id.clone(), rule.clone());
        }
        registry
    }

    /// Registry with no rules at all.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Registers a brand rule. Additive only: re-registering an existing id
    /// fails rather than silently replacing the earlier rule.
    pub fn add_brand(
        &mut self,
        id: impl Into<BrandId>,
        rule: BrandRule,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if let Err(reason) = rule.validate() {
            return Err(RegistryError::InvalidRule { id, reason });
        }
        if self.index.contains_key(id.as_str()) {
            return Err(RegistryError::DuplicateBrand { id });
        }
        debug!(
            brand = %id,
            lengths = ?rule.lengths,
            prefixes = rule.prefixes.len(),
            skip_luhn = rule.options.skip_luhn,
            "registered brand rule"
        );
        self.insert(id, rule);
        Ok(())
    }

    /// Rule for `id`, if registered. Ids are lowercase; an uppercase probe
    /// is normalized before giving up.
    pub fn lookup(&self, id: &str) -> Option<&BrandRule> {
        match self.index.get(id) {
            Some(&at) => Some(&self.entries[at].1),
            None if id.bytes().any(|b| b.is_ascii_uppercase()) => {
                let at = *self.index.get(id.to_ascii_lowercase().as_str())?;
                Some(&self.entries[at].1)
            }
            None => None,
        }
    }

    /// All rules in registration order.
    pub fn all(&self) -> impl Iterator<Item = (&BrandId, &BrandRule)> {
        self.entries.iter().map(|(id, rule)| (id, rule))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, id: BrandId, rule: BrandRule) {
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, rule));
    }
}

impl Default for BrandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: Lazy<RwLock<BrandRegistry>> =
    Lazy::new(|| RwLock::new(BrandRegistry::new()));

/// Registers a brand in the process-wide default registry used by
/// `Detector` queries.
pub fn register_brand(id: impl Into<BrandId>, rule: BrandRule) -> Result<(), RegistryError> {
    let mut registry = DEFAULT_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    registry.add_brand(id, rule)
}

/// Runs `f` with shared read access to the default registry. Writers are
/// excluded for the duration, so `f` sees a consistent table.
pub fn with_default_registry<T>(f: impl FnOnce(&BrandRegistry) -> T) -> T {
    let registry = DEFAULT_REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    f(&registry)
}

/// Restores the default registry to the built-in rule set, discarding any
/// dynamic registrations.
pub fn reset_default_registry() {
    let mut registry = DEFAULT_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *registry = BrandRegistry::new();
    debug!("default registry reset to built-in brands");
}
