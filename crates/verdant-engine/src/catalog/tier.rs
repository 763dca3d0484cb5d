//! Name → power-tier mapping.
//!
//! The power tier is a coarse 1..=3 proxy for a model's capability class,
//! used only as a ranking signal. The mapping is an explicit, injectable
//! structure with a documented default so test suites can substitute
//! synthetic tiers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tier assigned to any model missing from the map.
pub const DEFAULT_POWER_TIER: u8 = 1;

/// Injectable name → power-tier lookup.
///
/// [`TierMap::tier_for`] is total: unmapped names get
/// [`DEFAULT_POWER_TIER`]. Tier values are expected to be in 1..=3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierMap {
    tiers: HashMap<String, u8>,
}

impl Default for TierMap {
    /// The built-in mapping for the benchmark model set.
    fn default() -> Self {
        let mut tiers = HashMap::new();
        tiers.insert("gemma:2b".to_string(), 1);
        tiers.insert("gemma:7b".to_string(), 2);
        tiers.insert("codellama:7b".to_string(), 2);
        tiers.insert("llama3".to_string(), 2);
        tiers.insert("codellama:70b".to_string(), 3);
        tiers.insert("llama3:70b".to_string(), 3);
        Self { tiers }
    }
}

impl TierMap {
    /// Create a map from explicit assignments.
    #[must_use]
    pub fn new(tiers: HashMap<String, u8>) -> Self {
        Self { tiers }
    }

    /// Create a map with no assignments (every model gets the default tier).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tiers: HashMap::new(),
        }
    }

    /// Add or override a tier assignment.
    pub fn insert(&mut self, name: impl Into<String>, tier: u8) {
        self.tiers.insert(name.into(), tier);
    }

    /// Tier for a model name; unmapped names get [`DEFAULT_POWER_TIER`].
    #[must_use]
    pub fn tier_for(&self, name: &str) -> u8 {
        self.tiers.get(name).copied().unwrap_or(DEFAULT_POWER_TIER)
    }
}
