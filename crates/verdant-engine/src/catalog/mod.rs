//! Model Catalog - validated datasets of LLM benchmark records
//!
//! A [`Dataset`] is constructed once from raw tabular rows, validated, and
//! derived per-million-token metrics are computed eagerly. After that the
//! dataset is read-only input to every advisor query; reloading replaces it
//! wholesale, so readers never observe partial updates.
//!
//! # Module Structure
//!
//! - `record`: raw catalog rows and validated model records
//! - `tier`: injectable name→power-tier mapping

mod record;
mod tier;

#[cfg(test)]
mod tests;

pub use record::{ModelRecord, RawModelRow, TOKENS_PER_MILLION};
pub use tier::{TierMap, DEFAULT_POWER_TIER};

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// An immutable, validated collection of model records.
///
/// Record order is canonical: it is the load order of the source table, and
/// it is the order every advisor query iterates in. Tie-breaks in
/// [`crate::advisor::recommend`] rely on it being stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<ModelRecord>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Build a dataset from raw rows, validating every record.
    ///
    /// Rejects empty input, duplicate or empty model names, and rows with
    /// non-positive `roi_tokens_per_dollar` or `co2_g` (those would make
    /// the derived metrics infinite or undefined).
    pub fn from_rows(rows: Vec<RawModelRow>, tiers: &TierMap) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(rows.len());

        for row in rows {
            if !seen.insert(row.model_name.clone()) {
                return Err(Error::DuplicateModel(row.model_name));
            }
            let tier = tiers.tier_for(&row.model_name);
            records.push(ModelRecord::from_row(row, tier)?);
        }

        debug!(models = records.len(), "dataset loaded");

        Ok(Self {
            records,
            loaded_at: Utc::now(),
        })
    }

    /// All records in canonical load order.
    #[must_use]
    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    /// Number of records (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A dataset is never empty, but the conventional pair to `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by model name.
    ///
    /// Fails with [`Error::UnknownModel`] on a miss; there is no default
    /// fallback record.
    pub fn get(&self, name: &str) -> Result<&ModelRecord> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| Error::UnknownModel(name.to_string()))
    }

    /// Iterate over model names in canonical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// When this dataset was constructed.
    #[must_use]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
