//! Dataset-relative max normalization.

use crate::catalog::Dataset;
use serde::{Deserialize, Serialize};

/// One record's metrics divided by the dataset maximum for each metric.
///
/// Every value is in `(0, 1]`; the record achieving the dataset maximum
/// normalizes to exactly `1.0`. When all records share a value for a metric
/// every record normalizes to `1.0` — that is well-defined, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Model name
    pub name: String,
    /// `usd_per_million_tokens` relative to the dataset maximum
    pub cost: f64,
    /// `co2_g_per_million_tokens` relative to the dataset maximum
    pub co2: f64,
    /// `power_tier` relative to the dataset maximum
    pub power: f64,
}

/// Normalize every record against the dataset maxima.
///
/// Load-time validation guarantees strictly positive metrics, so the maxima
/// are never zero and no division guard is needed here.
#[must_use]
pub fn normalize(dataset: &Dataset) -> Vec<NormalizedRecord> {
    let records = dataset.records();

    let max_cost = records
        .iter()
        .fold(f64::MIN, |m, r| m.max(r.usd_per_million_tokens));
    let max_co2 = records
        .iter()
        .fold(f64::MIN, |m, r| m.max(r.co2_g_per_million_tokens));
    let max_power = records
        .iter()
        .fold(f64::MIN, |m, r| m.max(f64::from(r.power_tier)));

    records
        .iter()
        .map(|r| NormalizedRecord {
            name: r.name.clone(),
            cost: r.usd_per_million_tokens / max_cost,
            co2: r.co2_g_per_million_tokens / max_co2,
            power: f64::from(r.power_tier) / max_power,
        })
        .collect()
}
