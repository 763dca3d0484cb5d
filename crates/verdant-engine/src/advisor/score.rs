//! Weighted composite scoring and recommendation.

use super::normalize::normalize;
use super::weights::PriorityWeights;
use crate::catalog::Dataset;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A record annotated with its composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredModel {
    /// Model name
    pub name: String,
    /// Weighted sum of normalized cost, CO2 and power signals
    pub composite_score: f64,
    /// USD per 1M tokens (carried for display by the consumer)
    pub usd_per_million_tokens: f64,
    /// Grams of CO2 per 1M tokens
    pub co2_g_per_million_tokens: f64,
    /// Coarse capability tier
    pub power_tier: u8,
}

/// Score every record against the given priorities.
///
/// Cost and CO2 are "lower is better", so they contribute
/// `1 - normalized_value`; power is "higher is better" and contributes
/// `normalized_value` directly. Returns annotated copies in canonical load
/// order; the dataset itself is untouched.
#[must_use]
pub fn score(dataset: &Dataset, weights: &PriorityWeights) -> Vec<ScoredModel> {
    let norms = normalize(dataset);

    dataset
        .records()
        .iter()
        .zip(norms)
        .map(|(record, norm)| ScoredModel {
            name: record.name.clone(),
            composite_score: weights.cost() * (1.0 - norm.cost)
                + weights.carbon() * (1.0 - norm.co2)
                + weights.power() * norm.power,
            usd_per_million_tokens: record.usd_per_million_tokens,
            co2_g_per_million_tokens: record.co2_g_per_million_tokens,
            power_tier: record.power_tier,
        })
        .collect()
}

/// Pick the record with the maximum composite score.
///
/// Ties are broken deterministically: the strict `>` comparison keeps the
/// first record achieving the maximum under canonical load order, so
/// repeated calls with identical inputs always return the same model.
#[must_use]
pub fn recommend(dataset: &Dataset, weights: &PriorityWeights) -> ScoredModel {
    let mut scored = score(dataset, weights);

    let mut best = 0;
    for i in 1..scored.len() {
        if scored[i].composite_score > scored[best].composite_score {
            best = i;
        }
    }

    // A Dataset is never empty, so index 0 always exists.
    let pick = scored.swap_remove(best);
    debug!(model = %pick.name, score = pick.composite_score, "recommendation selected");
    pick
}
