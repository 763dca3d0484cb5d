//! Ranked model lists by a single metric.

use crate::catalog::{Dataset, ModelRecord};
use serde::{Deserialize, Serialize};

/// Metric selector for ranked lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankMetric {
    /// USD per 1M tokens
    UsdPerMillionTokens,
    /// Grams of CO2 per 1M tokens
    Co2GPerMillionTokens,
    /// Tokens produced per US dollar spent
    RoiTokensPerDollar,
    /// Tokens per dollar per gram of CO2
    SustainabilityScore,
}

impl RankMetric {
    /// Extract this metric's value from a record.
    #[must_use]
    pub fn value(&self, record: &ModelRecord) -> f64 {
        match self {
            Self::UsdPerMillionTokens => record.usd_per_million_tokens,
            Self::Co2GPerMillionTokens => record.co2_g_per_million_tokens,
            Self::RoiTokensPerDollar => record.roi_tokens_per_dollar,
            Self::SustainabilityScore => record.sustainability_score,
        }
    }
}

/// One entry of a ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedModel {
    /// Model name
    pub name: String,
    /// Value of the ranking metric for this model
    pub value: f64,
}

/// Rank all models by a metric, highest value first.
///
/// The sort is stable, so records with equal values keep their canonical
/// load order.
#[must_use]
pub fn rank(dataset: &Dataset, metric: RankMetric) -> Vec<RankedModel> {
    let mut out: Vec<RankedModel> = dataset
        .records()
        .iter()
        .map(|r| RankedModel {
            name: r.name.clone(),
            value: metric.value(r),
        })
        .collect();

    out.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    out
}
