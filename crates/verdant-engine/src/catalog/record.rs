//! Catalog rows and validated model records.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// All cost and CO2 ratios are reported per this many tokens.
pub const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// One raw row of the source table, before validation.
///
/// Field names follow the benchmark export columns. `cost_usd` and
/// `energy_Wh` are only present in some dataset variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawModelRow {
    /// Unique model identifier, e.g. "llama3:70b"
    pub model_name: String,
    /// Tokens produced per US dollar spent (must be strictly positive)
    pub roi_tokens_per_dollar: f64,
    /// CO2 emitted by the benchmark run in grams (must be strictly positive)
    pub co2_g: f64,
    /// Measured cost of the benchmark run in USD, when reported
    #[serde(default)]
    pub cost_usd: Option<f64>,
    /// Measured energy of the benchmark run in Wh, when reported
    #[serde(default, rename = "energy_Wh", alias = "energy_wh")]
    pub energy_wh: Option<f64>,
}

/// A validated model record with derived per-million-token metrics.
///
/// Derived fields are computed once at dataset construction and never
/// recomputed or mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Unique model identifier, e.g. "llama3:70b"
    pub name: String,
    /// Measured cost of the benchmark run in USD, when reported
    pub cost_usd: Option<f64>,
    /// CO2 emitted by the benchmark run in grams
    pub co2_grams: f64,
    /// Measured energy of the benchmark run in Wh, when reported
    pub energy_wh: Option<f64>,
    /// Tokens produced per US dollar spent
    pub roi_tokens_per_dollar: f64,
    /// Coarse capability tier in 1..=3 (see [`super::TierMap`])
    pub power_tier: u8,
    /// Derived: USD per 1M tokens
    pub usd_per_million_tokens: f64,
    /// Derived: grams of CO2 per 1M tokens
    pub co2_g_per_million_tokens: f64,
    /// Derived: tokens per dollar per gram of CO2 (alternate ranking metric)
    pub sustainability_score: f64,
}

impl ModelRecord {
    /// Validate a raw row and compute its derived metrics.
    pub(crate) fn from_row(row: RawModelRow, power_tier: u8) -> Result<Self> {
        if row.model_name.is_empty() {
            return Err(Error::InvalidRecord {
                model: String::new(),
                reason: "empty model name".to_string(),
            });
        }
        if !row.roi_tokens_per_dollar.is_finite() || row.roi_tokens_per_dollar <= 0.0 {
            return Err(Error::InvalidRecord {
                model: row.model_name,
                reason: format!(
                    "roi_tokens_per_dollar must be strictly positive, got {}",
                    row.roi_tokens_per_dollar
                ),
            });
        }
        if !row.co2_g.is_finite() || row.co2_g <= 0.0 {
            return Err(Error::InvalidRecord {
                model: row.model_name,
                reason: format!("co2_g must be strictly positive, got {}", row.co2_g),
            });
        }

        Ok(Self {
            usd_per_million_tokens: TOKENS_PER_MILLION / row.roi_tokens_per_dollar,
            co2_g_per_million_tokens: row.co2_g / row.roi_tokens_per_dollar * TOKENS_PER_MILLION,
            sustainability_score: row.roi_tokens_per_dollar / row.co2_g,
            name: row.model_name,
            cost_usd: row.cost_usd,
            co2_grams: row.co2_g,
            energy_wh: row.energy_wh,
            roi_tokens_per_dollar: row.roi_tokens_per_dollar,
            power_tier,
        })
    }
}
