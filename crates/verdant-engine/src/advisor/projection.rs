//! Volume-scaled cost/CO2 projections and pairwise savings.

use crate::catalog::{ModelRecord, TOKENS_PER_MILLION};
use serde::{Deserialize, Serialize};

/// Projected cost and CO2 for one model at a given token volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Projected cost in USD
    pub cost_usd: f64,
    /// Projected CO2 in kilograms
    pub co2_kg: f64,
}

/// Savings from switching `base` to `alt` at identical volume and period.
///
/// Sign convention: positive values mean `alt` is cheaper/cleaner than
/// `base`. Presenting "savings" vs. "extra cost" based on sign is the
/// consumer's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// `base` cost minus `alt` cost, USD
    pub money_saved: f64,
    /// `money_saved / base_cost`; defined as `0` when the base cost is `0`
    /// so the function stays total
    pub percent_saved: f64,
    /// `base` CO2 minus `alt` CO2, kilograms
    pub co2_saved_kg: f64,
}

/// Project cost and CO2 at a fractional number of million-token units.
pub(super) fn project_millions(record: &ModelRecord, millions: f64) -> Projection {
    Projection {
        cost_usd: record.usd_per_million_tokens * millions,
        co2_kg: record.co2_g_per_million_tokens * millions / 1000.0,
    }
}

/// Project cost and CO2 for one model.
///
/// `token_volume` is a token count for one period; `period_multiplier`
/// scales it to the reporting horizon (1 monthly, 3 quarterly, 12 yearly).
/// Mapping period labels to multipliers is the caller's job.
#[must_use]
pub fn project(record: &ModelRecord, token_volume: u64, period_multiplier: u32) -> Projection {
    let millions = token_volume as f64 * f64::from(period_multiplier) / TOKENS_PER_MILLION;
    project_millions(record, millions)
}

/// Compare two models under identical volume and period.
#[must_use]
pub fn compare(
    base: &ModelRecord,
    alt: &ModelRecord,
    token_volume: u64,
    period_multiplier: u32,
) -> Comparison {
    let base_proj = project(base, token_volume, period_multiplier);
    let alt_proj = project(alt, token_volume, period_multiplier);

    let money_saved = base_proj.cost_usd - alt_proj.cost_usd;
    let percent_saved = if base_proj.cost_usd > 0.0 {
        money_saved / base_proj.cost_usd
    } else {
        0.0
    };

    Comparison {
        money_saved,
        percent_saved,
        co2_saved_kg: base_proj.co2_kg - alt_proj.co2_kg,
    }
}
