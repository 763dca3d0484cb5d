//! Tiered workload routing between a small and a large model.
//!
//! Routing a fraction of requests to a cheaper model is the one cost/carbon
//! lever here that carries real intent, so it gets a named operation even
//! though it is algebraically just [`super::project`] composed over a
//! workload split.

use super::projection::project_millions;
use crate::catalog::{ModelRecord, TOKENS_PER_MILLION};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Blended cost/CO2 of a workload split, against an all-large baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TieredRouting {
    /// Cost of the split workload, USD
    pub tiered_cost: f64,
    /// CO2 of the split workload, kilograms
    pub tiered_co2_kg: f64,
    /// Cost of routing 100% of tokens to the large model, USD
    pub baseline_cost: f64,
    /// CO2 of routing 100% of tokens to the large model, kilograms
    pub baseline_co2_kg: f64,
    /// `baseline_cost - tiered_cost`
    pub cost_savings: f64,
    /// `baseline_co2_kg - tiered_co2_kg`
    pub co2_savings_kg: f64,
}

/// Split a monthly token workload between two models.
///
/// `small_share` of the tokens go to `small`, the remainder to `large`;
/// the result compares the blend against sending everything to `large`.
/// At `small_share = 1.0` the blend reproduces `project(small, ...)`
/// exactly, at `0.0` it reproduces the baseline.
pub fn tiered_routing(
    small: &ModelRecord,
    large: &ModelRecord,
    small_share: f64,
    monthly_tokens: u64,
) -> Result<TieredRouting> {
    if !(0.0..=1.0).contains(&small_share) {
        return Err(Error::ShareOutOfRange(small_share));
    }

    let total_millions = monthly_tokens as f64 / TOKENS_PER_MILLION;
    let small_millions = total_millions * small_share;
    let large_millions = total_millions - small_millions;

    let small_proj = project_millions(small, small_millions);
    let large_proj = project_millions(large, large_millions);
    let baseline = project_millions(large, total_millions);

    let tiered_cost = small_proj.cost_usd + large_proj.cost_usd;
    let tiered_co2_kg = small_proj.co2_kg + large_proj.co2_kg;

    Ok(TieredRouting {
        tiered_cost,
        tiered_co2_kg,
        baseline_cost: baseline.cost_usd,
        baseline_co2_kg: baseline.co2_kg,
        cost_savings: baseline.cost_usd - tiered_cost,
        co2_savings_kg: baseline.co2_kg - tiered_co2_kg,
    })
}
