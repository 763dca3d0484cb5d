//! User priority weights.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Priority weights for the composite score, each in `[0.0, 1.0]`.
///
/// The weights need not sum to 1: the composite score is a weighted sum,
/// not a convex combination, so relative magnitude (not absolute scale)
/// determines the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    cost: f64,
    carbon: f64,
    power: f64,
}

impl Default for PriorityWeights {
    /// Balanced cost/carbon preference with moderate power priority.
    fn default() -> Self {
        Self {
            cost: 0.7,
            carbon: 0.7,
            power: 0.5,
        }
    }
}

impl PriorityWeights {
    /// Validate and construct weights.
    ///
    /// Each weight must be in `[0.0, 1.0]`; NaN is rejected.
    pub fn new(cost: f64, carbon: f64, power: f64) -> Result<Self> {
        for (name, value) in [("cost", cost), ("carbon", carbon), ("power", power)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::WeightOutOfRange { name, value });
            }
        }
        Ok(Self {
            cost,
            carbon,
            power,
        })
    }

    /// Weight on (lower) cost.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Weight on (lower) CO2 emissions.
    #[must_use]
    pub fn carbon(&self) -> f64 {
        self.carbon
    }

    /// Weight on (higher) power tier.
    #[must_use]
    pub fn power(&self) -> f64 {
        self.power
    }
}
