//! Advisor - the recommendation engine
//!
//! Every operation here is a pure function over an immutable
//! [`crate::Dataset`]: linear scans, no shared state, no I/O.
//!
//! # Module Structure
//!
//! - `weights`: user priority weights for the composite score
//! - `normalize`: dataset-relative max normalization
//! - `score`: weighted composite scoring and recommendation
//! - `rank`: ranked model lists by a single metric
//! - `projection`: volume-scaled cost/CO2 estimates and pairwise savings
//! - `routing`: tiered workload splits between two models

mod normalize;
mod projection;
mod rank;
mod routing;
mod score;
mod weights;


pub use normalize::{normalize, NormalizedRecord};
pub use projection::{compare, project, Comparison, Projection};
pub use rank::{rank, RankMetric, RankedModel};
pub use routing::{tiered_routing, TieredRouting};
pub use score::{recommend, score, ScoredModel};
pub use weights::PriorityWeights;
