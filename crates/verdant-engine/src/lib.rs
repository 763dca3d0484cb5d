//! Verdant Engine - LLM cost and carbon decision support
//!
//! This crate provides the recommendation engine behind Verdant:
//! - Catalog: validated model records with per-million-token metrics
//! - Advisor: normalization, weighted scoring and recommendation
//! - Projections: volume-scaled cost/CO2 estimates and pairwise savings
//! - Routing: tiered workload splits between a small and a large model
//!
//! The engine is synchronous and purely functional: a [`Dataset`] is built
//! once from raw catalog rows, validated, and then treated as read-only by
//! every query. Reloading replaces the dataset wholesale.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod advisor;
pub mod catalog;
pub mod error;

pub use advisor::{
    compare, normalize, project, rank, recommend, score, tiered_routing, Comparison,
    NormalizedRecord, PriorityWeights, Projection, RankMetric, RankedModel, ScoredModel,
    TieredRouting,
};
pub use catalog::{Dataset, ModelRecord, RawModelRow, TierMap, DEFAULT_POWER_TIER};
pub use error::{Error, Result};
