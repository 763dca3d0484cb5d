//! Integration tests for Verdant
//!
//! These tests exercise the full flow the CLI drives: parse a TOML catalog
//! into raw rows, build a validated dataset, then run every advisor
//! operation against it.

use verdant_engine::{
    advisor, Dataset, PriorityWeights, RankMetric, RawModelRow, TierMap, DEFAULT_POWER_TIER,
};

const CATALOG: &str = r#"
[tiers]
"mistral:7b" = 2

[[models]]
model_name = "gemma:2b"
roi_tokens_per_dollar = 210000.0
co2_g = 3.1

[[models]]
model_name = "llama3:70b"
roi_tokens_per_dollar = 8200.0
co2_g = 74.5
cost_usd = 1.07
energy_Wh = 131.0

[[models]]
model_name = "mistral:7b"
roi_tokens_per_dollar = 90000.0
co2_g = 8.0
"#;

#[derive(serde::Deserialize)]
struct Catalog {
    models: Vec<RawModelRow>,
    #[serde(default)]
    tiers: std::collections::HashMap<String, u8>,
}

fn load_dataset() -> Dataset {
    let catalog: Catalog = toml::from_str(CATALOG).expect("catalog parses");

    let mut tiers = TierMap::default();
    for (name, tier) in catalog.tiers {
        tiers.insert(name, tier);
    }

    Dataset::from_rows(catalog.models, &tiers).expect("catalog is valid")
}

#[test]
fn test_catalog_to_dataset() {
    let dataset = load_dataset();

    assert_eq!(dataset.len(), 3);
    // Built-in tier map applies
    assert_eq!(dataset.get("gemma:2b").unwrap().power_tier, 1);
    assert_eq!(dataset.get("llama3:70b").unwrap().power_tier, 3);
    // [tiers] override beats the unmapped default
    assert_eq!(dataset.get("mistral:7b").unwrap().power_tier, 2);
    assert_ne!(dataset.get("mistral:7b").unwrap().power_tier, DEFAULT_POWER_TIER);
    // Optional columns survive the load
    let large = dataset.get("llama3:70b").unwrap();
    assert_eq!(large.cost_usd, Some(1.07));
    assert_eq!(large.energy_wh, Some(131.0));
}

#[test]
fn test_rank_cheapest_last() {
    let dataset = load_dataset();
    let ranked = advisor::rank(&dataset, RankMetric::UsdPerMillionTokens);

    // Highest cost first, so the big model tops the chart
    assert_eq!(ranked[0].name, "llama3:70b");
    assert_eq!(ranked.last().unwrap().name, "gemma:2b");
}

#[test]
fn test_recommend_balances_priorities() {
    let dataset = load_dataset();

    // Cost-only priorities pick the cheapest model
    let frugal = PriorityWeights::new(1.0, 0.0, 0.0).unwrap();
    assert_eq!(advisor::recommend(&dataset, &frugal).name, "gemma:2b");

    // Power-only priorities pick the strongest tier
    let strongest = PriorityWeights::new(0.0, 0.0, 1.0).unwrap();
    assert_eq!(advisor::recommend(&dataset, &strongest).name, "llama3:70b");
}

#[test]
fn test_estimate_and_compare_flow() {
    let dataset = load_dataset();
    let base = dataset.get("llama3:70b").unwrap();
    let alt = dataset.get("gemma:2b").unwrap();

    let monthly_tokens = 10_000_000;
    let quarterly = 3;

    let base_proj = advisor::project(base, monthly_tokens, quarterly);
    let alt_proj = advisor::project(alt, monthly_tokens, quarterly);
    let comparison = advisor::compare(base, alt, monthly_tokens, quarterly);

    assert!((comparison.money_saved - (base_proj.cost_usd - alt_proj.cost_usd)).abs() < 1e-9);
    assert!(comparison.money_saved > 0.0, "the small model is cheaper");
    assert!(comparison.co2_saved_kg > 0.0, "the small model is cleaner");
    assert!(comparison.percent_saved > 0.0 && comparison.percent_saved < 1.0);
}

#[test]
fn test_route_saves_against_all_large_baseline() {
    let dataset = load_dataset();
    let small = dataset.get("gemma:2b").unwrap();
    let large = dataset.get("llama3:70b").unwrap();

    let routed = advisor::tiered_routing(small, large, 0.6, 10_000_000).unwrap();

    assert!(routed.tiered_cost < routed.baseline_cost);
    assert!(routed.cost_savings > 0.0);
    assert!(routed.co2_savings_kg > 0.0);
    assert!(
        (routed.cost_savings - (routed.baseline_cost - routed.tiered_cost)).abs() < 1e-9
    );
}
