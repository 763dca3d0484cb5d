//! Tests for catalog module

use super::*;
use crate::error::Error;

fn row(name: &str, roi: f64, co2: f64) -> RawModelRow {
    RawModelRow {
        model_name: name.to_string(),
        roi_tokens_per_dollar: roi,
        co2_g: co2,
        cost_usd: None,
        energy_wh: None,
    }
}

#[test]
fn test_derived_metrics() {
    let dataset = Dataset::from_rows(vec![row("a", 10.0, 5.0)], &TierMap::empty()).unwrap();
    let record = dataset.get("a").unwrap();

    assert!((record.usd_per_million_tokens - 100_000.0).abs() < 1e-9);
    assert!((record.co2_g_per_million_tokens - 500_000.0).abs() < 1e-9);
    assert!((record.sustainability_score - 2.0).abs() < 1e-9);
}

#[test]
fn test_rejects_non_positive_roi() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = Dataset::from_rows(vec![row("a", bad, 5.0)], &TierMap::empty()).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { .. }), "roi={bad}");
    }
}

#[test]
fn test_rejects_non_positive_co2() {
    for bad in [0.0, -0.5, f64::NAN] {
        let err = Dataset::from_rows(vec![row("a", 10.0, bad)], &TierMap::empty()).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { .. }), "co2={bad}");
    }
}

#[test]
fn test_rejects_empty_name() {
    let err = Dataset::from_rows(vec![row("", 10.0, 5.0)], &TierMap::empty()).unwrap_err();
    assert!(matches!(err, Error::InvalidRecord { .. }));
}

#[test]
fn test_rejects_duplicate_name() {
    let rows = vec![row("a", 10.0, 5.0), row("a", 20.0, 5.0)];
    let err = Dataset::from_rows(rows, &TierMap::empty()).unwrap_err();
    assert!(matches!(err, Error::DuplicateModel(name) if name == "a"));
}

#[test]
fn test_rejects_empty_dataset() {
    let err = Dataset::from_rows(Vec::new(), &TierMap::empty()).unwrap_err();
    assert!(matches!(err, Error::EmptyDataset));
}

#[test]
fn test_unknown_model_lookup() {
    let dataset = Dataset::from_rows(vec![row("a", 10.0, 5.0)], &TierMap::empty()).unwrap();
    let err = dataset.get("missing").unwrap_err();
    assert!(matches!(err, Error::UnknownModel(name) if name == "missing"));
}

#[test]
fn test_default_tier_map() {
    let tiers = TierMap::default();

    assert_eq!(tiers.tier_for("gemma:2b"), 1);
    assert_eq!(tiers.tier_for("gemma:7b"), 2);
    assert_eq!(tiers.tier_for("codellama:7b"), 2);
    assert_eq!(tiers.tier_for("llama3"), 2);
    assert_eq!(tiers.tier_for("codellama:70b"), 3);
    assert_eq!(tiers.tier_for("llama3:70b"), 3);

    // Unmapped names fall back to the documented default
    assert_eq!(tiers.tier_for("mistral:7b"), DEFAULT_POWER_TIER);
}

#[test]
fn test_injected_tier_map() {
    let mut tiers = TierMap::empty();
    tiers.insert("a", 3);

    let rows = vec![row("a", 10.0, 5.0), row("b", 20.0, 5.0)];
    let dataset = Dataset::from_rows(rows, &tiers).unwrap();

    assert_eq!(dataset.get("a").unwrap().power_tier, 3);
    assert_eq!(dataset.get("b").unwrap().power_tier, DEFAULT_POWER_TIER);
}

#[test]
fn test_canonical_order_preserved() {
    let rows = vec![row("c", 1.0, 1.0), row("a", 2.0, 2.0), row("b", 3.0, 3.0)];
    let dataset = Dataset::from_rows(rows, &TierMap::empty()).unwrap();

    let names: Vec<&str> = dataset.names().collect();
    assert_eq!(names, vec!["c", "a", "b"]);
    assert_eq!(dataset.len(), 3);
}
