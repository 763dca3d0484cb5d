//! Model catalog loading.
//!
//! The catalog is a TOML file with a `[[models]]` array matching the
//! engine's raw row shape, plus an optional `[tiers]` table that overrides
//! the built-in power-tier map. The engine itself owns no file format; this
//! loader is the boundary that turns a file into an in-memory dataset.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;
use verdant_engine::{Dataset, RawModelRow, TierMap};

/// On-disk catalog shape.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Benchmark rows, one per model
    pub models: Vec<RawModelRow>,
    /// Power-tier overrides by model name
    #[serde(default)]
    pub tiers: HashMap<String, u8>,
}

/// Load and validate a catalog file into a dataset.
pub fn load(path: &Path) -> Result<Dataset> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog: {}", path.display()))?;
    let file: CatalogFile = toml::from_str(&raw)
        .with_context(|| format!("failed to parse catalog: {}", path.display()))?;

    let mut tiers = TierMap::default();
    for (name, tier) in file.tiers {
        tiers.insert(name, tier);
    }

    let dataset = Dataset::from_rows(file.models, &tiers)
        .with_context(|| format!("invalid catalog: {}", path.display()))?;
    info!(models = dataset.len(), "catalog loaded");
    Ok(dataset)
}
