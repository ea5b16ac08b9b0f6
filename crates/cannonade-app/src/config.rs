//! Start-up configuration: JSON file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use cannonade_sim::SimConfig;

/// Load a config file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&text).with_context(|| format!("invalid config file: {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<SimConfig> {
    let config: SimConfig = serde_json::from_str(text).context("failed to parse config json")?;
    Ok(config)
}

/// Resolve the final configuration: file (or defaults), then overrides,
/// then validation.
pub fn resolve_config(path: Option<&Path>, seed: Option<u64>) -> Result<SimConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    config.validate().context("configuration rejected")?;
    Ok(config)
}
