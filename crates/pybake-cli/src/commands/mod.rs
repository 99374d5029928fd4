//! CLI command implementations for pybake.
//!
//! Each module corresponds to a subcommand (`pybake <command>`).

pub mod cleanup;
pub mod new;
pub mod test;

use std::path::Path;

use anyhow::Result;

use pybake_core::config::BakeConfig;

/// Defaults, then the answers file (if any), then `--set` overrides.
pub fn resolve_config(config: Option<&Path>, overrides: &[(String, String)]) -> Result<BakeConfig> {
    let base = match config {
        Some(path) => BakeConfig::load(path)?,
        None => BakeConfig::default(),
    };
    let resolved = base.with_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
    tracing::debug!("resolved configuration: {resolved:?}");
    Ok(resolved)
}
