//! `faceabc config` - print the effective configuration.

use anyhow::{Context, Result};
use faceabc_core::FaceAbcConfig;
use std::path::Path;

/// Effective configuration as YAML.
pub fn render(config_path: Option<&Path>) -> Result<String> {
    let config = FaceAbcConfig::load(config_path).context("Failed to load configuration")?;
    Ok(config.to_yaml()?)
}

pub fn show(config_path: Option<&Path>) -> Result<()> {
    print!("{}", render(config_path)?);
    Ok(())
}
