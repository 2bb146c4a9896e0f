//! `faceabc serve` - run the web dashboard.

use anyhow::{Context, Result};
use faceabc_core::FaceAbcConfig;
use faceabc_dashboard::DashboardServer;
use std::path::Path;

/// Load configuration and apply command-line overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<FaceAbcConfig> {
    let mut config = FaceAbcConfig::load(config_path).context("Failed to load configuration")?;

    if let Some(host) = host {
        config.dashboard.host = host;
    }
    if let Some(port) = port {
        config.dashboard.port = port;
    }
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

pub async fn run(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = resolve_config(config_path, host, port)?;

    println!("FaceABC dashboard listening on http://{}", config.dashboard.bind_address());
    println!("Logged in as: {}", config.dashboard.operator);

    DashboardServer::new(config).run().await?;
    Ok(())
}
