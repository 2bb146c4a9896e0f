//! Configuration types for the FaceABC incident workflow.
//!
//! # Configuration File
//!
//! - **faceabc.yaml**: workflow policy, confidence simulator, dashboard and ledger
//!   settings. Sections may be omitted; missing values fall back to defaults.

pub mod dashboard;
pub mod ledger;
pub mod simulator;
pub mod workflow;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use dashboard::DashboardConfig;
pub use ledger::{LedgerConfig, RecordFormat};
pub use simulator::SimulatorConfig;
pub use workflow::WorkflowConfig;

/// Default configuration file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "faceabc.yaml";

/// Complete FaceABC configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceAbcConfig {
    /// Routing policy and incident numbering.
    #[serde(default)]
    pub workflow: WorkflowConfig,

    /// Simulated recognition confidence.
    #[serde(default)]
    pub simulator: SimulatorConfig,

    /// Dashboard web UI.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Incident ledger output.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FaceAbcConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    ///
    /// An empty document is treated as "all defaults".
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Load and validate configuration.
    ///
    /// With an explicit path the file must exist. Without one, `faceabc.yaml` in
    /// the working directory is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(ConfigError::from)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = 0.0..=1.0;

        if !unit.contains(&self.workflow.threshold) {
            return Err(ConfigError::Config(format!(
                "workflow.threshold must be within [0, 1], got {}",
                self.workflow.threshold
            )));
        }
        if !unit.contains(&self.workflow.forced_confidence) {
            return Err(ConfigError::Config(format!(
                "workflow.forced_confidence must be within [0, 1], got {}",
                self.workflow.forced_confidence
            )));
        }

        if self.workflow.id_seed == u64::MAX {
            return Err(ConfigError::Config(format!(
                "workflow.id_seed must be below {}",
                u64::MAX
            )));
        }

        let sim = &self.simulator;
        if !unit.contains(&sim.min_confidence) || !unit.contains(&sim.max_confidence) {
            return Err(ConfigError::Config(format!(
                "simulator range must be within [0, 1], got [{}, {})",
                sim.min_confidence, sim.max_confidence
            )));
        }
        if sim.min_confidence >= sim.max_confidence {
            return Err(ConfigError::Config(format!(
                "simulator.min_confidence ({}) must be below simulator.max_confidence ({})",
                sim.min_confidence, sim.max_confidence
            )));
        }

        if self.dashboard.port == 0 {
            return Err(ConfigError::Config("dashboard.port must not be 0".to_string()));
        }
        if self.dashboard.max_upload_bytes == 0 {
            return Err(ConfigError::Config(
                "dashboard.max_upload_bytes must not be 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FaceAbcConfig::default();
        assert_eq!(config.workflow.threshold, 0.85);
        assert_eq!(config.workflow.id_seed, 1000);
        assert_eq!(config.workflow.forced_confidence, 0.45);
        assert_eq!(config.simulator.min_confidence, 0.20);
        assert_eq!(config.simulator.max_confidence, 0.99);
        assert_eq!(config.dashboard.port, 8080);
        assert!(!config.ledger.stdout);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = FaceAbcConfig::from_yaml("").unwrap();
        assert_eq!(config, FaceAbcConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
workflow:
  threshold: 0.9
dashboard:
  port: 9000
"#;
        let config = FaceAbcConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.workflow.threshold, 0.9);
        assert_eq!(config.workflow.id_seed, 1000);
        assert_eq!(config.dashboard.port, 9000);
        assert_eq!(config.dashboard.host, "127.0.0.1");
    }

    #[test]
    fn test_validate_rejects_threshold_out_of_range() {
        let mut config = FaceAbcConfig::default();
        config.workflow.threshold = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_exhausted_id_seed() {
        let mut config = FaceAbcConfig::default();
        config.workflow.id_seed = u64::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::Config(_))));

        config.workflow.id_seed = u64::MAX - 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_upload_limit() {
        let mut config = FaceAbcConfig::default();
        config.dashboard.max_upload_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_simulator_range() {
        let mut config = FaceAbcConfig::default();
        config.simulator.min_confidence = 0.9;
        config.simulator.max_confidence = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ledger:\n  stdout: true\nsimulator:\n  seed: 7").unwrap();

        let config = FaceAbcConfig::load(Some(file.path())).unwrap();
        assert!(config.ledger.stdout);
        assert_eq!(config.simulator.seed, Some(7));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            FaceAbcConfig::load(Some(&missing)),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = FaceAbcConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("threshold: 0.85"));
        assert_eq!(FaceAbcConfig::from_yaml(&yaml).unwrap(), config);
    }
}
