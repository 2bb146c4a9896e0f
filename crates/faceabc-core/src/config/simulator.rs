//! Confidence simulator configuration.

use serde::{Deserialize, Serialize};

/// Range of the simulated recognition confidence.
///
/// Scores are drawn uniformly from `[min_confidence, max_confidence)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    #[serde(default = "default_max_confidence")]
    pub max_confidence: f64,

    /// Fixed RNG seed for reproducible demos. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            max_confidence: default_max_confidence(),
            seed: None,
        }
    }
}

fn default_min_confidence() -> f64 {
    0.20
}

fn default_max_confidence() -> f64 {
    0.99
}
