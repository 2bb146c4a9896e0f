//! Workflow policy configuration.

use serde::{Deserialize, Serialize};

/// Routing policy for detected incidents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Confidence at or above which a match is logged without human review.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Initial value of the incident counter. The first incident is `seed + 1`.
    #[serde(default = "default_id_seed")]
    pub id_seed: u64,

    /// Confidence recorded when an audit is forced from the camera dashboard.
    #[serde(default = "default_forced_confidence")]
    pub forced_confidence: f64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            id_seed: default_id_seed(),
            forced_confidence: default_forced_confidence(),
        }
    }
}

fn default_threshold() -> f64 {
    0.85
}

fn default_id_seed() -> u64 {
    1000
}

fn default_forced_confidence() -> f64 {
    0.45
}
