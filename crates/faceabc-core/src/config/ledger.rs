//! Incident ledger output configuration.

use serde::{Deserialize, Serialize};

/// Line format used when mirroring records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Human-readable log line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Configuration for incident ledger output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Mirror every appended incident record to stdout as a log line.
    #[serde(default)]
    pub stdout: bool,

    /// Format of mirrored lines.
    #[serde(default)]
    pub format: RecordFormat,
}
