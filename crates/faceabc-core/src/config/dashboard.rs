//! Dashboard configuration.
//!
//! This module defines configuration for the FaceABC dashboard web UI.

use serde::{Deserialize, Serialize};

/// Configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Host to bind the dashboard to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Operator name shown in the sidebar banner.
    #[serde(default = "default_operator")]
    pub operator: String,

    /// Largest accepted camera upload, in bytes (multipart body included).
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            operator: default_operator(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl DashboardConfig {
    /// Socket address string, e.g. `127.0.0.1:8080`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_operator() -> String {
    "Staff – Mike".to_string()
}

fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = DashboardConfig {
            host: "0.0.0.0".to_string(),
            port: 9090,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn test_upload_limit_defaults_above_axum_default() {
        let config: DashboardConfig = serde_yaml::from_str("port: 9000").unwrap();
        assert_eq!(config.max_upload_bytes, 20 * 1024 * 1024);
        assert!(config.max_upload_bytes > 2 * 1024 * 1024);
    }
}
