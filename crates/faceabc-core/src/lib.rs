//! # faceabc-core
//!
//! Configuration types shared across the FaceABC crates.
//!
//! Configuration is loaded from a single YAML file (`faceabc.yaml`). Every field
//! has a default, so an empty file (or no file at all) yields a working setup:
//! threshold 0.85, incident counter seeded at 1000, dashboard on 127.0.0.1:8080.

// Configuration types shared across all FaceABC crates
pub mod config;

pub use config::{
    ConfigError, DashboardConfig, FaceAbcConfig, LedgerConfig, RecordFormat, SimulatorConfig,
    WorkflowConfig,
};
