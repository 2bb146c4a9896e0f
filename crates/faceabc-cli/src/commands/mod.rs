//! CLI command implementations for FaceABC.

pub mod config;
pub mod serve;
pub mod simulate;
