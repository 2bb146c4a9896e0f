//! Error types for the ledger crate.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No complaint with this id exists.
    #[error("complaint not found: {0}")]
    ComplaintNotFound(Uuid),

    /// The complaint already reached a terminal status.
    #[error("complaint already decided: {0}")]
    ComplaintAlreadyDecided(Uuid),

    /// A complaint can only move to a terminal status.
    #[error("invalid complaint transition to {0}")]
    InvalidTransition(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
