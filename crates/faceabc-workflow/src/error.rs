//! Error types for the workflow crate.

use faceabc_ledger::{IncidentState, LedgerError};
use thiserror::Error;

/// Message shown when a complaint is missing a field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields before submitting.";

/// A complaint submission with empty required fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", MISSING_FIELDS_MESSAGE)]
pub struct ValidationError {
    /// Names of the empty fields, in form order.
    pub missing: Vec<&'static str>,
}

/// Errors that can occur in the workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Complaint rejected before reaching the ledger.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The incident id does not appear in the incident ledger.
    #[error("incident not found: {0}")]
    IncidentNotFound(String),

    /// Reviewer decisions apply only to incidents pending human review.
    #[error("incident {incident_id} is not awaiting review (state: {state})")]
    NotAwaitingReview {
        incident_id: String,
        state: IncidentState,
    },

    /// Complaint ledger refused the transition.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = WorkflowError::from(ValidationError {
            missing: vec!["contact"],
        });
        assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
    }
}
