//! Error types for the dashboard crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use faceabc_ledger::LedgerError;
use faceabc_workflow::WorkflowError;
use thiserror::Error;

/// Errors that can occur in the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Failed to start the server.
    #[error("failed to start dashboard: {0}")]
    StartupFailed(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request body exceeds the configured upload limit.
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// Request conflicts with the current workflow state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<WorkflowError> for DashboardError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::Validation(v) => DashboardError::InvalidRequest(v.to_string()),
            WorkflowError::IncidentNotFound(id) => DashboardError::NotFound(id),
            WorkflowError::NotAwaitingReview { .. } => DashboardError::Conflict(err.to_string()),
            WorkflowError::Ledger(LedgerError::ComplaintNotFound(id)) => {
                DashboardError::NotFound(format!("complaint {id}"))
            }
            WorkflowError::Ledger(
                e @ (LedgerError::ComplaintAlreadyDecided(_) | LedgerError::InvalidTransition(_)),
            ) => DashboardError::Conflict(e.to_string()),
            WorkflowError::Ledger(e) => DashboardError::Internal(e.into()),
        }
    }
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::NotFound(_) => StatusCode::NOT_FOUND,
            DashboardError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            DashboardError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            DashboardError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceabc_ledger::IncidentState;
    use faceabc_workflow::ValidationError;
    use uuid::Uuid;

    #[test]
    fn test_workflow_error_status_codes() {
        let cases = [
            (
                WorkflowError::Validation(ValidationError { missing: vec!["user"] }),
                StatusCode::BAD_REQUEST,
            ),
            (WorkflowError::IncidentNotFound("INC-1".into()), StatusCode::NOT_FOUND),
            (
                WorkflowError::NotAwaitingReview {
                    incident_id: "INC-1".into(),
                    state: IncidentState::AutoLogged,
                },
                StatusCode::CONFLICT,
            ),
            (
                WorkflowError::Ledger(LedgerError::ComplaintNotFound(Uuid::nil())),
                StatusCode::NOT_FOUND,
            ),
            (
                WorkflowError::Ledger(LedgerError::ComplaintAlreadyDecided(Uuid::nil())),
                StatusCode::CONFLICT,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(DashboardError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_payload_too_large_status() {
        let err = DashboardError::PayloadTooLarge("length limit exceeded".into());
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
