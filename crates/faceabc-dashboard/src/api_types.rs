//! API request and response types.

use chrono::{DateTime, Utc};
use faceabc_ledger::{
    Actor, ComplaintRecord, ComplaintStatus, IncidentEvent, IncidentRecord, IncidentState,
    PendingReview,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Incident Types
// =============================================================================

/// Query parameters for listing ledger records.
#[derive(Debug, Default, Deserialize)]
pub struct IncidentQuery {
    pub incident_id: Option<String>,
    pub event: Option<IncidentEvent>,
    pub actor: Option<Actor>,
    #[serde(default)]
    pub newest_first: bool,
    pub limit: Option<usize>,
}

/// Response for ledger listing.
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub records: Vec<IncidentRecord>,
    pub total: usize,
}

/// One incident reconstructed from the ledger.
#[derive(Debug, Serialize)]
pub struct IncidentResponse {
    pub incident_id: String,
    pub state: IncidentState,
    pub confidence: Option<f64>,
    pub history: Vec<IncidentRecord>,
}

/// An incident waiting for a reviewer.
#[derive(Debug, Serialize)]
pub struct PendingReviewResponse {
    pub incident_id: String,
    pub confidence: f64,
    pub flagged_at: DateTime<Utc>,
}

impl From<PendingReview> for PendingReviewResponse {
    fn from(p: PendingReview) -> Self {
        Self {
            incident_id: p.incident_id,
            confidence: p.confidence,
            flagged_at: p.flagged_at,
        }
    }
}

// =============================================================================
// Complaint Types
// =============================================================================

/// Complaint as exposed over the API.
#[derive(Debug, Serialize)]
pub struct ComplaintResponse {
    pub id: Uuid,
    pub time: DateTime<Utc>,
    pub user: String,
    pub contact: String,
    pub incident_id: String,
    pub complaint_text: String,
    pub status: ComplaintStatus,
    pub decided_at: Option<DateTime<Utc>>,
}

impl From<&ComplaintRecord> for ComplaintResponse {
    fn from(c: &ComplaintRecord) -> Self {
        Self {
            id: c.id,
            time: c.time,
            user: c.user.clone(),
            contact: c.contact.clone(),
            incident_id: c.incident_id.clone(),
            complaint_text: c.complaint_text.clone(),
            status: c.status,
            decided_at: c.decided_at,
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Review board form.
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub incident_id: String,
    #[serde(default)]
    pub decision: String,
}

/// Complaint review form.
#[derive(Debug, Deserialize)]
pub struct ComplaintDecisionForm {
    #[serde(default)]
    pub decision: String,
}

/// `?incident=` on the review board and logs pages.
#[derive(Debug, Default, Deserialize)]
pub struct IncidentParam {
    pub incident: Option<String>,
}

// =============================================================================
// Health
// =============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: usize,
    pub pending_reviews: usize,
    pub pending_complaints: usize,
}
