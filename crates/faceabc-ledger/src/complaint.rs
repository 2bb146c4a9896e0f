//! Complaint ledger.
//!
//! Complaints are appended by end users and decided by the ethics board. The
//! only mutable field is `status`, which moves exactly once from `Pending` to
//! `Compensated` or `Dismissed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LedgerError;

/// Status of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    /// Waiting for the ethics board.
    Pending,
    /// Error confirmed, compensation issued.
    Compensated,
    /// Complaint dismissed.
    Dismissed,
}

impl ComplaintStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Compensated => write!(f, "Compensated"),
            Self::Dismissed => write!(f, "Dismissed"),
        }
    }
}

/// A user complaint about an incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// Unique complaint ID.
    pub id: Uuid,
    /// When the complaint was submitted.
    pub time: DateTime<Utc>,
    pub user: String,
    pub contact: String,
    /// Free-text reference typed by the user. Never checked against the
    /// incident ledger.
    pub incident_id: String,
    pub complaint_text: String,
    pub status: ComplaintStatus,
    /// When the ethics board decided (if any).
    pub decided_at: Option<DateTime<Utc>>,
}

impl ComplaintRecord {
    pub fn new(
        user: impl Into<String>,
        contact: impl Into<String>,
        incident_id: impl Into<String>,
        complaint_text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            time: Utc::now(),
            user: user.into(),
            contact: contact.into(),
            incident_id: incident_id.into(),
            complaint_text: complaint_text.into(),
            status: ComplaintStatus::Pending,
            decided_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ComplaintStatus::Pending
    }
}

/// Append-only complaint store for one session.
#[derive(Debug, Clone, Default)]
pub struct ComplaintLedger {
    complaints: Vec<ComplaintRecord>,
}

impl ComplaintLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new `Pending` complaint.
    ///
    /// Field validation is the caller's job; this never rejects.
    pub fn append(
        &mut self,
        user: &str,
        contact: &str,
        incident_id: &str,
        text: &str,
    ) -> &ComplaintRecord {
        let complaint = ComplaintRecord::new(user, contact, incident_id, text);
        tracing::debug!(
            complaint_id = %complaint.id,
            incident_id = %complaint.incident_id,
            "Complaint appended"
        );
        self.complaints.push(complaint);
        &self.complaints[self.complaints.len() - 1]
    }

    /// Get a complaint by ID.
    pub fn get(&self, id: Uuid) -> Option<&ComplaintRecord> {
        self.complaints.iter().find(|c| c.id == id)
    }

    /// All complaints in submission order.
    pub fn all(&self) -> &[ComplaintRecord] {
        &self.complaints
    }

    /// Complaints still waiting for the ethics board, oldest first.
    pub fn pending(&self) -> Vec<&ComplaintRecord> {
        self.complaints.iter().filter(|c| c.is_pending()).collect()
    }

    pub fn len(&self) -> usize {
        self.complaints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.complaints.is_empty()
    }

    /// Move a pending complaint to a terminal status.
    pub fn resolve(
        &mut self,
        id: Uuid,
        status: ComplaintStatus,
    ) -> Result<ComplaintRecord, LedgerError> {
        if !status.is_terminal() {
            return Err(LedgerError::InvalidTransition(status.to_string()));
        }

        let complaint = self
            .complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(LedgerError::ComplaintNotFound(id))?;

        if complaint.status != ComplaintStatus::Pending {
            return Err(LedgerError::ComplaintAlreadyDecided(id));
        }

        complaint.status = status;
        complaint.decided_at = Some(Utc::now());
        Ok(complaint.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_defaults_to_pending() {
        let mut ledger = ComplaintLedger::new();
        let complaint = ledger.append("Ada", "555-0100", "INC-1001", "Wrongly flagged").clone();

        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert!(complaint.decided_at.is_none());
        assert_eq!(ledger.pending().len(), 1);
        assert_eq!(ledger.get(complaint.id), Some(&complaint));
    }

    #[test]
    fn test_incident_reference_is_free_text() {
        let mut ledger = ComplaintLedger::new();
        let complaint = ledger.append("Ada", "555-0100", "whatever I remember", "text");
        assert_eq!(complaint.incident_id, "whatever I remember");
    }

    #[test]
    fn test_resolve_once() {
        let mut ledger = ComplaintLedger::new();
        let id = ledger.append("Ada", "555-0100", "INC-1001", "text").id;

        let resolved = ledger.resolve(id, ComplaintStatus::Compensated).unwrap();
        assert_eq!(resolved.status, ComplaintStatus::Compensated);
        assert!(resolved.decided_at.is_some());
        assert!(ledger.pending().is_empty());

        // Never reverses or changes again.
        let again = ledger.resolve(id, ComplaintStatus::Dismissed);
        assert!(matches!(again, Err(LedgerError::ComplaintAlreadyDecided(_))));
        assert_eq!(ledger.get(id).unwrap().status, ComplaintStatus::Compensated);
    }

    #[test]
    fn test_resolve_to_pending_is_rejected() {
        let mut ledger = ComplaintLedger::new();
        let id = ledger.append("Ada", "555-0100", "INC-1001", "text").id;

        let result = ledger.resolve(id, ComplaintStatus::Pending);
        assert!(matches!(result, Err(LedgerError::InvalidTransition(_))));
        assert!(ledger.get(id).unwrap().is_pending());
    }

    #[test]
    fn test_resolve_unknown() {
        let mut ledger = ComplaintLedger::new();
        let result = ledger.resolve(Uuid::new_v4(), ComplaintStatus::Dismissed);
        assert!(matches!(result, Err(LedgerError::ComplaintNotFound(_))));
    }
}
