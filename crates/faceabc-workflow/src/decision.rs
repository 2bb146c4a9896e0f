//! Reviewer and ethics-board decisions.

use faceabc_ledger::ComplaintStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A reviewer's choice for an incident pending human review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    #[serde(rename = "approve")]
    ApproveMatch,
    Reject,
    #[serde(rename = "escalate")]
    SendToReviewBoard,
}

impl ReviewDecision {
    pub const ALL: [ReviewDecision; 3] = [Self::ApproveMatch, Self::Reject, Self::SendToReviewBoard];

    /// Label recorded as the ledger action.
    pub fn label(self) -> &'static str {
        match self {
            Self::ApproveMatch => "Approve Match",
            Self::Reject => "Reject",
            Self::SendToReviewBoard => "Send to Review Board",
        }
    }

    /// Form value.
    pub fn slug(self) -> &'static str {
        match self {
            Self::ApproveMatch => "approve",
            Self::Reject => "reject",
            Self::SendToReviewBoard => "escalate",
        }
    }

    pub fn outcome_kind(self) -> OutcomeKind {
        match self {
            Self::ApproveMatch => OutcomeKind::Alert,
            Self::Reject => OutcomeKind::Cleared,
            Self::SendToReviewBoard => OutcomeKind::Escalated,
        }
    }
}

impl std::fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReviewDecision {
    type Err = String;

    /// Accepts either the label or the form value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s) || d.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown review decision: {s}"))
    }
}

/// What the user is told after a review decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Match approved; an alert is raised.
    Alert,
    /// False positive cleared.
    Cleared,
    /// Handed to the review board.
    Escalated,
}

impl OutcomeKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::Alert => "Match Approved – alert triggered.",
            Self::Cleared => "False Positive – cleared and logged.",
            Self::Escalated => "Case Escalated to Review Board.",
        }
    }
}

/// Result of a recorded review. A notification only; nothing on the original
/// incident record changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewOutcome {
    pub incident_id: String,
    pub decision: ReviewDecision,
    pub kind: OutcomeKind,
    pub confidence: f64,
}

impl ReviewOutcome {
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    pub fn confirmation(&self) -> String {
        format!("Decision recorded successfully for {}.", self.incident_id)
    }
}

/// The ethics board's choice for a pending complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintDecision {
    #[serde(rename = "compensate")]
    ConfirmErrorAndCompensate,
    #[serde(rename = "dismiss")]
    DismissComplaint,
}

impl ComplaintDecision {
    pub const ALL: [ComplaintDecision; 2] = [Self::ConfirmErrorAndCompensate, Self::DismissComplaint];

    pub fn label(self) -> &'static str {
        match self {
            Self::ConfirmErrorAndCompensate => "Confirm Error & Compensate",
            Self::DismissComplaint => "Dismiss Complaint",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::ConfirmErrorAndCompensate => "compensate",
            Self::DismissComplaint => "dismiss",
        }
    }

    /// Terminal complaint status this decision leads to.
    pub fn status(self) -> ComplaintStatus {
        match self {
            Self::ConfirmErrorAndCompensate => ComplaintStatus::Compensated,
            Self::DismissComplaint => ComplaintStatus::Dismissed,
        }
    }

    /// Action recorded in the incident ledger.
    pub fn ledger_action(self) -> &'static str {
        match self {
            Self::ConfirmErrorAndCompensate => "Compensation Issued",
            Self::DismissComplaint => "Dismissed",
        }
    }

    pub fn message(self, incident_id: &str) -> String {
        match self {
            Self::ConfirmErrorAndCompensate => format!("Compensation approved for {incident_id}."),
            Self::DismissComplaint => format!("Complaint dismissed for {incident_id}."),
        }
    }
}

impl std::fmt::Display for ComplaintDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComplaintDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s) || d.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown complaint decision: {s}"))
    }
}
