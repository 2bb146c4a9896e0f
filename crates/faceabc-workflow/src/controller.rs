//! Workflow controller.
//!
//! Applies the confidence threshold, records reviewer decisions and handles
//! complaints. The controller holds only policy; every call operates on the
//! caller's [`Session`].
//!
//! ## Routing
//!
//! | Input | State | Event | Action |
//! |-------|-------|-------|--------|
//! | c >= threshold | AutoLogged | Match Logged | High Confidence |
//! | c < threshold | PendingHumanReview | Uncertain Match | Human Review Required |
//! | forced audit | PendingHumanReview | Manual Trigger | Forced Human Review |

use faceabc_core::WorkflowConfig;
use faceabc_ledger::{Actor, ComplaintRecord, IncidentEvent, IncidentState};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decision::{ComplaintDecision, ReviewDecision, ReviewOutcome};
use crate::error::{ValidationError, WorkflowError};
use crate::session::Session;
use crate::simulator::ConfidenceBand;

/// Result of routing one incident.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    pub incident_id: String,
    pub confidence: f64,
    /// `AutoLogged` or `PendingHumanReview`.
    pub state: IncidentState,
    pub event: IncidentEvent,
}

impl RoutingDecision {
    pub fn requires_review(&self) -> bool {
        self.state == IncidentState::PendingHumanReview
    }
}

/// Complaint form as submitted by an end user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintForm {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub incident_id: String,
    #[serde(default)]
    pub text: String,
}

impl ComplaintForm {
    /// All four fields are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [
            ("user", &self.user),
            ("contact", &self.contact),
            ("incident_id", &self.incident_id),
            ("text", &self.text),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// Result of an ethics-board decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintResolution {
    pub complaint: ComplaintRecord,
    pub decision: ComplaintDecision,
}

impl ComplaintResolution {
    pub fn message(&self) -> String {
        self.decision.message(&self.complaint.incident_id)
    }
}

/// Routing policy and decision recording.
#[derive(Debug, Clone)]
pub struct WorkflowController {
    config: WorkflowConfig,
}

impl WorkflowController {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    pub fn band(&self, confidence: f64) -> ConfidenceBand {
        ConfidenceBand::classify(confidence, self.config.threshold)
    }

    /// Route a new incident by its confidence.
    pub fn route(&self, session: &mut Session, confidence: f64) -> RoutingDecision {
        let (state, event, action) = if confidence >= self.config.threshold {
            (IncidentState::AutoLogged, IncidentEvent::MatchLogged, "High Confidence")
        } else {
            (
                IncidentState::PendingHumanReview,
                IncidentEvent::UncertainMatch,
                "Human Review Required",
            )
        };

        let incident_id = session
            .incidents
            .append(event, action, confidence, Actor::System, None);
        session.set_alarm(incident_id.clone(), confidence);

        tracing::info!(
            incident_id = %incident_id,
            confidence,
            threshold = self.config.threshold,
            state = %state,
            "Incident routed"
        );

        RoutingDecision {
            incident_id,
            confidence,
            state,
            event,
        }
    }

    /// Route the score drawn for the session's current frame.
    ///
    /// Returns `None` when no frame has been uploaded.
    pub fn run_face_check(&self, session: &mut Session) -> Option<RoutingDecision> {
        let confidence = session.score()?;
        Some(self.route(session, confidence))
    }

    /// Force a new incident into human review regardless of confidence.
    pub fn force_audit(&self, session: &mut Session) -> RoutingDecision {
        let confidence = self.config.forced_confidence;
        let incident_id = session.incidents.append(
            IncidentEvent::ManualTrigger,
            "Forced Human Review",
            confidence,
            Actor::System,
            None,
        );
        session.set_alarm(incident_id.clone(), confidence);

        tracing::info!(incident_id = %incident_id, confidence, "Human review forced");

        RoutingDecision {
            incident_id,
            confidence,
            state: IncidentState::PendingHumanReview,
            event: IncidentEvent::ManualTrigger,
        }
    }

    /// Record a reviewer decision for an incident pending human review.
    ///
    /// Appends a `Human Review` record carrying the decision label; the routing
    /// record stays as it was.
    pub fn submit_review(
        &self,
        session: &mut Session,
        incident_id: &str,
        decision: ReviewDecision,
    ) -> Result<ReviewOutcome, WorkflowError> {
        let state = session
            .incidents
            .state_of(incident_id)
            .ok_or_else(|| WorkflowError::IncidentNotFound(incident_id.to_string()))?;

        if state != IncidentState::PendingHumanReview {
            return Err(WorkflowError::NotAwaitingReview {
                incident_id: incident_id.to_string(),
                state,
            });
        }

        let confidence = session
            .incidents
            .routed_confidence(incident_id)
            .unwrap_or_default();

        session.incidents.append(
            IncidentEvent::HumanReview,
            decision.label(),
            confidence,
            Actor::Reviewer,
            Some(incident_id),
        );

        tracing::info!(
            incident_id = %incident_id,
            decision = %decision,
            "Review decision recorded"
        );

        Ok(ReviewOutcome {
            incident_id: incident_id.to_string(),
            decision,
            kind: decision.outcome_kind(),
            confidence,
        })
    }

    /// File a complaint. Any empty field rejects the whole submission.
    pub fn submit_complaint(
        &self,
        session: &mut Session,
        form: &ComplaintForm,
    ) -> Result<ComplaintRecord, WorkflowError> {
        if let Err(e) = form.validate() {
            tracing::warn!(missing = ?e.missing, "Complaint rejected");
            return Err(e.into());
        }

        let complaint = session
            .complaints
            .append(&form.user, &form.contact, &form.incident_id, &form.text)
            .clone();

        tracing::info!(
            complaint_id = %complaint.id,
            incident_id = %complaint.incident_id,
            "Complaint submitted"
        );

        Ok(complaint)
    }

    /// Record the ethics board's decision on a pending complaint.
    ///
    /// Sets the terminal status and appends exactly one `Complaint Reviewed`
    /// record (confidence 0) under the complaint's incident reference.
    pub fn decide_complaint(
        &self,
        session: &mut Session,
        complaint_id: Uuid,
        decision: ComplaintDecision,
    ) -> Result<ComplaintResolution, WorkflowError> {
        let complaint = session.complaints.resolve(complaint_id, decision.status())?;

        session.incidents.append(
            IncidentEvent::ComplaintReviewed,
            decision.ledger_action(),
            0.0,
            Actor::EthicsBoard,
            Some(&complaint.incident_id),
        );

        tracing::info!(
            complaint_id = %complaint.id,
            incident_id = %complaint.incident_id,
            status = %complaint.status,
            "Complaint decided"
        );

        Ok(ComplaintResolution {
            complaint,
            decision,
        })
    }
}

impl Default for WorkflowController {
    fn default() -> Self {
        Self::new(WorkflowConfig::default())
    }
}
