//! Incident record types.
//!
//! One record is one line in the incident log. Records are never updated; the
//! lifecycle of an incident is read back from every record sharing its id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format used on screen and in CSV exports.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What happened to an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentEvent {
    // ===== Routing =====
    /// Confidence met the threshold; logged without review.
    #[serde(rename = "Match Logged")]
    MatchLogged,
    /// Confidence below the threshold; human review required.
    #[serde(rename = "Uncertain Match")]
    UncertainMatch,
    /// Review forced from the camera dashboard.
    #[serde(rename = "Manual Trigger")]
    ManualTrigger,

    // ===== Decisions =====
    /// A reviewer decided a pending incident.
    #[serde(rename = "Human Review")]
    HumanReview,
    /// The ethics board decided a complaint about the incident.
    #[serde(rename = "Complaint Reviewed")]
    ComplaintReviewed,
}

impl IncidentEvent {
    /// Display label, also used in CSV exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::MatchLogged => "Match Logged",
            Self::UncertainMatch => "Uncertain Match",
            Self::ManualTrigger => "Manual Trigger",
            Self::HumanReview => "Human Review",
            Self::ComplaintReviewed => "Complaint Reviewed",
        }
    }
}

impl std::fmt::Display for IncidentEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Who handled a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    System,
    Reviewer,
    #[serde(rename = "Ethics Board")]
    EthicsBoard,
}

impl Actor {
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Reviewer => "Reviewer",
            Self::EthicsBoard => "Ethics Board",
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Routing state of an incident, derived from its history.
///
/// `Detected -> {AutoLogged | PendingHumanReview} -> Decided`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentState {
    /// Known id without a routing record.
    Detected,
    AutoLogged,
    PendingHumanReview,
    /// A reviewer recorded a decision.
    Decided,
}

impl IncidentState {
    /// Apply one record of the incident's history.
    pub fn advance(self, event: IncidentEvent) -> Self {
        match event {
            IncidentEvent::MatchLogged => Self::AutoLogged,
            IncidentEvent::UncertainMatch | IncidentEvent::ManualTrigger => {
                Self::PendingHumanReview
            }
            IncidentEvent::HumanReview => Self::Decided,
            // complaint outcomes do not move the routing state
            IncidentEvent::ComplaintReviewed => self,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Detected => "Detected",
            Self::AutoLogged => "Auto Logged",
            Self::PendingHumanReview => "Pending Human Review",
            Self::Decided => "Decided",
        }
    }
}

impl std::fmt::Display for IncidentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable incident log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// When the record was appended.
    pub time: DateTime<Utc>,

    /// Incident identifier, `INC-<seq>` for minted ids. Records written for a
    /// complaint carry the complaint's free-text reference verbatim.
    pub incident_id: String,

    pub event: IncidentEvent,

    /// Action taken, e.g. "High Confidence" or a reviewer decision label.
    pub action: String,

    /// Confidence as supplied by the caller; not range-checked.
    pub confidence: f64,

    pub handled_by: Actor,
}

impl IncidentRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        incident_id: impl Into<String>,
        event: IncidentEvent,
        action: impl Into<String>,
        confidence: f64,
        handled_by: Actor,
    ) -> Self {
        Self {
            time: Utc::now(),
            incident_id: incident_id.into(),
            event,
            action: action.into(),
            confidence,
            handled_by,
        }
    }

    /// Confidence as shown to users: two decimals.
    pub fn confidence_display(&self) -> String {
        format!("{:.2}", self.confidence)
    }

    /// Format the record as a human-readable log line.
    ///
    /// Format: `[timestamp] INC-1001 event="..." action="..." confidence=0.42 by=System`
    pub fn to_log_line(&self) -> String {
        format!(
            "[{}] {} event=\"{}\" action=\"{}\" confidence={} by={}",
            self.time.format(TIME_FORMAT),
            self.incident_id,
            self.event,
            self.action.replace('"', "'"),
            self.confidence_display(),
            self.handled_by,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_labels_serialize_as_display() {
        let json = serde_json::to_string(&IncidentEvent::UncertainMatch).unwrap();
        assert_eq!(json, "\"Uncertain Match\"");
        assert_eq!(IncidentEvent::ComplaintReviewed.to_string(), "Complaint Reviewed");
        assert_eq!(Actor::EthicsBoard.to_string(), "Ethics Board");
    }

    #[test]
    fn test_state_transitions() {
        let state = IncidentState::Detected.advance(IncidentEvent::UncertainMatch);
        assert_eq!(state, IncidentState::PendingHumanReview);
        assert_eq!(
            state.advance(IncidentEvent::HumanReview),
            IncidentState::Decided
        );
        assert_eq!(
            IncidentState::AutoLogged.advance(IncidentEvent::ComplaintReviewed),
            IncidentState::AutoLogged
        );
    }

    #[test]
    fn test_to_log_line() {
        let record = IncidentRecord::new(
            "INC-1001",
            IncidentEvent::HumanReview,
            "Send to Review Board",
            0.4,
            Actor::Reviewer,
        );

        let line = record.to_log_line();
        assert!(line.contains("INC-1001"));
        assert!(line.contains("event=\"Human Review\""));
        assert!(line.contains("action=\"Send to Review Board\""));
        assert!(line.contains("confidence=0.40"));
        assert!(line.contains("by=Reviewer"));
    }
}
