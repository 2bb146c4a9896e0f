//! `faceabc simulate` - run one incident through the workflow without the UI.
//!
//! Routes the given confidence, optionally records a reviewer decision, and
//! prints the resulting incident ledger as CSV.

use anyhow::{Context, Result, bail};
use clap::Args;
use faceabc_core::FaceAbcConfig;
use faceabc_ledger::to_csv;
use faceabc_workflow::{ReviewDecision, Session, WorkflowController};
use std::path::Path;

/// Optional reviewer decision; at most one flag may be given.
#[derive(Args, Debug, Default, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct DecisionFlags {
    /// Approve the match
    #[arg(long)]
    pub approve: bool,

    /// Reject the match as a false positive
    #[arg(long)]
    pub reject: bool,

    /// Send the case to the review board
    #[arg(long)]
    pub escalate: bool,
}

impl DecisionFlags {
    pub fn decision(&self) -> Option<ReviewDecision> {
        if self.approve {
            Some(ReviewDecision::ApproveMatch)
        } else if self.reject {
            Some(ReviewDecision::Reject)
        } else if self.escalate {
            Some(ReviewDecision::SendToReviewBoard)
        } else {
            None
        }
    }
}

/// Run the simulation and return the ledger CSV.
pub fn simulate(
    config: &FaceAbcConfig,
    confidence: f64,
    decision: Option<ReviewDecision>,
) -> Result<String> {
    if !(0.0..=1.0).contains(&confidence) {
        bail!("confidence must be within [0, 1], got {confidence}");
    }

    let controller = WorkflowController::new(config.workflow.clone());
    // stdout carries only the CSV, so records are never mirrored here.
    let mut session = Session::new(config.workflow.id_seed);

    let routed = controller.route(&mut session, confidence);
    eprintln!(
        "{} routed as {} ({})",
        routed.incident_id,
        routed.state,
        controller.band(confidence).message()
    );

    if let Some(decision) = decision {
        let outcome = controller
            .submit_review(&mut session, &routed.incident_id, decision)
            .with_context(|| format!("Cannot record '{decision}' for {}", routed.incident_id))?;
        eprintln!("{}", outcome.message());
    }

    Ok(to_csv(session.incidents.records()))
}

pub fn run(config_path: Option<&Path>, confidence: f64, decision: Option<ReviewDecision>) -> Result<()> {
    let config = FaceAbcConfig::load(config_path).context("Failed to load configuration")?;
    print!("{}", simulate(&config, confidence, decision)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceabc_ledger::CSV_HEADER;

    #[test]
    fn test_high_confidence_is_logged() {
        let csv = simulate(&FaceAbcConfig::default(), 0.9, None).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("INC-1001,Match Logged,High Confidence,0.90,System"));
    }

    #[test]
    fn test_low_confidence_with_reject() {
        let csv = simulate(&FaceAbcConfig::default(), 0.4, Some(ReviewDecision::Reject)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("INC-1001,Uncertain Match,Human Review Required,0.40,System"));
        assert!(lines[2].ends_with("INC-1001,Human Review,Reject,0.40,Reviewer"));
    }

    #[test]
    fn test_output_is_pure_csv_with_stdout_ledger() {
        let mut config = FaceAbcConfig::default();
        config.ledger.stdout = true;
        config.workflow.id_seed = 41;

        let csv = simulate(&config, 0.3, Some(ReviewDecision::SendToReviewBoard)).unwrap();
        assert!(csv.starts_with(CSV_HEADER));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("INC-42,Uncertain Match"));
        assert!(lines[2].ends_with("INC-42,Human Review,Send to Review Board,0.30,Reviewer"));
    }

    #[test]
    fn test_decision_on_auto_logged_incident_fails() {
        let result = simulate(&FaceAbcConfig::default(), 0.95, Some(ReviewDecision::ApproveMatch));
        assert!(result.is_err());
    }

    #[test]
    fn test_confidence_out_of_range() {
        assert!(simulate(&FaceAbcConfig::default(), 1.2, None).is_err());
        assert!(simulate(&FaceAbcConfig::default(), -0.1, None).is_err());
    }

    #[test]
    fn test_decision_flags() {
        assert_eq!(DecisionFlags::default().decision(), None);
        let flags = DecisionFlags {
            escalate: true,
            ..Default::default()
        };
        assert_eq!(flags.decision(), Some(ReviewDecision::SendToReviewBoard));
    }
}
