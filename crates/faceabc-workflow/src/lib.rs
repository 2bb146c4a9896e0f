//! # faceabc-workflow
//!
//! The FaceABC incident workflow.
//!
//! ## Flow
//!
//! 1. A camera frame yields a simulated confidence score
//! 2. [`WorkflowController::route`] logs the incident automatically when the score
//!    meets the threshold, otherwise flags it for human review
//! 3. A reviewer records Approve Match / Reject / Send to Review Board
//! 4. A user may file a complaint referencing an incident id
//! 5. The ethics board compensates or dismisses the complaint
//!
//! All state lives in a [`Session`] that the caller owns and hands to the
//! controller on every call.

pub mod controller;
pub mod decision;
pub mod error;
pub mod session;
pub mod simulator;

pub use controller::{ComplaintForm, ComplaintResolution, RoutingDecision, WorkflowController};
pub use decision::{ComplaintDecision, OutcomeKind, ReviewDecision, ReviewOutcome};
pub use error::{ValidationError, WorkflowError};
pub use session::{Alarm, CameraFrame, Session};
pub use simulator::{ConfidenceBand, ConfidenceSource, FixedConfidence, RandomConfidence};
