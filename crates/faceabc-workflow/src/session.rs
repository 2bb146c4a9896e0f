//! Session-scoped workflow state.
//!
//! Everything a user interaction can touch lives here: both ledgers, the id
//! counter (inside the incident ledger), the uploaded camera frame and the
//! alarm currently shown on the review board. A session lives as long as its
//! owner keeps it; nothing is persisted.

use faceabc_core::FaceAbcConfig;
use faceabc_ledger::{ComplaintLedger, IdGenerator, IncidentLedger, create_sink};

/// An uploaded camera frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFrame {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: Option<String>,
}

/// The incident most recently sent through a face check.
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub incident_id: String,
    pub confidence: f64,
}

/// State for one user session.
pub struct Session {
    pub incidents: IncidentLedger,
    pub complaints: ComplaintLedger,
    frame: Option<CameraFrame>,
    /// Score drawn for the current frame, routed on the next face check.
    score: Option<f64>,
    alarm: Option<Alarm>,
}

impl Session {
    /// Empty session whose counter starts at `id_seed`.
    pub fn new(id_seed: u64) -> Self {
        Self::with_ledger(IncidentLedger::new(IdGenerator::new(id_seed)))
    }

    /// Empty session configured from `config` (counter seed and record sink).
    pub fn from_config(config: &FaceAbcConfig) -> Self {
        Self::with_ledger(IncidentLedger::with_sink(
            IdGenerator::new(config.workflow.id_seed),
            create_sink(&config.ledger),
        ))
    }

    fn with_ledger(incidents: IncidentLedger) -> Self {
        Self {
            incidents,
            complaints: ComplaintLedger::new(),
            frame: None,
            score: None,
            alarm: None,
        }
    }

    /// Replace the camera frame and the score drawn for it.
    pub fn set_frame(&mut self, frame: CameraFrame, score: f64) {
        self.frame = Some(frame);
        self.score = Some(score);
    }

    pub fn frame(&self) -> Option<&CameraFrame> {
        self.frame.as_ref()
    }

    /// Whether an image was uploaded; gates the side-by-side comparison.
    pub fn has_image(&self) -> bool {
        self.frame.is_some()
    }

    /// Score of the current frame, if one was uploaded.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn alarm(&self) -> Option<&Alarm> {
        self.alarm.as_ref()
    }

    pub(crate) fn set_alarm(&mut self, incident_id: String, confidence: f64) {
        self.alarm = Some(Alarm {
            incident_id,
            confidence,
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1000)
    }
}
