//! Dashboard application state.

use faceabc_core::FaceAbcConfig;
use faceabc_workflow::{ConfidenceSource, RandomConfidence, Session, WorkflowController};
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared application state for the dashboard.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The loaded configuration.
    config: FaceAbcConfig,
    /// Routing policy.
    controller: WorkflowController,
    /// The single user session served by this dashboard.
    session: Mutex<Session>,
    /// Simulated recognition scores.
    scores: Mutex<Box<dyn ConfidenceSource>>,
}

impl AppState {
    /// Create state with a fresh session and a random score source.
    pub fn new(config: FaceAbcConfig) -> Self {
        let scores = Box::new(RandomConfidence::from_config(&config.simulator));
        Self::with_scores(config, scores)
    }

    /// Create state with a custom score source.
    pub fn with_scores(config: FaceAbcConfig, scores: Box<dyn ConfidenceSource>) -> Self {
        let session = Session::from_config(&config);
        let controller = WorkflowController::new(config.workflow.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                controller,
                session: Mutex::new(session),
                scores: Mutex::new(scores),
            }),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &FaceAbcConfig {
        &self.inner.config
    }

    pub fn controller(&self) -> &WorkflowController {
        &self.inner.controller
    }

    /// Lock the session. Never hold the guard across an `.await`.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        // A panicked handler leaves the ledgers append-consistent, so keep serving.
        self.inner
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Draw the next simulated confidence score.
    pub fn draw_score(&self) -> f64 {
        self.inner
            .scores
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .sample()
    }
}
