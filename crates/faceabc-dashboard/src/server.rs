//! Dashboard server implementation.

use crate::error::DashboardError;
use crate::routes;
use crate::state::AppState;
use faceabc_core::FaceAbcConfig;
use tokio::net::TcpListener;

/// The dashboard server.
pub struct DashboardServer {
    state: AppState,
}

impl DashboardServer {
    /// Create a new dashboard server with the given configuration.
    pub fn new(config: FaceAbcConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    /// Start the dashboard server.
    pub async fn run(&self) -> Result<(), DashboardError> {
        let addr = self.bind_address();
        tracing::info!(
            address = %addr,
            threshold = self.state.controller().threshold(),
            operator = %self.state.config().dashboard.operator,
            "Starting FaceABC dashboard"
        );

        let app = routes::create_router(self.state.clone());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        Ok(())
    }

    /// Get the configured bind address.
    pub fn bind_address(&self) -> String {
        self.state.config().dashboard.bind_address()
    }
}
