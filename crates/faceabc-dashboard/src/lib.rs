//! # faceabc-dashboard
//!
//! Web dashboard for the FaceABC incident workflow.
//!
//! This crate provides an embedded web UI with five pages:
//! - Camera Dashboard (upload a frame, run a face check, force an audit)
//! - Human Review Board (decide incidents pending review)
//! - System Logs (incident ledger, CSV download)
//! - User Complaint Portal (file a complaint)
//! - Complaint Review (ethics board decisions)
//!
//! plus a small read-only JSON API under `/api`.
//!
//! ## Tech Stack
//!
//! - Axum for HTTP server
//! - Static assets bundled via `rust-embed`
//! - Tailwind CSS for styling, plain HTML forms for interaction
//!
//! The dashboard serves a single in-memory session: every request locks it,
//! runs to completion and releases it.

pub mod api_types;
pub mod assets;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use error::DashboardError;
pub use server::DashboardServer;
pub use state::AppState;
