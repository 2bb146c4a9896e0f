//! # faceabc-ledger
//!
//! Append-only ledgers for the FaceABC incident workflow.
//!
//! This crate provides:
//! - [`IdGenerator`]: monotonic `INC-<seq>` identifiers
//! - [`IncidentLedger`]: append-only incident log; an incident's history and
//!   routing state are reconstructed by filtering on its id
//! - [`ComplaintLedger`]: user complaints whose status moves exactly once from
//!   `Pending` to a terminal state
//! - [`RecordSink`]: optional mirroring of appended records (stdout)
//! - CSV export of the incident log
//!
//! ## Record Events
//!
//! | Event | Actor | Meaning |
//! |-------|-------|---------|
//! | `Match Logged` | System | confidence at or above threshold |
//! | `Uncertain Match` | System | confidence below threshold, review required |
//! | `Manual Trigger` | System | review forced from the dashboard |
//! | `Human Review` | Reviewer | reviewer decision, action holds the choice |
//! | `Complaint Reviewed` | Ethics Board | complaint compensated or dismissed |
//!
//! ## Example Usage
//!
//! ```rust
//! use faceabc_ledger::{Actor, IdGenerator, IncidentEvent, IncidentLedger, IncidentState};
//!
//! let mut ledger = IncidentLedger::new(IdGenerator::new(1000));
//! let id = ledger.append(
//!     IncidentEvent::UncertainMatch,
//!     "Human Review Required",
//!     0.40,
//!     Actor::System,
//!     None,
//! );
//! assert_eq!(id, "INC-1001");
//! assert_eq!(ledger.state_of(&id), Some(IncidentState::PendingHumanReview));
//! ```

pub mod complaint;
pub mod error;
pub mod export;
pub mod id;
pub mod ledger;
pub mod record;
pub mod sink;

pub use complaint::{ComplaintLedger, ComplaintRecord, ComplaintStatus};
pub use error::LedgerError;
pub use export::{CSV_FILE_NAME, CSV_HEADER, to_csv, write_csv};
pub use id::{INCIDENT_ID_PREFIX, IdGenerator};
pub use ledger::{IncidentLedger, PendingReview, RecordFilter};
pub use record::{Actor, IncidentEvent, IncidentRecord, IncidentState, TIME_FORMAT};
pub use sink::{ConsoleSink, NullSink, RecordSink, create_sink};
