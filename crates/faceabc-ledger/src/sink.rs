//! Record sinks.
//!
//! The ledger itself is the in-memory store; a sink only mirrors appended records
//! somewhere else. Mirroring is best-effort and never blocks an append.

use crate::error::LedgerError;
use crate::record::IncidentRecord;
use faceabc_core::{LedgerConfig, RecordFormat};
use std::sync::Arc;

/// Trait for incident record mirrors.
pub trait RecordSink: Send + Sync {
    /// Mirror one appended record.
    fn record(&self, record: &IncidentRecord) -> Result<(), LedgerError>;
}

/// Create a sink based on configuration.
pub fn create_sink(config: &LedgerConfig) -> Arc<dyn RecordSink> {
    if config.stdout {
        Arc::new(ConsoleSink::new(config.format))
    } else {
        Arc::new(NullSink::new())
    }
}

/// Discards every record.
#[derive(Debug, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl RecordSink for NullSink {
    fn record(&self, _record: &IncidentRecord) -> Result<(), LedgerError> {
        Ok(())
    }
}

/// Console sink (writes to stdout).
#[derive(Debug, Default)]
pub struct ConsoleSink {
    format: RecordFormat,
}

impl ConsoleSink {
    pub fn new(format: RecordFormat) -> Self {
        Self { format }
    }

    fn render(&self, record: &IncidentRecord) -> Result<String, LedgerError> {
        match self.format {
            RecordFormat::Text => Ok(record.to_log_line()),
            RecordFormat::Json => Ok(serde_json::to_string(record)?),
        }
    }
}

impl RecordSink for ConsoleSink {
    fn record(&self, record: &IncidentRecord) -> Result<(), LedgerError> {
        println!("{}", self.render(record)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Actor, IncidentEvent};

    fn sample() -> IncidentRecord {
        IncidentRecord::new(
            "INC-1001",
            IncidentEvent::MatchLogged,
            "High Confidence",
            0.9,
            Actor::System,
        )
    }

    #[test]
    fn test_console_sink() {
        // Should not error
        ConsoleSink::new(RecordFormat::Text).record(&sample()).unwrap();
        ConsoleSink::new(RecordFormat::Json).record(&sample()).unwrap();
    }

    #[test]
    fn test_json_render() {
        let line = ConsoleSink::new(RecordFormat::Json).render(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["incident_id"], "INC-1001");
        assert_eq!(value["event"], "Match Logged");
        assert_eq!(value["handled_by"], "System");
    }

    #[test]
    fn test_text_render_is_log_line() {
        let record = sample();
        let line = ConsoleSink::new(RecordFormat::Text).render(&record).unwrap();
        assert_eq!(line, record.to_log_line());
    }
}
