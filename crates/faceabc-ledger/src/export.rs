//! CSV export of the incident log.

use std::io::Write;

use crate::error::LedgerError;
use crate::record::{IncidentRecord, TIME_FORMAT};

/// Header row of the export.
pub const CSV_HEADER: &str = "Time,Incident ID,Event,Action,Confidence,Handled By";

/// Suggested download file name.
pub const CSV_FILE_NAME: &str = "faceabc_logs.csv";

/// Write records as CSV, header first, one row per record.
pub fn write_csv<W: Write>(records: &[IncidentRecord], mut out: W) -> Result<(), LedgerError> {
    writeln!(out, "{CSV_HEADER}")?;
    for record in records {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            record.time.format(TIME_FORMAT),
            escape_field(&record.incident_id),
            escape_field(record.event.label()),
            escape_field(&record.action),
            record.confidence_display(),
            escape_field(record.handled_by.label()),
        )?;
    }
    Ok(())
}

/// Render records as a CSV string.
pub fn to_csv(records: &[IncidentRecord]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_csv(records, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Quote a field when it contains a delimiter, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
