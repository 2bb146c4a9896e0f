//! Incident ledger implementation.
//!
//! An append-only log of [`IncidentRecord`]s. There is no update in place: a
//! reviewer decision or a complaint outcome is a new record carrying the same
//! incident id, and everything else (history, routing state, the review queue)
//! is read back by filtering on that id.

use std::collections::HashMap;
use std::sync::Arc;

use crate::id::IdGenerator;
use crate::record::{Actor, IncidentEvent, IncidentRecord, IncidentState};
use crate::sink::{NullSink, RecordSink};

/// The incident log for one session.
pub struct IncidentLedger {
    ids: IdGenerator,
    records: Vec<IncidentRecord>,
    sink: Arc<dyn RecordSink>,
}

impl IncidentLedger {
    /// Create an empty ledger minting ids from `ids`.
    pub fn new(ids: IdGenerator) -> Self {
        Self::with_sink(ids, Arc::new(NullSink::new()))
    }

    /// Create a ledger that mirrors every appended record to `sink`.
    pub fn with_sink(ids: IdGenerator, sink: Arc<dyn RecordSink>) -> Self {
        Self {
            ids,
            records: Vec::new(),
            sink,
        }
    }

    /// Mint a fresh incident id without appending anything.
    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    /// Append a record and return the incident id it was filed under.
    ///
    /// Without an `incident_id` a new one is minted. The confidence is stored
    /// exactly as given.
    pub fn append(
        &mut self,
        event: IncidentEvent,
        action: impl Into<String>,
        confidence: f64,
        actor: Actor,
        incident_id: Option<&str>,
    ) -> String {
        let incident_id = match incident_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.ids.next_id(),
        };

        let record = IncidentRecord::new(incident_id.clone(), event, action, confidence, actor);

        tracing::debug!(
            incident_id = %record.incident_id,
            event = %record.event,
            action = %record.action,
            confidence = record.confidence,
            handled_by = %record.handled_by,
            "Incident record appended"
        );

        if let Err(e) = self.sink.record(&record) {
            tracing::warn!(error = %e, incident_id = %record.incident_id, "Failed to mirror incident record");
        }

        self.records.push(record);
        incident_id
    }

    /// All records in append order.
    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record filed under `incident_id`, oldest first.
    pub fn history(&self, incident_id: &str) -> Vec<&IncidentRecord> {
        self.records
            .iter()
            .filter(|r| r.incident_id == incident_id)
            .collect()
    }

    /// Routing state reconstructed from the incident's history.
    ///
    /// Returns `None` for ids that never appear in the ledger.
    pub fn state_of(&self, incident_id: &str) -> Option<IncidentState> {
        let mut history = self.history(incident_id).into_iter().peekable();
        history.peek()?;
        Some(history.fold(IncidentState::Detected, |state, r| state.advance(r.event)))
    }

    /// Confidence of the most recent routing record for an incident.
    ///
    /// Decision records are skipped; complaint outcomes carry a confidence of 0.
    pub fn routed_confidence(&self, incident_id: &str) -> Option<f64> {
        self.history(incident_id)
            .into_iter()
            .rev()
            .find(|r| {
                matches!(
                    r.event,
                    IncidentEvent::MatchLogged
                        | IncidentEvent::UncertainMatch
                        | IncidentEvent::ManualTrigger
                )
            })
            .map(|r| r.confidence)
    }

    /// Incidents currently awaiting a reviewer, oldest first.
    pub fn pending_reviews(&self) -> Vec<PendingReview> {
        let mut states: HashMap<&str, (IncidentState, usize)> = HashMap::new();
        for (idx, record) in self.records.iter().enumerate() {
            let entry = states
                .entry(record.incident_id.as_str())
                .or_insert((IncidentState::Detected, idx));
            entry.0 = entry.0.advance(record.event);
        }

        let mut pending: Vec<(usize, &str)> = states
            .into_iter()
            .filter(|(_, (state, _))| *state == IncidentState::PendingHumanReview)
            .map(|(id, (_, first))| (first, id))
            .collect();
        pending.sort_unstable();

        pending
            .into_iter()
            .filter_map(|(first, id)| {
                let confidence = self.routed_confidence(id)?;
                Some(PendingReview {
                    incident_id: id.to_string(),
                    confidence,
                    flagged_at: self.records[first].time,
                })
            })
            .collect()
    }

    /// Query records with filters.
    pub fn query(&self, filter: &RecordFilter) -> Vec<IncidentRecord> {
        let mut results: Vec<IncidentRecord> = self
            .records
            .iter()
            .filter(|r| {
                if let Some(ref id) = filter.incident_id
                    && &r.incident_id != id
                {
                    return false;
                }
                if let Some(event) = filter.event
                    && r.event != event
                {
                    return false;
                }
                if let Some(actor) = filter.actor
                    && r.handled_by != actor
                {
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        if filter.newest_first {
            results.reverse();
        }
        if let Some(limit) = filter.limit {
            results.truncate(limit);
        }

        results
    }
}

/// An incident waiting in the human review queue.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReview {
    pub incident_id: String,
    pub confidence: f64,
    pub flagged_at: chrono::DateTime<chrono::Utc>,
}

/// Filter for querying incident records.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Filter by incident id.
    pub incident_id: Option<String>,
    /// Filter by event.
    pub event: Option<IncidentEvent>,
    /// Filter by actor.
    pub actor: Option<Actor>,
    /// Return newest records first.
    pub newest_first: bool,
    /// Maximum number of results.
    pub limit: Option<usize>,
}
