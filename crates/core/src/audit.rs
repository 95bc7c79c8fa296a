//! Per-run audit trail.
//!
//! The trail is append-only for the duration of one orchestration run and
//! handed to the caller with the output; long-term retention is an
//! external concern.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::ids::IdGenerator;

/// Kinds of decision steps recorded during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditKind {
    #[serde(rename = "event.received")]
    EventReceived,
    #[serde(rename = "rules.candidates.generated")]
    CandidatesGenerated,
    #[serde(rename = "actions.ranked")]
    ActionsRanked,
    #[serde(rename = "handoffs.derived")]
    HandoffsDerived,
    #[serde(rename = "agents.executed")]
    AgentsExecuted,
    #[serde(rename = "agent.notes")]
    AgentNotes,
    #[serde(rename = "agent.failed")]
    AgentFailed,
    #[serde(rename = "candidate.scored")]
    CandidateScored,
}

impl AuditKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EventReceived => "event.received",
            Self::CandidatesGenerated => "rules.candidates.generated",
            Self::ActionsRanked => "actions.ranked",
            Self::HandoffsDerived => "handoffs.derived",
            Self::AgentsExecuted => "agents.executed",
            Self::AgentNotes => "agent.notes",
            Self::AgentFailed => "agent.failed",
            Self::CandidateScored => "candidate.scored",
        }
    }
}

/// An immutable, timestamped record of one decision step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: String,
    pub recorded_at: DateTime<Utc>,
    pub actor: String,
    pub kind: AuditKind,
    pub payload: serde_json::Value,
}

/// Per-run builder collecting audit records in strict call order.
pub struct AuditTrail {
    records: Vec<AuditRecord>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl AuditTrail {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { records: Vec::new(), ids, clock }
    }

    /// Allocate a fresh id, stamp the current time, and append. No
    /// deduplication, no retention limit within a run.
    pub fn record(
        &mut self,
        actor: impl Into<String>,
        kind: AuditKind,
        payload: serde_json::Value,
    ) -> &AuditRecord {
        let record = AuditRecord {
            id: self.ids.next("audit"),
            recorded_at: self.clock.now(),
            actor: actor.into(),
            kind,
            payload,
        };
        self.records.push(record);
        // Just pushed, so the slice is non-empty.
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<AuditRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::clock::FixedClock;
    use crate::ids::SequentialIds;

    fn trail() -> AuditTrail {
        let instant =
            Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).single().expect("valid instant");
        AuditTrail::new(Arc::new(SequentialIds::new()), Arc::new(FixedClock(instant)))
    }

    #[test]
    fn records_append_in_strict_call_order() {
        let mut trail = trail();
        trail.record("orchestrator", AuditKind::EventReceived, json!({"eventId": "evt-1"}));
        trail.record("orchestrator", AuditKind::CandidatesGenerated, json!({"count": 2}));
        trail.record("orchestrator", AuditKind::ActionsRanked, json!({"count": 2}));

        let kinds: Vec<AuditKind> = trail.records().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            [AuditKind::EventReceived, AuditKind::CandidatesGenerated, AuditKind::ActionsRanked]
        );
        assert_eq!(trail.records()[0].id, "audit_0001");
        assert_eq!(trail.records()[2].id, "audit_0003");
    }

    #[test]
    fn trail_length_only_grows() {
        let mut trail = trail();
        assert!(trail.is_empty());

        let mut previous = 0;
        for n in 0..5 {
            trail.record("orchestrator", AuditKind::AgentNotes, json!({ "n": n }));
            assert!(trail.len() > previous);
            previous = trail.len();
        }
    }

    #[test]
    fn record_uses_the_injected_clock() {
        let mut trail = trail();
        let record =
            trail.record("orchestrator", AuditKind::EventReceived, json!({})).clone();

        let expected =
            Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).single().expect("valid instant");
        assert_eq!(record.recorded_at, expected);
        assert_eq!(record.actor, "orchestrator");
    }

    #[test]
    fn audit_kind_serializes_to_dotted_name() {
        let json = serde_json::to_string(&AuditKind::CandidatesGenerated).expect("serialize");
        assert_eq!(json, "\"rules.candidates.generated\"");
        assert_eq!(AuditKind::AgentNotes.as_str(), "agent.notes");
    }
}
