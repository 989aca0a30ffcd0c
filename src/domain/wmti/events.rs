//! WMTI domain events.

use serde::{Deserialize, Serialize};

use super::history::WmtiHistoryEntry;
use super::risk_preference::RiskPreference;
use super::code::WmtiCode;
use crate::domain::foundation::{domain_event, EventId, Timestamp, UserId, WmtiHistoryId};

/// Published after a submission has been durably stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmtiResultRecorded {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Member who submitted the survey.
    pub member_id: UserId,

    /// History entry created for the submission.
    pub history_id: WmtiHistoryId,

    pub code: WmtiCode,

    pub risk_preference: RiskPreference,

    /// When the result was computed.
    pub recorded_at: Timestamp,
}

impl WmtiResultRecorded {
    pub fn from_entry(entry: &WmtiHistoryEntry) -> Self {
        let result = entry.result();
        Self {
            event_id: EventId::new(),
            member_id: result.member_id().clone(),
            history_id: entry.id(),
            code: result.code().clone(),
            risk_preference: result.risk_preference(),
            recorded_at: *result.created_at(),
        }
    }
}

domain_event!(
    WmtiResultRecorded,
    event_type = "wmti.result_recorded.v1",
    aggregate_id = member_id,
    aggregate_type = "SurveyResult",
    occurred_at = recorded_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, EventEnvelope};
    use crate::domain::wmti::{validate_answers, SurveyResult};

    #[test]
    fn recorded_event_mirrors_the_entry() {
        let member = UserId::new("member-7").unwrap();
        let entry = WmtiHistoryEntry::from_result(SurveyResult::record(
            member.clone(),
            validate_answers(&[3; 20]).unwrap(),
        ));

        let event = WmtiResultRecorded::from_entry(&entry);

        assert_eq!(event.member_id, member);
        assert_eq!(event.history_id, entry.id());
        assert_eq!(event.code.as_str(), "APML");
        assert_eq!(event.event_type(), "wmti.result_recorded.v1");
        assert_eq!(event.aggregate_id(), "member-7");
    }

    #[test]
    fn envelope_carries_schema_version_one() {
        let entry = WmtiHistoryEntry::from_result(SurveyResult::record(
            UserId::new("member-7").unwrap(),
            validate_answers(&[1; 20]).unwrap(),
        ));
        let envelope = EventEnvelope::from_event(&WmtiResultRecorded::from_entry(&entry)).unwrap();

        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.aggregate_type, "SurveyResult");
        assert_eq!(envelope.payload["risk_preference"], "RISK_NEUTRAL");
    }
}
