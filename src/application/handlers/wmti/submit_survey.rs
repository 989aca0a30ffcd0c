//! SubmitSurveyHandler - Command handler for WMTI submissions.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::foundation::{CommandMetadata, DomainError, EventEnvelope, UserId};
use crate::domain::wmti::{validate_answers, SurveyResult, WmtiHistoryEntry, WmtiResultRecorded};
use crate::ports::{EventPublisher, SurveyResultStore};

/// Command to score and record a completed questionnaire.
#[derive(Debug, Clone)]
pub struct SubmitSurveyCommand {
    pub member_id: UserId,
    pub answers: Vec<i32>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitSurveyResult {
    /// The new current result.
    pub result: SurveyResult,
    /// The history entry appended for this submission.
    pub history_entry: WmtiHistoryEntry,
}

/// Handler for survey submissions.
///
/// The current result and its history entry are stored in one atomic store
/// call; if it fails, nothing changed. The follow-up event is best effort.
pub struct SubmitSurveyHandler {
    results: Arc<dyn SurveyResultStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SubmitSurveyHandler {
    pub fn new(
        results: Arc<dyn SurveyResultStore>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            results,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitSurveyCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitSurveyResult, DomainError> {
        // 1. Validate and score
        let answers = validate_answers(&cmd.answers)?;
        let result = SurveyResult::record(cmd.member_id, answers);
        let history_entry = WmtiHistoryEntry::from_result(result.clone());

        // 2. Persist current result and history together
        if let Err(e) = self.results.record_submission(&history_entry).await {
            error!(
                member_id = %result.member_id(),
                correlation_id = %metadata.correlation_id(),
                error = %e,
                "Failed to record WMTI submission"
            );
            return Err(e);
        }

        info!(
            member_id = %result.member_id(),
            code = %result.code(),
            risk_preference = %result.risk_preference(),
            history_id = %history_entry.id(),
            correlation_id = %metadata.correlation_id(),
            "WMTI result recorded"
        );

        // 3. Publish event (fire-and-forget)
        self.publish_recorded(&history_entry, &metadata).await;

        Ok(SubmitSurveyResult {
            result,
            history_entry,
        })
    }

    async fn publish_recorded(&self, entry: &WmtiHistoryEntry, metadata: &CommandMetadata) {
        let event = WmtiResultRecorded::from_entry(entry);
        let envelope = match EventEnvelope::from_event(&event) {
            Ok(envelope) => envelope
                .with_correlation_id(metadata.correlation_id())
                .with_user_id(metadata.user_id.to_string()),
            Err(e) => {
                warn!(error = %e, "Failed to build wmti.result_recorded event");
                return;
            }
        };

        if let Err(e) = self.event_publisher.publish(envelope).await {
            warn!(
                member_id = %entry.member_id(),
                error = %e,
                "Failed to publish wmti.result_recorded event"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::wmti::test_support::{
        member, MockEventPublisher, MockSurveyResultStore,
    };
    use crate::domain::foundation::ErrorCode;

    const GOLDEN: [i32; 20] = [5, 5, 5, 5, 5, 1, 1, 1, 1, 1, 3, 3, 3, 3, 3, 5, 1, 5, 1, 5];

    struct Fixture {
        results: Arc<MockSurveyResultStore>,
        publisher: Arc<MockEventPublisher>,
        handler: SubmitSurveyHandler,
    }

    fn fixture_with(results: MockSurveyResultStore, publisher: MockEventPublisher) -> Fixture {
        let results = Arc::new(results);
        let publisher = Arc::new(publisher);
        let handler = SubmitSurveyHandler::new(results.clone(), publisher.clone());
        Fixture {
            results,
            publisher,
            handler,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(MockSurveyResultStore::new(), MockEventPublisher::new())
    }

    fn command(answers: &[i32]) -> SubmitSurveyCommand {
        SubmitSurveyCommand {
            member_id: member("member-1"),
            answers: answers.to_vec(),
        }
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(member("member-1")).with_correlation_id("corr-1")
    }

    #[tokio::test]
    async fn records_golden_vector() {
        let f = fixture();

        let out = f.handler.handle(command(&GOLDEN), metadata()).await.unwrap();

        assert_eq!(out.result.code().as_str(), "ABML");
        assert_eq!(out.history_entry.result(), &out.result);
        assert_eq!(f.results.current_count(), 1);
        let recorded = f.results.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].id(), out.history_entry.id());
    }

    #[tokio::test]
    async fn resubmission_replaces_current_and_grows_history() {
        let f = fixture();

        let first = f.handler.handle(command(&GOLDEN), metadata()).await.unwrap();
        let second = f.handler.handle(command(&GOLDEN), metadata()).await.unwrap();

        assert_eq!(first.result.code(), second.result.code());
        assert_ne!(first.history_entry.id(), second.history_entry.id());
        assert_eq!(f.results.current_count(), 1);
        assert_eq!(f.results.recorded().len(), 2);
    }

    #[tokio::test]
    async fn publishes_recorded_event_with_metadata() {
        let f = fixture();

        f.handler.handle(command(&GOLDEN), metadata()).await.unwrap();

        let events = f.publisher.published();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "wmti.result_recorded.v1");
        assert_eq!(events[0].metadata.correlation_id.as_deref(), Some("corr-1"));
        assert_eq!(events[0].payload["code"], "ABML");
    }

    #[tokio::test]
    async fn wrong_length_fails_before_any_write() {
        let f = fixture();

        let err = f.handler.handle(command(&[3; 19]), metadata()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::IncompleteAnswers);
        assert!(f.results.recorded().is_empty());
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_answer_is_rejected() {
        let f = fixture();
        let mut answers = [3; 20];
        answers[4] = 9;

        let err = f.handler.handle(command(&answers), metadata()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::AnswerOutOfRange);
    }

    #[tokio::test]
    async fn storage_failure_fails_submission() {
        let f = fixture_with(MockSurveyResultStore::failing(), MockEventPublisher::new());

        let err = f.handler.handle(command(&GOLDEN), metadata()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(f.results.recorded().is_empty());
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn failed_submission_keeps_previous_current_result() {
        let previous = SurveyResult::record(
            member("member-1"),
            validate_answers(&[3; 20]).unwrap(),
        );
        let f = fixture_with(
            MockSurveyResultStore::with_result(previous.clone()).failing_on_record(),
            MockEventPublisher::new(),
        );

        let err = f.handler.handle(command(&GOLDEN), metadata()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        let current = f
            .results
            .find_current(&member("member-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current, previous);
        assert_eq!(current.code().as_str(), "APML");
        assert!(f.results.recorded().is_empty());
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn publish_failure_does_not_fail_submission() {
        let f = fixture_with(MockSurveyResultStore::new(), MockEventPublisher::failing());

        let out = f.handler.handle(command(&GOLDEN), metadata()).await;

        assert!(out.is_ok());
        assert_eq!(f.results.recorded().len(), 1);
    }
}
