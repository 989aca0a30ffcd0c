//! Hand-written port doubles shared by the WMTI handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope, UserId, WmtiHistoryId};
use crate::domain::wmti::{validate_answers, SurveyResult, WmtiHistoryEntry};
use crate::ports::{EventPublisher, SurveyResultStore, WmtiHistoryStore};

pub fn member(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub fn entry_for(member_id: &str, answer: i32) -> WmtiHistoryEntry {
    WmtiHistoryEntry::from_result(SurveyResult::record(
        member(member_id),
        validate_answers(&[answer; 20]).unwrap(),
    ))
}

/// Result store double. Writes are all-or-nothing, like a transaction.
#[derive(Default)]
pub struct MockSurveyResultStore {
    current: Mutex<HashMap<UserId, SurveyResult>>,
    recorded: Mutex<Vec<WmtiHistoryEntry>>,
    fail: bool,
    fail_record: bool,
}

impl MockSurveyResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_result(result: SurveyResult) -> Self {
        let store = Self::new();
        store
            .current
            .lock()
            .unwrap()
            .insert(result.member_id().clone(), result);
        store
    }

    /// Reads keep working; recording a submission fails.
    pub fn failing_on_record(self) -> Self {
        Self {
            fail_record: true,
            ..self
        }
    }

    /// Entries recorded so far, oldest first.
    pub fn recorded(&self) -> Vec<WmtiHistoryEntry> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn current_count(&self) -> usize {
        self.current.lock().unwrap().len()
    }
}

#[async_trait]
impl SurveyResultStore for MockSurveyResultStore {
    async fn record_submission(&self, entry: &WmtiHistoryEntry) -> Result<(), DomainError> {
        if self.fail || self.fail_record {
            return Err(DomainError::database("Simulated submission failure"));
        }
        self.current
            .lock()
            .unwrap()
            .insert(entry.member_id().clone(), entry.result().clone());
        self.recorded.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn find_current(&self, member_id: &UserId) -> Result<Option<SurveyResult>, DomainError> {
        if self.fail {
            return Err(DomainError::database("Simulated read failure"));
        }
        Ok(self.current.lock().unwrap().get(member_id).cloned())
    }
}

#[derive(Default)]
pub struct MockHistoryStore {
    entries: Mutex<Vec<WmtiHistoryEntry>>,
    fail: bool,
}

impl MockHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_entries(entries: Vec<WmtiHistoryEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            fail: false,
        }
    }

    pub fn entries(&self) -> Vec<WmtiHistoryEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WmtiHistoryStore for MockHistoryStore {
    async fn list_by_member(&self, member_id: &UserId) -> Result<Vec<WmtiHistoryEntry>, DomainError> {
        if self.fail {
            return Err(DomainError::database("Simulated list failure"));
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|e| e.member_id() == member_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: WmtiHistoryId) -> Result<Option<WmtiHistoryEntry>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id() == id)
            .cloned())
    }

    async fn delete_by_id(&self, id: WmtiHistoryId) -> Result<bool, DomainError> {
        if self.fail {
            return Err(DomainError::database("Simulated delete failure"));
        }
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.id() != id);
        Ok(entries.len() != before)
    }
}

#[derive(Default)]
pub struct MockEventPublisher {
    published: Mutex<Vec<EventEnvelope>>,
    fail: bool,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn published(&self) -> Vec<EventEnvelope> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Simulated publish failure",
            ));
        }
        self.published.lock().unwrap().push(event);
        Ok(())
    }
}
