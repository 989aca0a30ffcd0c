//! In-memory WMTI storage adapter.
//!
//! Implements both `SurveyResultStore` and `WmtiHistoryStore` over one
//! lock. A submission updates the current result and appends its history
//! entry under a single write guard. Used by tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId, WmtiHistoryId};
use crate::domain::wmti::{SurveyResult, WmtiHistoryEntry};
use crate::ports::{SurveyResultStore, WmtiHistoryStore};

#[derive(Debug, Default)]
struct WmtiTables {
    current: HashMap<UserId, SurveyResult>,
    /// Insertion order; newest last.
    history: Vec<WmtiHistoryEntry>,
}

/// In-memory storage for current results and history.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWmtiStore {
    tables: Arc<RwLock<WmtiTables>>,
}

impl InMemoryWmtiStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members with a current result.
    pub async fn current_count(&self) -> usize {
        self.tables.read().await.current.len()
    }

    /// Number of history entries across all members.
    pub async fn history_count(&self) -> usize {
        self.tables.read().await.history.len()
    }
}

#[async_trait]
impl SurveyResultStore for InMemoryWmtiStore {
    async fn record_submission(&self, entry: &WmtiHistoryEntry) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let result = entry.result();

        let replace = tables
            .current
            .get(result.member_id())
            .map_or(true, |stored| stored.created_at() <= result.created_at());
        if replace {
            tables
                .current
                .insert(result.member_id().clone(), result.clone());
        }
        tables.history.push(entry.clone());
        Ok(())
    }

    async fn find_current(&self, member_id: &UserId) -> Result<Option<SurveyResult>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.current.get(member_id).cloned())
    }
}

#[async_trait]
impl WmtiHistoryStore for InMemoryWmtiStore {
    async fn list_by_member(&self, member_id: &UserId) -> Result<Vec<WmtiHistoryEntry>, DomainError> {
        let tables = self.tables.read().await;
        let mut entries: Vec<WmtiHistoryEntry> = tables
            .history
            .iter()
            .rev()
            .filter(|e| e.member_id() == member_id)
            .cloned()
            .collect();
        // Stable sort keeps reverse insertion order among equal timestamps.
        entries.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(entries)
    }

    async fn find_by_id(&self, id: WmtiHistoryId) -> Result<Option<WmtiHistoryEntry>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.history.iter().find(|e| e.id() == id).cloned())
    }

    async fn delete_by_id(&self, id: WmtiHistoryId) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        let before = tables.history.len();
        tables.history.retain(|e| e.id() != id);
        Ok(tables.history.len() != before)
    }
}
