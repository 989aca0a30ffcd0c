//! GetHistoryEntryHandler - Query handler for one history entry.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OwnedByUser, UserId, WmtiHistoryId};
use crate::domain::wmti::WmtiHistoryEntry;
use crate::ports::WmtiHistoryStore;

#[derive(Debug, Clone)]
pub struct GetHistoryEntryQuery {
    pub member_id: UserId,
    pub history_id: WmtiHistoryId,
}

pub struct GetHistoryEntryHandler {
    history: Arc<dyn WmtiHistoryStore>,
}

impl GetHistoryEntryHandler {
    pub fn new(history: Arc<dyn WmtiHistoryStore>) -> Self {
        Self { history }
    }

    /// # Errors
    ///
    /// - `HistoryEntryNotFound` if no entry has this id
    /// - `Forbidden` if the entry belongs to another member
    pub async fn handle(&self, query: GetHistoryEntryQuery) -> Result<WmtiHistoryEntry, DomainError> {
        let entry = self
            .history
            .find_by_id(query.history_id)
            .await?
            .ok_or_else(|| history_not_found(query.history_id))?;

        entry.check_ownership(&query.member_id)?;

        Ok(entry)
    }
}

pub(super) fn history_not_found(id: WmtiHistoryId) -> DomainError {
    DomainError::new(ErrorCode::HistoryEntryNotFound, "WMTI history entry not found")
        .with_detail("history_id", id.to_string())
}
