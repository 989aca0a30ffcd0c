//! DeleteHistoryEntryHandler - Command handler for removing a history entry.

use std::sync::Arc;

use tracing::info;

use super::get_history_entry::history_not_found;
use crate::domain::foundation::{CommandMetadata, DomainError, OwnedByUser, UserId, WmtiHistoryId};
use crate::ports::WmtiHistoryStore;

/// Command to delete one of the member's history entries.
#[derive(Debug, Clone)]
pub struct DeleteHistoryEntryCommand {
    pub member_id: UserId,
    pub history_id: WmtiHistoryId,
}

/// Handler for history deletion. The current result is never touched.
pub struct DeleteHistoryEntryHandler {
    history: Arc<dyn WmtiHistoryStore>,
}

impl DeleteHistoryEntryHandler {
    pub fn new(history: Arc<dyn WmtiHistoryStore>) -> Self {
        Self { history }
    }

    /// # Errors
    ///
    /// - `HistoryEntryNotFound` if no entry has this id
    /// - `Forbidden` if the entry belongs to another member
    /// - `DatabaseError` on persistence failure
    pub async fn handle(
        &self,
        cmd: DeleteHistoryEntryCommand,
        metadata: CommandMetadata,
    ) -> Result<(), DomainError> {
        let entry = self
            .history
            .find_by_id(cmd.history_id)
            .await?
            .ok_or_else(|| history_not_found(cmd.history_id))?;

        entry.check_ownership(&cmd.member_id)?;

        // A concurrent delete may have won the race.
        if !self.history.delete_by_id(cmd.history_id).await? {
            return Err(history_not_found(cmd.history_id));
        }

        info!(
            member_id = %cmd.member_id,
            history_id = %cmd.history_id,
            correlation_id = %metadata.correlation_id(),
            "WMTI history entry deleted"
        );

        Ok(())
    }
}
