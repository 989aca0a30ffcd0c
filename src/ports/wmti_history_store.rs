//! WMTI history store port - append-only submission timeline.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId, WmtiHistoryId};
use crate::domain::wmti::WmtiHistoryEntry;

/// Persistence port for history entries.
///
/// Entries are never updated. They are written by
/// [`SurveyResultStore::record_submission`](super::SurveyResultStore::record_submission)
/// and may be removed individually by id.
#[async_trait]
pub trait WmtiHistoryStore: Send + Sync {
    /// List a member's entries, newest first.
    ///
    /// Entries with equal timestamps are returned in reverse insertion order.
    async fn list_by_member(&self, member_id: &UserId) -> Result<Vec<WmtiHistoryEntry>, DomainError>;

    /// Find an entry by id regardless of owner.
    async fn find_by_id(&self, id: WmtiHistoryId) -> Result<Option<WmtiHistoryEntry>, DomainError>;

    /// Delete an entry. Returns `false` if no entry had this id.
    async fn delete_by_id(&self, id: WmtiHistoryId) -> Result<bool, DomainError>;
}
