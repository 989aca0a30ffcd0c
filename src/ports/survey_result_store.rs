//! Survey result store port - the member's current result.
//!
//! A member has at most one current result. It is only ever written together
//! with the history entry for the same submission, so the newest history
//! entry always mirrors it.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wmti::{SurveyResult, WmtiHistoryEntry};

/// Persistence port for current survey results.
#[async_trait]
pub trait SurveyResultStore: Send + Sync {
    /// Record one submission as a single atomic unit:
    ///
    /// - upsert `entry.result()` as the member's current result, unless the
    ///   stored one is strictly newer
    /// - append `entry` to the member's history
    ///
    /// On error neither write is visible.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn record_submission(&self, entry: &WmtiHistoryEntry) -> Result<(), DomainError>;

    /// Find the member's current result.
    ///
    /// Returns `None` if the member has never submitted.
    async fn find_current(&self, member_id: &UserId) -> Result<Option<SurveyResult>, DomainError>;
}
