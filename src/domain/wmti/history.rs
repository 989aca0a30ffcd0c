//! Immutable history entries.

use serde::{Deserialize, Serialize};

use super::result::SurveyResult;
use crate::domain::foundation::{OwnedByUser, Timestamp, UserId, WmtiHistoryId};

/// An independently addressable snapshot of one past submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmtiHistoryEntry {
    id: WmtiHistoryId,
    result: SurveyResult,
}

impl WmtiHistoryEntry {
    /// Wraps a freshly recorded result under a new history id.
    pub fn from_result(result: SurveyResult) -> Self {
        Self {
            id: WmtiHistoryId::new(),
            result,
        }
    }

    /// Reconstitute an entry from persistence.
    pub fn reconstitute(id: WmtiHistoryId, result: SurveyResult) -> Self {
        Self { id, result }
    }

    pub fn id(&self) -> WmtiHistoryId {
        self.id
    }

    pub fn result(&self) -> &SurveyResult {
        &self.result
    }

    pub fn member_id(&self) -> &UserId {
        self.result.member_id()
    }

    pub fn created_at(&self) -> &Timestamp {
        self.result.created_at()
    }
}

impl OwnedByUser for WmtiHistoryEntry {
    fn owner_id(&self) -> &UserId {
        self.result.member_id()
    }
}
