//! ListHistoryHandler - Query handler for a member's submission history.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wmti::WmtiHistoryEntry;
use crate::ports::WmtiHistoryStore;

#[derive(Debug, Clone)]
pub struct ListHistoryQuery {
    pub member_id: UserId,
}

/// Handler returning history newest first. An empty list is not an error.
pub struct ListHistoryHandler {
    history: Arc<dyn WmtiHistoryStore>,
}

impl ListHistoryHandler {
    pub fn new(history: Arc<dyn WmtiHistoryStore>) -> Self {
        Self { history }
    }

    pub async fn handle(&self, query: ListHistoryQuery) -> Result<Vec<WmtiHistoryEntry>, DomainError> {
        self.history.list_by_member(&query.member_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::wmti::test_support::{entry_for, member, MockHistoryStore};

    #[tokio::test]
    async fn lists_only_the_members_entries_newest_first() {
        let older = entry_for("member-1", 1);
        let other = entry_for("member-2", 2);
        let newer = entry_for("member-1", 5);
        let store = MockHistoryStore::with_entries(vec![older.clone(), other, newer.clone()]);
        let handler = ListHistoryHandler::new(Arc::new(store));

        let items = handler
            .handle(ListHistoryQuery {
                member_id: member("member-1"),
            })
            .await
            .unwrap();

        let ids: Vec<_> = items.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![newer.id(), older.id()]);
    }

    #[tokio::test]
    async fn empty_history_is_empty_list() {
        let handler = ListHistoryHandler::new(Arc::new(MockHistoryStore::new()));

        let items = handler
            .handle(ListHistoryQuery {
                member_id: member("member-1"),
            })
            .await
            .unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let handler = ListHistoryHandler::new(Arc::new(MockHistoryStore::failing()));

        let err = handler
            .handle(ListHistoryQuery {
                member_id: member("member-1"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, crate::domain::foundation::ErrorCode::DatabaseError);
    }
}
