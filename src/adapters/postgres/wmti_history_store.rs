//! PostgreSQL implementation of WmtiHistoryStore.
//!
//! Expects:
//!
//! ```sql
//! CREATE TABLE wmti_history (
//!     id              UUID PRIMARY KEY,
//!     seq             BIGSERIAL NOT NULL,
//!     member_id       TEXT NOT NULL,
//!     answers         JSONB NOT NULL,
//!     scores          JSONB NOT NULL,
//!     code            CHAR(4) NOT NULL,
//!     risk_preference TEXT NOT NULL,
//!     created_at      TIMESTAMPTZ NOT NULL
//! );
//! CREATE INDEX wmti_history_member_idx ON wmti_history (member_id, created_at DESC);
//! ```
//!
//! Rows are inserted by `PostgresSurveyResultStore` in the same transaction
//! as the current-result upsert.

use async_trait::async_trait;
use sqlx::PgPool;

use super::wmti_rows::{db_error, row_id, row_to_result, RESULT_COLUMNS};
use crate::domain::foundation::{DomainError, UserId, WmtiHistoryId};
use crate::domain::wmti::WmtiHistoryEntry;
use crate::ports::WmtiHistoryStore;

#[derive(Clone)]
pub struct PostgresWmtiHistoryStore {
    pool: PgPool,
}

impl PostgresWmtiHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_entry(row: &sqlx::postgres::PgRow) -> Result<WmtiHistoryEntry, DomainError> {
    Ok(WmtiHistoryEntry::reconstitute(
        WmtiHistoryId::from_uuid(row_id(row)?),
        row_to_result(row)?,
    ))
}

#[async_trait]
impl WmtiHistoryStore for PostgresWmtiHistoryStore {
    async fn list_by_member(&self, member_id: &UserId) -> Result<Vec<WmtiHistoryEntry>, DomainError> {
        let sql = format!(
            "SELECT id, {} FROM wmti_history WHERE member_id = $1 ORDER BY created_at DESC, seq DESC",
            RESULT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(member_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list WMTI history"))?;

        rows.iter().map(row_to_entry).collect()
    }

    async fn find_by_id(&self, id: WmtiHistoryId) -> Result<Option<WmtiHistoryEntry>, DomainError> {
        let sql = format!("SELECT id, {} FROM wmti_history WHERE id = $1", RESULT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch WMTI history entry"))?;

        row.as_ref().map(row_to_entry).transpose()
    }

    async fn delete_by_id(&self, id: WmtiHistoryId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM wmti_history WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete WMTI history entry"))?;

        Ok(result.rows_affected() > 0)
    }
}
