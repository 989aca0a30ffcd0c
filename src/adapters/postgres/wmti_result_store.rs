//! PostgreSQL implementation of SurveyResultStore.
//!
//! Expects:
//!
//! ```sql
//! CREATE TABLE wmti_results (
//!     member_id       TEXT PRIMARY KEY,
//!     answers         JSONB NOT NULL,
//!     scores          JSONB NOT NULL,
//!     code            CHAR(4) NOT NULL,
//!     risk_preference TEXT NOT NULL,
//!     created_at      TIMESTAMPTZ NOT NULL
//! );
//! ```
//!
//! A submission writes this table and `wmti_history` (see
//! `PostgresWmtiHistoryStore`) inside one transaction. The upsert only
//! replaces a row whose `created_at` is not newer than the incoming one, so
//! the current row and the newest history row always agree.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};

use super::wmti_rows::{db_error, row_to_result, RESULT_COLUMNS};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wmti::{SurveyResult, WmtiHistoryEntry};
use crate::ports::SurveyResultStore;

#[derive(Clone)]
pub struct PostgresSurveyResultStore {
    pool: PgPool,
}

impl PostgresSurveyResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SurveyResultStore for PostgresSurveyResultStore {
    async fn record_submission(&self, entry: &WmtiHistoryEntry) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("begin WMTI submission"))?;

        upsert_current(&mut tx, entry.result()).await?;
        insert_history(&mut tx, entry).await?;

        tx.commit()
            .await
            .map_err(db_error("commit WMTI submission"))?;

        Ok(())
    }

    async fn find_current(&self, member_id: &UserId) -> Result<Option<SurveyResult>, DomainError> {
        let sql = format!("SELECT {} FROM wmti_results WHERE member_id = $1", RESULT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(member_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch WMTI result"))?;

        row.as_ref().map(row_to_result).transpose()
    }
}

async fn upsert_current(
    tx: &mut Transaction<'_, Postgres>,
    result: &SurveyResult,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO wmti_results (
            member_id, answers, scores, code, risk_preference, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (member_id) DO UPDATE SET
            answers = EXCLUDED.answers,
            scores = EXCLUDED.scores,
            code = EXCLUDED.code,
            risk_preference = EXCLUDED.risk_preference,
            created_at = EXCLUDED.created_at
        WHERE wmti_results.created_at <= EXCLUDED.created_at
        "#,
    )
    .bind(result.member_id().as_str())
    .bind(Json(result.answers()))
    .bind(Json(result.scores()))
    .bind(result.code().as_str())
    .bind(result.risk_preference().as_str())
    .bind(result.created_at().as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(db_error("upsert WMTI result"))?;

    Ok(())
}

async fn insert_history(
    tx: &mut Transaction<'_, Postgres>,
    entry: &WmtiHistoryEntry,
) -> Result<(), DomainError> {
    let result = entry.result();
    sqlx::query(
        r#"
        INSERT INTO wmti_history (
            id, member_id, answers, scores, code, risk_preference, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(entry.id().as_uuid())
    .bind(result.member_id().as_str())
    .bind(Json(result.answers()))
    .bind(Json(result.scores()))
    .bind(result.code().as_str())
    .bind(result.risk_preference().as_str())
    .bind(result.created_at().as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(db_error("append WMTI history"))?;

    Ok(())
}
