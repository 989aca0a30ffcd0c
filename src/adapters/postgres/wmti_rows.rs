//! Row mapping shared by the WMTI PostgreSQL adapters.

use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{Decode, Postgres, Row, Type};

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::wmti::{DimensionScores, RiskPreference, SurveyAnswers, SurveyResult, WmtiCode};

/// Columns every WMTI result row carries, in select order.
pub(super) const RESULT_COLUMNS: &str =
    "member_id, answers, scores, code, risk_preference, created_at";

pub(super) fn db_error(action: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| DomainError::database(format!("Failed to {}: {}", action, e))
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

pub(super) fn row_to_result(row: &PgRow) -> Result<SurveyResult, DomainError> {
    let member_id: String = column(row, "member_id")?;
    let Json(answers): Json<SurveyAnswers> = column(row, "answers")?;
    let Json(scores): Json<DimensionScores> = column(row, "scores")?;
    let code: String = column(row, "code")?;
    let risk_preference: String = column(row, "risk_preference")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;

    Ok(SurveyResult::reconstitute(
        UserId::new(member_id)
            .map_err(|e| DomainError::database(format!("Invalid member_id: {}", e)))?,
        answers,
        scores,
        code.parse::<WmtiCode>()
            .map_err(|e| DomainError::database(format!("Invalid code: {}", e)))?,
        risk_preference
            .parse::<RiskPreference>()
            .map_err(|e| DomainError::database(format!("Invalid risk_preference: {}", e)))?,
        Timestamp::from_datetime(created_at),
    ))
}

pub(super) fn row_id(row: &PgRow) -> Result<uuid::Uuid, DomainError> {
    column(row, "id")
}
