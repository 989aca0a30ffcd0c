//! GetCurrentResultHandler - Query handler for a member's current result.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::wmti::SurveyResult;
use crate::ports::SurveyResultStore;

/// Query for the member's current result.
#[derive(Debug, Clone)]
pub struct GetCurrentResultQuery {
    pub member_id: UserId,
}

pub struct GetCurrentResultHandler {
    results: Arc<dyn SurveyResultStore>,
}

impl GetCurrentResultHandler {
    pub fn new(results: Arc<dyn SurveyResultStore>) -> Self {
        Self { results }
    }

    /// # Errors
    ///
    /// - `SurveyResultNotFound` if the member has never submitted
    pub async fn handle(&self, query: GetCurrentResultQuery) -> Result<SurveyResult, DomainError> {
        self.results
            .find_current(&query.member_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SurveyResultNotFound,
                    "No WMTI result found for this member",
                )
                .with_detail("member_id", query.member_id.to_string())
            })
    }
}
