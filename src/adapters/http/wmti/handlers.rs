//! HTTP handlers for WMTI endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use super::dto::{
    HistoryEntryResponse, HistoryListResponse, SubmitSurveyRequest, SubmitSurveyResponse,
    SurveyResultResponse,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::wmti::{
    DeleteHistoryEntryCommand, DeleteHistoryEntryHandler, GetCurrentResultHandler,
    GetCurrentResultQuery, GetHistoryEntryHandler, GetHistoryEntryQuery, ListHistoryHandler,
    ListHistoryQuery, SubmitSurveyCommand, SubmitSurveyHandler,
};
use crate::adapters::http::middleware::REQUEST_ID_HEADER;
use crate::domain::foundation::{AuthenticatedUser, CommandMetadata, WmtiHistoryId};
use crate::ports::{EventPublisher, SurveyResultStore, WmtiHistoryStore};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for WMTI routes.
#[derive(Clone)]
pub struct WmtiAppState {
    pub results: Arc<dyn SurveyResultStore>,
    pub history: Arc<dyn WmtiHistoryStore>,
    pub event_publisher: Arc<dyn EventPublisher>,
}

impl WmtiAppState {
    pub fn new(
        results: Arc<dyn SurveyResultStore>,
        history: Arc<dyn WmtiHistoryStore>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            results,
            history,
            event_publisher,
        }
    }

    pub fn submit_survey_handler(&self) -> SubmitSurveyHandler {
        SubmitSurveyHandler::new(self.results.clone(), self.event_publisher.clone())
    }

    pub fn get_current_result_handler(&self) -> GetCurrentResultHandler {
        GetCurrentResultHandler::new(self.results.clone())
    }

    pub fn list_history_handler(&self) -> ListHistoryHandler {
        ListHistoryHandler::new(self.history.clone())
    }

    pub fn get_history_entry_handler(&self) -> GetHistoryEntryHandler {
        GetHistoryEntryHandler::new(self.history.clone())
    }

    pub fn delete_history_entry_handler(&self) -> DeleteHistoryEntryHandler {
        DeleteHistoryEntryHandler::new(self.history.clone())
    }
}

/// Command metadata correlated with the request id, when one was assigned.
fn command_metadata(user: &AuthenticatedUser, headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new(user.id().clone());
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => metadata.with_correlation_id(request_id),
        None => metadata,
    }
}

fn parse_history_id(raw: &str) -> Result<WmtiHistoryId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation("id", format!("'{}' is not a valid history id", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/wmti/results - Score and record a questionnaire
pub async fn submit_survey(
    State(state): State<WmtiAppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    body: Result<Json<SubmitSurveyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::validation("body", e.body_text()))?;

    let cmd = SubmitSurveyCommand {
        member_id: user.id().clone(),
        answers: request.answers,
    };
    let metadata = command_metadata(&user, &headers);

    let out = state.submit_survey_handler().handle(cmd, metadata).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitSurveyResponse::from(&out.result)),
    ))
}

/// DELETE /api/wmti/history/:id - Delete one of the member's history entries
pub async fn delete_history_entry(
    State(state): State<WmtiAppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteHistoryEntryCommand {
        member_id: user.id().clone(),
        history_id: parse_history_id(&id)?,
    };
    let metadata = command_metadata(&user, &headers);

    state.delete_history_entry_handler().handle(cmd, metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/wmti/results/current - The member's current result
pub async fn get_current_result(
    State(state): State<WmtiAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetCurrentResultQuery {
        member_id: user.id().clone(),
    };

    let result = state.get_current_result_handler().handle(query).await?;

    Ok(Json(SurveyResultResponse::from(&result)))
}

/// GET /api/wmti/history - The member's history, newest first
pub async fn list_history(
    State(state): State<WmtiAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListHistoryQuery {
        member_id: user.id().clone(),
    };

    let entries = state.list_history_handler().handle(query).await?;

    Ok(Json(HistoryListResponse::from(entries)))
}

/// GET /api/wmti/history/:id - One history entry
pub async fn get_history_entry(
    State(state): State<WmtiAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetHistoryEntryQuery {
        member_id: user.id().clone(),
        history_id: parse_history_id(&id)?,
    };

    let entry = state.get_history_entry_handler().handle(query).await?;

    Ok(Json(HistoryEntryResponse::from(&entry)))
}
