//! Axum router configuration for WMTI endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    delete_history_entry, get_current_result, get_history_entry, list_history, submit_survey,
    WmtiAppState,
};

/// Create the WMTI API router.
///
/// # Routes (all require authentication)
/// - `POST /results` - Submit answers, returns code and risk preference
/// - `GET /results/current` - Current result
/// - `GET /history` - History, newest first
/// - `GET /history/:id` - One history entry
/// - `DELETE /history/:id` - Delete one history entry
pub fn wmti_routes() -> Router<WmtiAppState> {
    Router::new()
        .route("/results", post(submit_survey))
        .route("/results/current", get(get_current_result))
        .route("/history", get(list_history))
        .route(
            "/history/:id",
            get(get_history_entry).delete(delete_history_entry),
        )
}

/// Create the WMTI module router, mounted at `/wmti`.
pub fn wmti_router() -> Router<WmtiAppState> {
    Router::new().nest("/wmti", wmti_routes())
}
