//! Application router: health check, authenticated `/api` tree, and the
//! cross-cutting tower layers.

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::warn;

use super::middleware::{
    auth_middleware, propagate_request_id_layer, set_request_id_layer, AuthState,
    REQUEST_ID_HEADER,
};
use super::wmti::{wmti_router, WmtiAppState};
use crate::config::ServerConfig;

/// Builds the full HTTP application.
///
/// # Routes
/// - `GET /health` - Liveness check, no authentication
/// - `/api/wmti/...` - WMTI endpoints, bearer token required
///
/// Every response carries an `x-request-id`.
pub fn app_router(state: WmtiAppState, validator: AuthState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .nest("/api", wmti_router())
        .with_state(state)
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
}

async fn health() -> &'static str {
    "ok"
}

fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    CorsLayer::new()
        .allow_origin(allowed_origins(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            request_id.clone(),
        ])
        .expose_headers([request_id])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::adapters::auth::MockSessionValidator;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::storage::InMemoryWmtiStore;

    fn app(server: &ServerConfig) -> Router {
        let store = Arc::new(InMemoryWmtiStore::new());
        let state = WmtiAppState::new(store.clone(), store, Arc::new(InMemoryEventBus::new()));
        let validator: AuthState = Arc::new(MockSessionValidator::new());
        app_router(state, validator, server)
    }

    #[tokio::test]
    async fn health_needs_no_token() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn api_routes_require_a_token() {
        let response = app(&ServerConfig::default())
            .oneshot(
                Request::get("/api/wmti/results/current")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn configured_origin_is_echoed_on_preflight() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let response = app(&server)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/wmti/results")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/wmti/results")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn invalid_origins_are_dropped_from_the_allow_list() {
        let allowed = allowed_origins(&[
            "http://ok.example".to_string(),
            "bad\norigin".to_string(),
        ]);

        assert_eq!(allowed, vec![HeaderValue::from_static("http://ok.example")]);
    }

    #[tokio::test]
    async fn invalid_origin_entry_does_not_widen_cors() {
        let server = ServerConfig {
            cors_origins: Some("http://ok.example, bad\norigin".to_string()),
            ..Default::default()
        };

        let allowed = app(&server)
            .oneshot(preflight("http://ok.example"))
            .await
            .unwrap();
        let rejected = app(&server)
            .oneshot(preflight("http://evil.example"))
            .await
            .unwrap();

        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://ok.example"
        );
        assert!(rejected
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let generated = app(&ServerConfig::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let forwarded = app(&ServerConfig::default())
            .oneshot(
                Request::get("/health")
                    .header(REQUEST_ID_HEADER, "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(!generated.headers()[REQUEST_ID_HEADER].is_empty());
        assert_eq!(forwarded.headers()[REQUEST_ID_HEADER], "req-123");
    }
}
