//! HTTP adapter (axum).
//!
//! - `error` - Domain error to HTTP response mapping
//! - `middleware` - Bearer token authentication
//! - `router` - Application assembly
//! - `wmti` - Survey scoring and history endpoints

pub mod error;
pub mod middleware;
pub mod router;
pub mod wmti;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use router::app_router;
pub use wmti::{wmti_router, WmtiAppState};
