//! HTTP middleware for axum.
//!
//! - `auth` - Authentication middleware and extractors
//! - `request_id` - `x-request-id` assignment and propagation

pub mod auth;
pub mod request_id;

pub use auth::{auth_middleware, AuthRejection, AuthState, RequireAuth};
pub use request_id::{propagate_request_id_layer, set_request_id_layer, REQUEST_ID_HEADER};
