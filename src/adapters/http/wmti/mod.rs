//! HTTP adapter for WMTI survey endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::WmtiAppState;
pub use routes::{wmti_router, wmti_routes};
