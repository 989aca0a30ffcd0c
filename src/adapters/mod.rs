//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session validators (JWT, mock)
//! - `events` - In-memory event bus
//! - `http` - axum routes, middleware, and error mapping
//! - `postgres` - PostgreSQL survey result and history stores
//! - `storage` - In-memory stores for tests

pub mod auth;
pub mod events;
pub mod http;
pub mod postgres;
pub mod storage;

pub use auth::{JwtConfig, JwtSessionValidator, MockSessionValidator};
pub use events::InMemoryEventBus;
pub use postgres::{PostgresSurveyResultStore, PostgresWmtiHistoryStore};
pub use storage::InMemoryWmtiStore;
