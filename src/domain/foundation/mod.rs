//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, authentication types, event plumbing
//! and the error model shared by every feature module.

mod auth;
mod command;
mod errors;
mod events;
mod ids;
mod ownership;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata};
pub use ids::{UserId, WmtiHistoryId};
pub use ownership::OwnedByUser;
pub use timestamp::Timestamp;
