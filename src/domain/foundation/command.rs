//! Command infrastructure for CQRS handlers.
//!
//! `CommandMetadata` carries the acting member plus correlation context
//! through a command and onto the events it emits.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Metadata context for command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The member executing this command.
    pub user_id: UserId,

    /// Links related operations across a single request.
    correlation_id: String,
}

impl CommandMetadata {
    /// Creates metadata with a fresh correlation ID.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: Uuid::new_v4().to_string(),
        }
    }

    /// Builder: Use an upstream correlation ID (e.g. the request id).
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = id.into();
        self
    }

    /// The correlation ID, stable for the lifetime of this metadata.
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }
}
