//! EventPublisher port - Interface for publishing domain events.
//!
//! The domain publishes events without knowing about the underlying
//! transport. Publication of `wmti.result_recorded.v1` happens after the
//! result is durably stored and its failure never fails the submission.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;
}
