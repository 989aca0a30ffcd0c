//! In-memory event bus.
//!
//! Keeps published envelopes in process and logs each one. Used by the
//! binary when no external broker is configured and by tests for
//! assertions on published events.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Default number of envelopes retained before the oldest are dropped.
pub const DEFAULT_RETAINED_EVENTS: usize = 1_000;

/// In-process event bus with bounded retention.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
/// assert!(bus.has_event("wmti.result_recorded.v1").await);
/// ```
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
    capacity: usize,
    fail_publish: AtomicBool,
}

impl InMemoryEventBus {
    /// Creates a bus retaining up to [`DEFAULT_RETAINED_EVENTS`] envelopes.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RETAINED_EVENTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            published: RwLock::new(Vec::new()),
            capacity: capacity.max(1),
            fail_publish: AtomicBool::new(false),
        }
    }

    /// Makes subsequent publishes fail, for exercising best-effort callers.
    pub fn set_failing(&self, failing: bool) {
        self.fail_publish.store(failing, Ordering::SeqCst);
    }

    // === Test Helpers ===

    /// Returns all retained events, oldest first.
    pub async fn published_events(&self) -> Vec<EventEnvelope> {
        self.published.read().await.clone()
    }

    /// Returns retained events of a specific type.
    pub async fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published
            .read()
            .await
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    pub async fn event_count(&self) -> usize {
        self.published.read().await.len()
    }

    pub async fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .await
            .iter()
            .any(|e| e.event_type == event_type)
    }

}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.fail_publish.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Event bus unavailable",
            ));
        }

        debug!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            "Event published"
        );

        let mut published = self.published.write().await;
        if published.len() >= self.capacity {
            let overflow = published.len() + 1 - self.capacity;
            published.drain(..overflow);
        }
        published.push(event);
        Ok(())
    }
}
