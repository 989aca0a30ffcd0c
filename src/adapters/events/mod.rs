//! Event adapters - implementations of `EventPublisher`.

mod in_memory;

pub use in_memory::{InMemoryEventBus, DEFAULT_RETAINED_EVENTS};
