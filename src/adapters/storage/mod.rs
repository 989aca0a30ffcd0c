//! Storage adapters.
//!
//! - `InMemoryWmtiStore` - in-process current results and history

mod in_memory_wmti_store;

pub use in_memory_wmti_store::InMemoryWmtiStore;
