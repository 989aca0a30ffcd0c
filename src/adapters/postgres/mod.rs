//! PostgreSQL adapters - Database implementations for the WMTI store ports.
//!
//! - `PostgresSurveyResultStore` - current result per member (`wmti_results`)
//! - `PostgresWmtiHistoryStore` - append-only history (`wmti_history`)
//!
//! Schema creation is managed outside this crate; each adapter documents the
//! table it expects.

mod wmti_history_store;
mod wmti_result_store;
mod wmti_rows;

pub use wmti_history_store::PostgresWmtiHistoryStore;
pub use wmti_result_store::PostgresSurveyResultStore;
