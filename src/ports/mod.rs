//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SurveyResultStore` - current result per member (upsert)
//! - `WmtiHistoryStore` - append-only submission history
//! - `SessionValidator` - bearer token → current member
//! - `EventPublisher` - domain event publication

mod event_publisher;
mod session_validator;
mod survey_result_store;
mod wmti_history_store;

pub use event_publisher::EventPublisher;
pub use session_validator::SessionValidator;
pub use survey_result_store::SurveyResultStore;
pub use wmti_history_store::WmtiHistoryStore;
