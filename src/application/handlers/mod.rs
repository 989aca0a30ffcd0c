//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod wmti;

pub use wmti::{
    DeleteHistoryEntryCommand, DeleteHistoryEntryHandler, GetCurrentResultHandler,
    GetCurrentResultQuery, GetHistoryEntryHandler, GetHistoryEntryQuery, ListHistoryHandler,
    ListHistoryQuery, SubmitSurveyCommand, SubmitSurveyHandler, SubmitSurveyResult,
};
