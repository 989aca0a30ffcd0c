//! WMTI command and query handlers.
//!
//! Together these implement the survey result lifecycle: submit, read the
//! current result, and list, read or delete history entries.

mod delete_history_entry;
mod get_current_result;
mod get_history_entry;
mod list_history;
mod submit_survey;

#[cfg(test)]
pub(crate) mod test_support;

pub use delete_history_entry::{DeleteHistoryEntryCommand, DeleteHistoryEntryHandler};
pub use get_current_result::{GetCurrentResultHandler, GetCurrentResultQuery};
pub use get_history_entry::{GetHistoryEntryHandler, GetHistoryEntryQuery};
pub use list_history::{ListHistoryHandler, ListHistoryQuery};
pub use submit_survey::{SubmitSurveyCommand, SubmitSurveyHandler, SubmitSurveyResult};
