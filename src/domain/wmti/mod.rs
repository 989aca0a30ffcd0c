//! WMTI module - Investor-personality survey scoring.
//!
//! Turns a 20-item Likert questionnaire into four dimension scores, a
//! four-letter code and a risk preference, and models the member-owned
//! current result and its history.
//!
//! - `answers` - answer vector validation
//! - `calculator` - scores and code
//! - `risk_preference` - five-band classification on the M/W axis
//! - `result` / `history` - stored outcomes

mod answers;
mod calculator;
mod code;
mod dimension;
mod events;
mod history;
mod result;
mod risk_preference;
mod scores;

pub use answers::{validate_answers, SurveyAnswers, ANSWER_COUNT, MAX_ANSWER, MIN_ANSWER};
pub use calculator::{calculate, calculate_raw, WmtiOutcome};
pub use code::WmtiCode;
pub use dimension::{Dimension, Polarity, ITEMS_PER_DIMENSION};
pub use events::WmtiResultRecorded;
pub use history::WmtiHistoryEntry;
pub use result::SurveyResult;
pub use risk_preference::RiskPreference;
pub use scores::{DimensionScores, PolePair};
