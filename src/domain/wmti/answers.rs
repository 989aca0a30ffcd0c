//! Survey answer vector and its validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Number of questions in the WMTI questionnaire.
pub const ANSWER_COUNT: usize = 20;

/// Lowest value on the Likert scale.
pub const MIN_ANSWER: u8 = 1;

/// Highest value on the Likert scale.
pub const MAX_ANSWER: u8 = 5;

/// A validated, immutable WMTI answer vector.
///
/// Holds exactly [`ANSWER_COUNT`] values, each in `MIN_ANSWER..=MAX_ANSWER`.
/// The only way to build one is [`validate_answers`] (or deserialization,
/// which runs the same checks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct SurveyAnswers([u8; ANSWER_COUNT]);

impl SurveyAnswers {
    /// Returns the answers in questionnaire order.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the answers widened to `i32`, the wire representation.
    pub fn to_vec(&self) -> Vec<i32> {
        self.0.iter().map(|&v| i32::from(v)).collect()
    }
}

impl TryFrom<Vec<i32>> for SurveyAnswers {
    type Error = DomainError;

    fn try_from(raw: Vec<i32>) -> Result<Self, Self::Error> {
        validate_answers(&raw)
    }
}

impl From<SurveyAnswers> for Vec<i32> {
    fn from(answers: SurveyAnswers) -> Self {
        answers.to_vec()
    }
}

impl fmt::Display for SurveyAnswers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", joined.join(","))
    }
}

/// Validates a raw answer vector.
///
/// Fails with `INCOMPLETE_ANSWERS` when the length is not exactly
/// [`ANSWER_COUNT`], and with `ANSWER_OUT_OF_RANGE` for the first value
/// outside `MIN_ANSWER..=MAX_ANSWER`. The length check always wins.
pub fn validate_answers(raw: &[i32]) -> Result<SurveyAnswers, DomainError> {
    if raw.len() != ANSWER_COUNT {
        return Err(DomainError::new(
            ErrorCode::IncompleteAnswers,
            format!(
                "Expected {} answers, got {}",
                ANSWER_COUNT,
                raw.len()
            ),
        )
        .with_detail("expected", ANSWER_COUNT.to_string())
        .with_detail("actual", raw.len().to_string()));
    }

    let mut values = [0u8; ANSWER_COUNT];
    for (index, (&value, slot)) in raw.iter().zip(values.iter_mut()).enumerate() {
        if value < i32::from(MIN_ANSWER) || value > i32::from(MAX_ANSWER) {
            return Err(DomainError::new(
                ErrorCode::AnswerOutOfRange,
                format!(
                    "Answer {} must be between {} and {}, got {}",
                    index + 1,
                    MIN_ANSWER,
                    MAX_ANSWER,
                    value
                ),
            )
            .with_detail("index", index.to_string())
            .with_detail("value", value.to_string()));
        }
        *slot = value as u8;
    }

    Ok(SurveyAnswers(values))
}
