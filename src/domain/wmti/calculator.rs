//! WMTI scoring: answer vector → dimension scores → code.
//!
//! # Normalization
//!
//! Each dimension owns five consecutive items. Items at even positions in
//! the group are forward-keyed and contribute their raw value; items at odd
//! positions are reverse-keyed and contribute `MIN + MAX - value`. The keyed
//! sum `s` lies in `[5, 25]` and maps linearly onto the first pole:
//!
//! ```text
//! first  = (s - 5) / 20 * 100
//! second = 100 - first
//! ```
//!
//! Every score is therefore a multiple of 5 and each pole pair sums to
//! exactly 100. A first-pole score of exactly 50 selects the first pole.

use super::answers::{validate_answers, SurveyAnswers, MAX_ANSWER, MIN_ANSWER};
use super::code::WmtiCode;
use super::dimension::{Dimension, Polarity, ITEMS_PER_DIMENSION};
use super::scores::DimensionScores;
use crate::domain::foundation::DomainError;

/// Scores and code computed from one answer vector.
#[derive(Debug, Clone, PartialEq)]
pub struct WmtiOutcome {
    pub scores: DimensionScores,
    pub code: WmtiCode,
}

/// Computes the dimension scores and code for validated answers.
pub fn calculate(answers: &SurveyAnswers) -> WmtiOutcome {
    let [a, p, m, l] = Dimension::ALL.map(|dim| first_pole_percentage(dim.items(answers)));
    // Keyed sums are bounded by the answer range, so every value is in [0, 100].
    let scores = DimensionScores::from_bounded(a, p, m, l);
    let code = WmtiCode::from_scores(&scores);

    WmtiOutcome { scores, code }
}

/// Validates a raw answer vector, then scores it.
pub fn calculate_raw(raw: &[i32]) -> Result<WmtiOutcome, DomainError> {
    let answers = validate_answers(raw)?;
    Ok(calculate(&answers))
}

fn keyed_value(position: usize, answer: u8) -> u32 {
    let keyed = match Polarity::for_position(position) {
        Polarity::Forward => answer,
        Polarity::Reverse => MIN_ANSWER + MAX_ANSWER - answer,
    };
    u32::from(keyed)
}

fn first_pole_percentage(group: &[u8]) -> f64 {
    let keyed_sum: u32 = group
        .iter()
        .enumerate()
        .map(|(position, &answer)| keyed_value(position, answer))
        .sum();

    let floor = ITEMS_PER_DIMENSION as u32 * u32::from(MIN_ANSWER);
    let span = ITEMS_PER_DIMENSION as u32 * u32::from(MAX_ANSWER - MIN_ANSWER);

    f64::from(keyed_sum - floor) * 100.0 / f64::from(span)
}
