//! Survey result entity.

use serde::{Deserialize, Serialize};

use super::answers::SurveyAnswers;
use super::calculator::calculate;
use super::code::WmtiCode;
use super::risk_preference::RiskPreference;
use super::scores::DimensionScores;
use crate::domain::foundation::{OwnedByUser, Timestamp, UserId};

/// A scored WMTI submission owned by one member.
///
/// # Invariants
///
/// - `scores` and `code` are the output of `calculate(answers)`
/// - `risk_preference` is `RiskPreference::classify(scores)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResult {
    member_id: UserId,
    answers: SurveyAnswers,
    scores: DimensionScores,
    code: WmtiCode,
    risk_preference: RiskPreference,
    created_at: Timestamp,
}

impl SurveyResult {
    /// Scores `answers` and stamps the result with the current time.
    pub fn record(member_id: UserId, answers: SurveyAnswers) -> Self {
        Self::record_at(member_id, answers, Timestamp::now())
    }

    /// Scores `answers` with an explicit creation time.
    pub fn record_at(member_id: UserId, answers: SurveyAnswers, created_at: Timestamp) -> Self {
        let outcome = calculate(&answers);
        let risk_preference = RiskPreference::classify(&outcome.scores);

        Self {
            member_id,
            answers,
            scores: outcome.scores,
            code: outcome.code,
            risk_preference,
            created_at,
        }
    }

    /// Reconstitute a result from persistence (no recomputation).
    pub fn reconstitute(
        member_id: UserId,
        answers: SurveyAnswers,
        scores: DimensionScores,
        code: WmtiCode,
        risk_preference: RiskPreference,
        created_at: Timestamp,
    ) -> Self {
        Self {
            member_id,
            answers,
            scores,
            code,
            risk_preference,
            created_at,
        }
    }

    pub fn member_id(&self) -> &UserId {
        &self.member_id
    }

    pub fn answers(&self) -> &SurveyAnswers {
        &self.answers
    }

    pub fn scores(&self) -> &DimensionScores {
        &self.scores
    }

    pub fn code(&self) -> &WmtiCode {
        &self.code
    }

    pub fn risk_preference(&self) -> RiskPreference {
        self.risk_preference
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl OwnedByUser for SurveyResult {
    fn owner_id(&self) -> &UserId {
        &self.member_id
    }
}
