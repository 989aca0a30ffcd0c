//! HTTP DTOs for WMTI endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::wmti::{Dimension, RiskPreference, SurveyResult, WmtiHistoryEntry};

/// Message returned on a successful submission.
pub const SURVEY_COMPLETED_MESSAGE: &str = "WMTI survey completed.";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to submit a completed questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitSurveyRequest {
    pub answers: Vec<i32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitSurveyResponse {
    pub code: String,
    pub risk_preference: RiskPreference,
    pub message: String,
}

impl From<&SurveyResult> for SubmitSurveyResponse {
    fn from(result: &SurveyResult) -> Self {
        Self {
            code: result.code().to_string(),
            risk_preference: result.risk_preference(),
            message: SURVEY_COMPLETED_MESSAGE.to_string(),
        }
    }
}

/// Both pole percentages of one dimension, e.g. `A 60 / I 40`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionScoreResponse {
    pub dimension: String,
    pub first_pole: String,
    pub first_score: f64,
    pub second_pole: String,
    pub second_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResultResponse {
    pub code: String,
    pub answers: Vec<i32>,
    pub scores: Vec<DimensionScoreResponse>,
    pub risk_preference: RiskPreference,
    /// RFC 3339.
    pub created_at: String,
}

impl From<&SurveyResult> for SurveyResultResponse {
    fn from(result: &SurveyResult) -> Self {
        let scores = Dimension::ALL
            .iter()
            .map(|&dim| {
                let pair = result.scores().pole_pair(dim);
                DimensionScoreResponse {
                    dimension: dim.to_string(),
                    first_pole: dim.first_pole().to_string(),
                    first_score: pair.first,
                    second_pole: dim.second_pole().to_string(),
                    second_score: pair.second,
                }
            })
            .collect();

        Self {
            code: result.code().to_string(),
            answers: result.answers().to_vec(),
            scores,
            risk_preference: result.risk_preference(),
            created_at: result.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryResponse {
    pub id: String,
    #[serde(flatten)]
    pub result: SurveyResultResponse,
}

impl From<&WmtiHistoryEntry> for HistoryEntryResponse {
    fn from(entry: &WmtiHistoryEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            result: SurveyResultResponse::from(entry.result()),
        }
    }
}

/// History listing, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryListResponse {
    pub items: Vec<HistoryEntryResponse>,
    pub total: usize,
}

impl From<Vec<WmtiHistoryEntry>> for HistoryListResponse {
    fn from(entries: Vec<WmtiHistoryEntry>) -> Self {
        let items: Vec<HistoryEntryResponse> = entries.iter().map(HistoryEntryResponse::from).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::wmti::validate_answers;

    fn golden_result() -> SurveyResult {
        SurveyResult::record(
            UserId::new("member-1").unwrap(),
            validate_answers(&[5, 5, 5, 5, 5, 1, 1, 1, 1, 1, 3, 3, 3, 3, 3, 5, 1, 5, 1, 5]).unwrap(),
        )
    }

    #[test]
    fn submit_response_carries_code_and_message() {
        let json = serde_json::to_value(SubmitSurveyResponse::from(&golden_result())).unwrap();

        assert_eq!(json["code"], "ABML");
        assert_eq!(json["risk_preference"], "RISK_NEUTRAL");
        assert_eq!(json["message"], SURVEY_COMPLETED_MESSAGE);
    }

    #[test]
    fn result_response_lists_both_poles_per_dimension() {
        let response = SurveyResultResponse::from(&golden_result());

        assert_eq!(response.scores.len(), 4);
        let a = &response.scores[0];
        assert_eq!(a.dimension, "A/I");
        assert_eq!(a.first_score, 60.0);
        assert_eq!(a.second_score, 40.0);
        assert_eq!(response.answers.len(), 20);
    }

    #[test]
    fn history_entry_flattens_result_fields() {
        let entry = WmtiHistoryEntry::from_result(golden_result());
        let json = serde_json::to_value(HistoryEntryResponse::from(&entry)).unwrap();

        assert_eq!(json["id"], entry.id().to_string());
        assert_eq!(json["code"], "ABML");
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn history_list_counts_items() {
        let entries = vec![
            WmtiHistoryEntry::from_result(golden_result()),
            WmtiHistoryEntry::from_result(golden_result()),
        ];
        let list = HistoryListResponse::from(entries);
        assert_eq!(list.total, 2);
    }
}
