//! Risk preference derived from the M/W dimension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dimension::Dimension;
use super::scores::DimensionScores;
use crate::domain::foundation::ValidationError;

/// Investor risk appetite, ordered from most cautious to most aggressive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskPreference {
    /// Capital preservation above all.
    Stability,
    StabilityOriented,
    RiskNeutral,
    Actively,
    /// Seeks high-variance returns.
    Aggressive,
}

impl RiskPreference {
    /// All bands in ascending risk order.
    pub const ALL: [RiskPreference; 5] = [
        RiskPreference::Stability,
        RiskPreference::StabilityOriented,
        RiskPreference::RiskNeutral,
        RiskPreference::Actively,
        RiskPreference::Aggressive,
    ];

    /// Classifies a full score set by its M/W first-pole score.
    pub fn classify(scores: &DimensionScores) -> Self {
        Self::from_m_score(scores.first_pole(Dimension::M))
    }

    /// Determine the band from an M-dimension score (0 - 100)
    /// - Stability: below 20
    /// - StabilityOriented: 20 to below 40
    /// - RiskNeutral: 40 to below 60
    /// - Actively: 60 to below 80
    /// - Aggressive: 80 and above
    ///
    /// Total over `f64`: NaN and negative inputs fall into the lowest band.
    pub fn from_m_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => Self::Aggressive,
            s if s >= 60.0 => Self::Actively,
            s if s >= 40.0 => Self::RiskNeutral,
            s if s >= 20.0 => Self::StabilityOriented,
            _ => Self::Stability,
        }
    }

    /// Wire name, e.g. `STABILITY_ORIENTED`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stability => "STABILITY",
            Self::StabilityOriented => "STABILITY_ORIENTED",
            Self::RiskNeutral => "RISK_NEUTRAL",
            Self::Actively => "ACTIVELY",
            Self::Aggressive => "AGGRESSIVE",
        }
    }
}

impl fmt::Display for RiskPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskPreference {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "risk_preference",
                    format!("unknown risk preference {:?}", s),
                )
            })
    }
}
