//! The four-letter WMTI code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dimension::Dimension;
use super::scores::DimensionScores;
use crate::domain::foundation::ValidationError;

/// Four-letter investor-personality code, one letter per dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WmtiCode(String);

impl WmtiCode {
    /// Derives the code by taking the dominant pole of each dimension.
    pub fn from_scores(scores: &DimensionScores) -> Self {
        Self(
            scores
                .pole_pairs()
                .iter()
                .map(|pair| pair.dominant_letter())
                .collect(),
        )
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the letter chosen for `dimension`.
    pub fn letter(&self, dimension: Dimension) -> char {
        // Construction guarantees four ASCII letters.
        self.0.as_bytes()[dimension.index()] as char
    }
}

impl FromStr for WmtiCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.chars().collect();
        if letters.len() != Dimension::ALL.len() {
            return Err(ValidationError::invalid_format(
                "wmti_code",
                format!("expected 4 letters, got {:?}", s),
            ));
        }
        for (dim, letter) in Dimension::ALL.iter().zip(&letters) {
            if !dim.accepts(*letter) {
                return Err(ValidationError::invalid_format(
                    "wmti_code",
                    format!("'{}' is not a valid {} letter", letter, dim),
                ));
            }
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for WmtiCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WmtiCode> for String {
    fn from(code: WmtiCode) -> Self {
        code.0
    }
}

impl fmt::Display for WmtiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_codes() {
        for raw in ["APML", "IBWC", "ABML", "IPWL"] {
            let code: WmtiCode = raw.parse().unwrap();
            assert_eq!(code.as_str(), raw);
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("APM".parse::<WmtiCode>().is_err());
        assert!("APMLC".parse::<WmtiCode>().is_err());
        assert!("".parse::<WmtiCode>().is_err());
    }

    #[test]
    fn rejects_letters_in_wrong_position() {
        assert!("PAML".parse::<WmtiCode>().is_err());
        assert!("apml".parse::<WmtiCode>().is_err());
        assert!("APMX".parse::<WmtiCode>().is_err());
    }

    #[test]
    fn letter_reads_by_dimension() {
        let code: WmtiCode = "IBML".parse().unwrap();
        assert_eq!(code.letter(Dimension::A), 'I');
        assert_eq!(code.letter(Dimension::P), 'B');
        assert_eq!(code.letter(Dimension::M), 'M');
        assert_eq!(code.letter(Dimension::L), 'L');
    }

    #[test]
    fn from_scores_picks_dominant_poles() {
        let scores = DimensionScores::from_first_poles(20.0, 80.0, 50.0, 45.0).unwrap();
        assert_eq!(WmtiCode::from_scores(&scores).as_str(), "IPMC");
    }

    #[test]
    fn serde_round_trip_validates() {
        let code: WmtiCode = serde_json::from_str("\"APWC\"").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"APWC\"");
        assert!(serde_json::from_str::<WmtiCode>("\"ZZZZ\"").is_err());
    }
}
