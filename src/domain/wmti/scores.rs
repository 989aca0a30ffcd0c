//! Per-dimension percentage scores.

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use crate::domain::foundation::ValidationError;

/// Percentage of agreement with each dimension's first pole.
///
/// Each value lies in `[0, 100]`; the second pole's score is always
/// `100 - first`, so a pole pair sums to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScores")]
pub struct DimensionScores {
    a: f64,
    p: f64,
    m: f64,
    l: f64,
}

/// Unchecked wire shape of [`DimensionScores`].
#[derive(Deserialize)]
struct RawScores {
    a: f64,
    p: f64,
    m: f64,
    l: f64,
}

impl TryFrom<RawScores> for DimensionScores {
    type Error = ValidationError;

    fn try_from(raw: RawScores) -> Result<Self, Self::Error> {
        Self::from_first_poles(raw.a, raw.p, raw.m, raw.l)
    }
}

/// Both pole percentages of one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolePair {
    pub dimension: Dimension,
    pub first: f64,
    pub second: f64,
}

impl PolePair {
    /// Letter of the dominant pole; exactly 50 resolves to the first pole.
    pub fn dominant_letter(&self) -> char {
        if self.first >= 50.0 {
            self.dimension.first_pole()
        } else {
            self.dimension.second_pole()
        }
    }
}

impl DimensionScores {
    /// Builds scores from first-pole percentages in A, P, M, L order.
    pub fn from_first_poles(a: f64, p: f64, m: f64, l: f64) -> Result<Self, ValidationError> {
        for (dim, value) in Dimension::ALL.iter().zip([a, p, m, l]) {
            if !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::out_of_range(
                    format!("score.{}", dim.first_pole()),
                    0,
                    100,
                    value.round() as i32,
                ));
            }
        }
        Ok(Self { a, p, m, l })
    }

    pub(super) fn from_bounded(a: f64, p: f64, m: f64, l: f64) -> Self {
        Self { a, p, m, l }
    }

    /// First-pole percentage of `dimension`.
    pub fn first_pole(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::A => self.a,
            Dimension::P => self.p,
            Dimension::M => self.m,
            Dimension::L => self.l,
        }
    }

    /// Second-pole percentage of `dimension`.
    pub fn second_pole(&self, dimension: Dimension) -> f64 {
        100.0 - self.first_pole(dimension)
    }

    /// Both pole percentages of `dimension`.
    pub fn pole_pair(&self, dimension: Dimension) -> PolePair {
        PolePair {
            dimension,
            first: self.first_pole(dimension),
            second: self.second_pole(dimension),
        }
    }

    /// All four pole pairs in code order.
    pub fn pole_pairs(&self) -> [PolePair; 4] {
        Dimension::ALL.map(|d| self.pole_pair(d))
    }
}
