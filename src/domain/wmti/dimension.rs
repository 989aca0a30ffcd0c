//! The four WMTI axes and the item layout of the questionnaire.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::answers::SurveyAnswers;

/// Number of questionnaire items scored per dimension.
pub const ITEMS_PER_DIMENSION: usize = 5;

/// One of the four polar axes composing a WMTI code.
///
/// Order matters: it is both the order of item groups in the answer
/// vector and the order of letters in the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// A / I axis, items 1-5.
    A,
    /// P / B axis, items 6-10.
    P,
    /// M / W axis, items 11-15. Drives the risk preference.
    M,
    /// L / C axis, items 16-20.
    L,
}

impl Dimension {
    /// All dimensions in code order.
    pub const ALL: [Dimension; 4] = [Dimension::A, Dimension::P, Dimension::M, Dimension::L];

    /// Zero-based position of this dimension in the code.
    pub fn index(self) -> usize {
        match self {
            Dimension::A => 0,
            Dimension::P => 1,
            Dimension::M => 2,
            Dimension::L => 3,
        }
    }

    /// Letter chosen when the first-pole score is at least 50.
    pub fn first_pole(self) -> char {
        match self {
            Dimension::A => 'A',
            Dimension::P => 'P',
            Dimension::M => 'M',
            Dimension::L => 'L',
        }
    }

    /// Letter chosen when the first-pole score is below 50.
    pub fn second_pole(self) -> char {
        match self {
            Dimension::A => 'I',
            Dimension::P => 'B',
            Dimension::M => 'W',
            Dimension::L => 'C',
        }
    }

    /// Returns true if `letter` belongs to this dimension's alphabet.
    pub fn accepts(self, letter: char) -> bool {
        letter == self.first_pole() || letter == self.second_pole()
    }

    /// Returns this dimension's slice of the answer vector.
    pub fn items(self, answers: &SurveyAnswers) -> &[u8] {
        let start = self.index() * ITEMS_PER_DIMENSION;
        &answers.as_slice()[start..start + ITEMS_PER_DIMENSION]
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first_pole(), self.second_pole())
    }
}

/// Which pole a questionnaire item measures agreement with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Agreement counts toward the first pole.
    Forward,
    /// Agreement counts toward the second pole (reverse-keyed item).
    Reverse,
}

impl Polarity {
    /// Polarity of the item at `position` (0-based) within its group.
    ///
    /// Even positions are forward-keyed, odd positions reverse-keyed.
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            Polarity::Forward
        } else {
            Polarity::Reverse
        }
    }
}
