//! Letter grades and their point values

use std::fmt;
use std::str::FromStr;

use akademix_core::Number;
use serde::{Deserialize, Serialize};

use crate::GradeError;

/// Credit loads a course may carry
pub const ALLOWED_CREDITS: [i64; 5] = [1, 2, 3, 4, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "E")]
    E,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Grade; 9] = [
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::D,
        Grade::E,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }

    /// Points on the 4.0 scale, exact to one decimal
    pub fn points(self) -> Number {
        let tenths = match self {
            Grade::A => 40,
            Grade::AMinus => 37,
            Grade::BPlus => 33,
            Grade::B => 30,
            Grade::BMinus => 27,
            Grade::CPlus => 23,
            Grade::C => 20,
            Grade::D => 10,
            Grade::E => 0,
        };
        Number::from_decimal(tenths, 1)
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Grade::ALL.iter()
            .copied()
            .find(|g| g.symbol() == wanted)
            .ok_or_else(|| GradeError::UnknownGrade(s.trim().to_string()))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Reject credit loads outside [`ALLOWED_CREDITS`]
pub fn validate_credits(credits: i64) -> Result<u32, GradeError> {
    if ALLOWED_CREDITS.contains(&credits) {
        Ok(credits as u32)
    } else {
        Err(GradeError::InvalidCredits(credits))
    }
}
