use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Qualitative band assigned to a score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    Detrimental,
    Incongruent,
    NoEffect,
    Congruent,
    Beneficial,
    HighlyBeneficial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Neutral,
    Strong,
}

/// Classifies a score into its band.
///
/// Total over `0..=99`; every other value is a `Domain` error. The band
/// boundaries are part of the tool's contract and must not move.
pub fn interpret(score: u8) -> Result<Interpretation, CoreError> {
    let interpretation = match score {
        0..=24 => Interpretation::Detrimental,
        25..=44 => Interpretation::Incongruent,
        45..=54 => Interpretation::NoEffect,
        55..=74 => Interpretation::Congruent,
        75..=89 => Interpretation::Beneficial,
        90..=99 => Interpretation::HighlyBeneficial,
        out => return Err(CoreError::Domain(out)),
    };
    Ok(interpretation)
}

impl Interpretation {
    /// The user-facing label for this band. The dash is U+2013.
    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::Detrimental => "Weak – Detrimental",
            Interpretation::Incongruent => "Weak – Incongruent",
            Interpretation::NoEffect => "Neutral – No effect",
            Interpretation::Congruent => "Strong – Congruent/Neutral",
            Interpretation::Beneficial => "Strong – Beneficial",
            Interpretation::HighlyBeneficial => "Strong – Highly Beneficial",
        }
    }

    pub fn strength(&self) -> Strength {
        match self {
            Interpretation::Detrimental | Interpretation::Incongruent => Strength::Weak,
            Interpretation::NoEffect => Strength::Neutral,
            Interpretation::Congruent
            | Interpretation::Beneficial
            | Interpretation::HighlyBeneficial => Strength::Strong,
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
