//! Mapping raw judgment scores to a Win/Tie/Loss outcome
//!
//! Every mapper is seen from subject A's side: `Win` means A was preferred.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EloError;

/// Comparative scores at or above this value prefer subject B.
pub const COMPARATIVE_LOSS_THRESHOLD: i64 = 60;

/// Comparative scores at or above this value (and below the loss threshold) are a tie.
pub const COMPARATIVE_TIE_THRESHOLD: i64 = 40;

/// Result of a single judgment from subject A's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

impl Outcome {
    /// Actual score used by the Elo update (1 for win, 0.5 for tie, 0 for loss)
    pub fn score(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Tie => 0.5,
            Outcome::Loss => 0.0,
        }
    }

    /// The same judgment seen from subject B's side.
    pub fn reversed(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// Map a single CCR score (e.g. 0-100) comparing A to B.
///
/// High scores mean B looked better: `>= 60` is a loss for A, `40..60` a tie,
/// anything lower a win. Values outside the nominal range are not rejected.
pub fn from_comparative_score(score: i64) -> Outcome {
    if score >= COMPARATIVE_LOSS_THRESHOLD {
        Outcome::Loss
    } else if score >= COMPARATIVE_TIE_THRESHOLD {
        Outcome::Tie
    } else {
        Outcome::Win
    }
}

/// Map one score of a paired-comparative session.
///
/// Uses the same thresholds as [`from_comparative_score`].
pub fn from_paired_comparative_score(score: i64) -> Outcome {
    from_comparative_score(score)
}

/// Map two independent ACR scores, one per subject.
pub fn from_absolute_scores(score_a: i64, score_b: i64) -> Outcome {
    match score_a.cmp(&score_b) {
        std::cmp::Ordering::Less => Outcome::Loss,
        std::cmp::Ordering::Equal => Outcome::Tie,
        std::cmp::Ordering::Greater => Outcome::Win,
    }
}

/// Map a signed score difference (`score_a - score_b`).
pub fn from_signed_difference(diff: i64) -> Outcome {
    from_absolute_scores(diff, 0)
}

/// Which single-value mapper a corpus of scores should go through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ScoreProtocol {
    /// One CCR score per judgment
    #[default]
    #[serde(rename = "ccr")]
    Comparative,
    /// One score per judgment from a paired-comparative session
    #[serde(rename = "pair-ccr")]
    PairedComparative,
    /// One signed difference per judgment
    #[serde(rename = "diff")]
    SignedDifference,
}

impl ScoreProtocol {
    /// Map a score under this protocol.
    pub fn outcome(self, score: i64) -> Outcome {
        match self {
            ScoreProtocol::Comparative => from_comparative_score(score),
            ScoreProtocol::PairedComparative => from_paired_comparative_score(score),
            ScoreProtocol::SignedDifference => from_signed_difference(score),
        }
    }

    /// Short name used in config files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreProtocol::Comparative => "ccr",
            ScoreProtocol::PairedComparative => "pair-ccr",
            ScoreProtocol::SignedDifference => "diff",
        }
    }
}

impl fmt::Display for ScoreProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScoreProtocol {
    type Err = EloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ccr" | "comparative" => Ok(ScoreProtocol::Comparative),
            "pair-ccr" | "pair" | "paired" => Ok(ScoreProtocol::PairedComparative),
            "diff" | "difference" => Ok(ScoreProtocol::SignedDifference),
            other => Err(EloError::InvalidParameter(format!(
                "unknown score protocol '{}' (expected ccr, pair-ccr or diff)",
                other
            ))),
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
