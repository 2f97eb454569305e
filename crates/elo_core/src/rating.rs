//! Elo rating calculation for a pair of subjects

use serde::{Deserialize, Serialize};

use crate::error::{EloError, Result};
use crate::outcome::{
    from_absolute_scores, from_comparative_score, from_signed_difference, Outcome, ScoreProtocol,
};

/// Default starting Elo for both subjects
pub const DEFAULT_RATING: f64 = 1500.0;

/// Rating gap (in Elo points) that corresponds to 10:1 odds
pub const ELO_SCALE: f64 = 400.0;

/// Tiered K-factor: higher-rated subjects move more slowly.
///
/// Both thresholds are inclusive, so a rating of exactly `high_threshold`
/// already uses `high_k`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KFactorSchedule {
    pub high_threshold: f64,
    pub mid_threshold: f64,
    pub high_k: f64,
    pub mid_k: f64,
    pub base_k: f64,
}

impl KFactorSchedule {
    /// 16 from 2400 up, 24 from 2000 up, 32 below.
    pub const STANDARD: KFactorSchedule = KFactorSchedule {
        high_threshold: 2400.0,
        mid_threshold: 2000.0,
        high_k: 16.0,
        mid_k: 24.0,
        base_k: 32.0,
    };

    /// K-factor for a single rating
    pub fn k_for(&self, rating: f64) -> f64 {
        if rating >= self.high_threshold {
            self.high_k
        } else if rating >= self.mid_threshold {
            self.mid_k
        } else {
            self.base_k
        }
    }

    /// Check a schedule that came from outside (e.g. a config file).
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.high_threshold,
            self.mid_threshold,
            self.high_k,
            self.mid_k,
            self.base_k,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(EloError::InvalidParameter(
                "K-factor schedule values must be finite".to_string(),
            ));
        }
        if self.mid_threshold >= self.high_threshold {
            return Err(EloError::InvalidParameter(format!(
                "K-factor mid threshold {} must be below high threshold {}",
                self.mid_threshold, self.high_threshold
            )));
        }
        if self.high_k <= 0.0 || self.mid_k <= 0.0 || self.base_k <= 0.0 {
            return Err(EloError::InvalidParameter(
                "K-factor values must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for KFactorSchedule {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// K-factor for a rating under the standard 16/24/32 schedule
pub fn k_factor(rating: f64) -> f64 {
    KFactorSchedule::STANDARD.k_for(rating)
}

/// Expected score of a subject rated `rating_a` against one rated `rating_b`
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((rating_b - rating_a) / ELO_SCALE))
}

/// Current ratings of subject A and subject B
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RatingPair {
    pub rating_a: f64,
    pub rating_b: f64,
}

impl Default for RatingPair {
    fn default() -> Self {
        Self::new(DEFAULT_RATING, DEFAULT_RATING)
    }
}

impl RatingPair {
    pub fn new(rating_a: f64, rating_b: f64) -> Self {
        Self { rating_a, rating_b }
    }

    /// Like [`RatingPair::new`], but rejects NaN and infinite ratings.
    pub fn try_new(rating_a: f64, rating_b: f64) -> Result<Self> {
        if !rating_a.is_finite() || !rating_b.is_finite() {
            return Err(EloError::InvalidParameter(format!(
                "initial ratings must be finite, got ({}, {})",
                rating_a, rating_b
            )));
        }
        Ok(Self::new(rating_a, rating_b))
    }

    /// Rating of A minus rating of B
    pub fn gap(&self) -> f64 {
        self.rating_a - self.rating_b
    }

    /// Apply one outcome in place using the standard K-factor schedule.
    pub fn update(&mut self, outcome: Outcome) {
        EloEngine::default().apply(self, outcome);
    }

    /// Return the pair after one outcome, leaving `self` untouched.
    pub fn updated(mut self, outcome: Outcome) -> RatingPair {
        self.update(outcome);
        self
    }
}

/// Applies Elo updates to a [`RatingPair`] under a K-factor schedule.
///
/// Each subject uses its own K-factor, so A's gain need not equal B's loss.
/// Rating deltas are rounded half-to-even before being applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EloEngine {
    schedule: KFactorSchedule,
}

impl EloEngine {
    /// Build an engine from a schedule, validating it first.
    pub fn new(schedule: KFactorSchedule) -> Result<Self> {
        schedule.validate()?;
        Ok(Self { schedule })
    }

    /// Rating deltas (for A, for B) that `outcome` would produce
    pub fn deltas(&self, pair: &RatingPair, outcome: Outcome) -> (f64, f64) {
        let expected = expected_score(pair.rating_a, pair.rating_b);
        let actual = outcome.score();
        let actual_b = outcome.reversed().score();

        let k_a = self.schedule.k_for(pair.rating_a);
        let k_b = self.schedule.k_for(pair.rating_b);

        let delta_a = (k_a * (actual - expected)).round_ties_even();
        let delta_b = (k_b * (actual_b - (1.0 - expected))).round_ties_even();
        (delta_a, delta_b)
    }

    /// Apply one outcome to `pair` in place.
    pub fn apply(&self, pair: &mut RatingPair, outcome: Outcome) {
        let (delta_a, delta_b) = self.deltas(pair, outcome);
        pair.rating_a += delta_a;
        pair.rating_b += delta_b;
    }

    /// One CCR judgment applied to fresh ratings
    pub fn step_comparative(&self, score: i64, rating_a: f64, rating_b: f64) -> RatingPair {
        self.step(from_comparative_score(score), rating_a, rating_b)
    }

    /// One pair of ACR judgments applied to fresh ratings
    pub fn step_absolute(
        &self,
        score_a: i64,
        score_b: i64,
        rating_a: f64,
        rating_b: f64,
    ) -> RatingPair {
        self.step(from_absolute_scores(score_a, score_b), rating_a, rating_b)
    }

    /// One signed-difference judgment applied to fresh ratings
    pub fn step_signed_difference(&self, diff: i64, rating_a: f64, rating_b: f64) -> RatingPair {
        self.step(from_signed_difference(diff), rating_a, rating_b)
    }

    fn step(&self, outcome: Outcome, rating_a: f64, rating_b: f64) -> RatingPair {
        let mut pair = RatingPair::new(rating_a, rating_b);
        self.apply(&mut pair, outcome);
        pair
    }

    /// Apply a whole corpus in order, returning the pair after every judgment.
    pub fn replay(
        &self,
        start: RatingPair,
        corpus: &[i64],
        protocol: ScoreProtocol,
    ) -> Result<Vec<RatingPair>> {
        if corpus.is_empty() {
            return Err(EloError::InvalidCorpus("corpus is empty".to_string()));
        }
        let mut pair = start;
        let trajectory = corpus
            .iter()
            .map(|&score| {
                self.apply(&mut pair, protocol.outcome(score));
                pair
            })
            .collect();
        Ok(trajectory)
    }

    /// Apply two ACR lists judgment by judgment (A[i] against B[i]).
    pub fn replay_paired(
        &self,
        start: RatingPair,
        scores_a: &[i64],
        scores_b: &[i64],
    ) -> Result<Vec<RatingPair>> {
        check_paired_lengths(scores_a, scores_b)?;
        let mut pair = start;
        let trajectory = scores_a
            .iter()
            .zip(scores_b)
            .map(|(&a, &b)| {
                self.apply(&mut pair, from_absolute_scores(a, b));
                pair
            })
            .collect();
        Ok(trajectory)
    }
}

/// Sequential pass over `corpus` with the standard schedule
pub fn replay(
    start: RatingPair,
    corpus: &[i64],
    protocol: ScoreProtocol,
) -> Result<Vec<RatingPair>> {
    EloEngine::default().replay(start, corpus, protocol)
}

/// Sequential pass over paired ACR lists with the standard schedule
pub fn replay_paired(
    start: RatingPair,
    scores_a: &[i64],
    scores_b: &[i64],
) -> Result<Vec<RatingPair>> {
    EloEngine::default().replay_paired(start, scores_a, scores_b)
}

/// Standard-schedule version of [`EloEngine::step_comparative`]
pub fn step_comparative(score: i64, rating_a: f64, rating_b: f64) -> RatingPair {
    EloEngine::default().step_comparative(score, rating_a, rating_b)
}

/// Standard-schedule version of [`EloEngine::step_absolute`]
pub fn step_absolute(score_a: i64, score_b: i64, rating_a: f64, rating_b: f64) -> RatingPair {
    EloEngine::default().step_absolute(score_a, score_b, rating_a, rating_b)
}

/// Standard-schedule version of [`EloEngine::step_signed_difference`]
pub fn step_signed_difference(diff: i64, rating_a: f64, rating_b: f64) -> RatingPair {
    EloEngine::default().step_signed_difference(diff, rating_a, rating_b)
}

pub(crate) fn check_paired_lengths(scores_a: &[i64], scores_b: &[i64]) -> Result<()> {
    if scores_a.is_empty() || scores_b.is_empty() {
        return Err(EloError::InvalidCorpus("corpus is empty".to_string()));
    }
    if scores_a.len() != scores_b.len() {
        return Err(EloError::InvalidCorpus(format!(
            "paired corpora differ in length ({} vs {})",
            scores_a.len(),
            scores_b.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "rating_tests.rs"]
mod rating_tests;
