//! Bootstrap resampling of a judgment corpus
//!
//! A single pass over the judgments gives one order-dependent pair of
//! ratings. Running many shuffled or resampled passes gives a distribution
//! of final ratings, which is what tells a real rating gap apart from noise.
//!
//! Two modes are supported:
//! - **Shuffle**: permute the whole corpus each round and replay it.
//! - **Batch**: draw a fifth of each ACR list without replacement, reduce
//!   both samples to their integer means and apply them as one judgment.
//!
//! In both modes the ratings carry over from one round to the next unless
//! [`BootstrapConfig::carry_over`] is turned off.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{EloError, Result};
use crate::outcome::{from_absolute_scores, ScoreProtocol};
use crate::rating::{
    check_paired_lengths, EloEngine, KFactorSchedule, RatingPair, DEFAULT_RATING,
};
use crate::stats::{summarize, Summary};

/// Default number of bootstrap rounds
pub const DEFAULT_ROUNDS: usize = 1000;

/// Batch mode samples `len / BATCH_DIVISOR` judgments per subject each round.
pub const BATCH_DIVISOR: usize = 5;

/// Configuration for a bootstrap run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of rounds to run
    pub rounds: usize,
    /// Starting rating of subject A
    pub initial_rating_a: f64,
    /// Starting rating of subject B
    pub initial_rating_b: f64,
    /// Start each round from the previous round's ratings (false = restart from the initial pair)
    pub carry_over: bool,
    /// Seed for reproducible runs (None = OS entropy)
    pub seed: Option<u64>,
    /// K-factor tiers used by every update
    pub k_factor: KFactorSchedule,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            initial_rating_a: DEFAULT_RATING,
            initial_rating_b: DEFAULT_RATING,
            carry_over: true,
            seed: None,
            k_factor: KFactorSchedule::default(),
        }
    }
}

impl BootstrapConfig {
    /// Validated starting ratings
    pub fn initial_pair(&self) -> Result<RatingPair> {
        RatingPair::try_new(self.initial_rating_a, self.initial_rating_b)
    }

    /// Random source for this run: seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Final ratings of every bootstrap round, in round order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RatingSeries {
    pub rating_a: Vec<f64>,
    pub rating_b: Vec<f64>,
}

impl RatingSeries {
    pub fn with_capacity(rounds: usize) -> Self {
        Self {
            rating_a: Vec::with_capacity(rounds),
            rating_b: Vec::with_capacity(rounds),
        }
    }

    pub fn push(&mut self, pair: RatingPair) {
        self.rating_a.push(pair.rating_a);
        self.rating_b.push(pair.rating_b);
    }

    pub fn len(&self) -> usize {
        self.rating_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rating_a.is_empty()
    }

    /// Ratings recorded for a given round
    pub fn get(&self, round: usize) -> Option<RatingPair> {
        Some(RatingPair::new(
            *self.rating_a.get(round)?,
            *self.rating_b.get(round)?,
        ))
    }

    /// Ratings after the last round
    pub fn last(&self) -> Option<RatingPair> {
        self.len().checked_sub(1).and_then(|round| self.get(round))
    }

    pub fn iter(&self) -> impl Iterator<Item = RatingPair> + '_ {
        self.rating_a
            .iter()
            .zip(&self.rating_b)
            .map(|(&a, &b)| RatingPair::new(a, b))
    }

    /// Per-round gap (A minus B)
    pub fn gaps(&self) -> Vec<f64> {
        self.iter().map(|pair| pair.gap()).collect()
    }

    /// Mean and standard deviation for A and for B
    pub fn summaries(&self) -> Result<(Summary, Summary)> {
        Ok((summarize(&self.rating_a)?, summarize(&self.rating_b)?))
    }
}

/// Runs bootstrap rounds under a fixed configuration
#[derive(Debug, Clone)]
pub struct Bootstrap {
    config: BootstrapConfig,
    engine: EloEngine,
    initial: RatingPair,
}

impl Bootstrap {
    /// Validate `config` and build a runner.
    pub fn new(config: BootstrapConfig) -> Result<Self> {
        if config.rounds < 1 {
            return Err(EloError::InvalidParameter(
                "bootstrap needs at least one round".to_string(),
            ));
        }
        let initial = config.initial_pair()?;
        let engine = EloEngine::new(config.k_factor)?;
        Ok(Self {
            config,
            engine,
            initial,
        })
    }

    /// Shuffle-and-replay `corpus` once per round.
    ///
    /// The caller's corpus is not touched. One working copy is shuffled
    /// again at the start of every round.
    pub fn run_shuffle<R: Rng + ?Sized>(
        &self,
        corpus: &[i64],
        protocol: ScoreProtocol,
        rng: &mut R,
    ) -> Result<RatingSeries> {
        if corpus.is_empty() {
            return Err(EloError::InvalidCorpus("corpus is empty".to_string()));
        }

        debug!(
            rounds = self.config.rounds,
            judgments = corpus.len(),
            %protocol,
            carry_over = self.config.carry_over,
            "starting shuffle bootstrap"
        );

        let mut working = corpus.to_vec();
        let mut series = RatingSeries::with_capacity(self.config.rounds);
        let mut pair = self.initial;

        for round in 0..self.config.rounds {
            if !self.config.carry_over {
                pair = self.initial;
            }
            working.shuffle(rng);
            for &score in &working {
                self.engine.apply(&mut pair, protocol.outcome(score));
            }
            trace!(round, rating_a = pair.rating_a, rating_b = pair.rating_b, "round done");
            series.push(pair);
        }

        self.log_finish(&series);
        Ok(series)
    }

    /// Sample a batch from each ACR list per round and apply their means.
    pub fn run_batch<R: Rng + ?Sized>(
        &self,
        scores_a: &[i64],
        scores_b: &[i64],
        rng: &mut R,
    ) -> Result<RatingSeries> {
        check_paired_lengths(scores_a, scores_b)?;
        let batch_size = scores_a.len() / BATCH_DIVISOR;
        if batch_size == 0 {
            return Err(EloError::InvalidCorpus(format!(
                "batch mode needs at least {} judgments per subject, got {}",
                BATCH_DIVISOR,
                scores_a.len()
            )));
        }

        debug!(
            rounds = self.config.rounds,
            judgments = scores_a.len(),
            batch_size,
            carry_over = self.config.carry_over,
            "starting batch bootstrap"
        );

        let mut series = RatingSeries::with_capacity(self.config.rounds);
        let mut pair = self.initial;

        for round in 0..self.config.rounds {
            if !self.config.carry_over {
                pair = self.initial;
            }
            let mean_a = sample_mean(scores_a, batch_size, rng);
            let mean_b = sample_mean(scores_b, batch_size, rng);
            self.engine.apply(&mut pair, from_absolute_scores(mean_a, mean_b));
            trace!(
                round,
                mean_a,
                mean_b,
                rating_a = pair.rating_a,
                rating_b = pair.rating_b,
                "round done"
            );
            series.push(pair);
        }

        self.log_finish(&series);
        Ok(series)
    }

    /// [`Bootstrap::run_shuffle`] with the configured seed
    pub fn run_shuffle_seeded(
        &self,
        corpus: &[i64],
        protocol: ScoreProtocol,
    ) -> Result<RatingSeries> {
        let mut rng = self.config.rng();
        self.run_shuffle(corpus, protocol, &mut rng)
    }

    /// [`Bootstrap::run_batch`] with the configured seed
    pub fn run_batch_seeded(&self, scores_a: &[i64], scores_b: &[i64]) -> Result<RatingSeries> {
        let mut rng = self.config.rng();
        self.run_batch(scores_a, scores_b, &mut rng)
    }

    fn log_finish(&self, series: &RatingSeries) {
        if let Some(last) = series.last() {
            debug!(
                rounds = series.len(),
                rating_a = last.rating_a,
                rating_b = last.rating_b,
                "bootstrap finished"
            );
        }
    }
}

/// Integer mean (truncated toward zero) of `size` values drawn without replacement
fn sample_mean<R: Rng + ?Sized>(scores: &[i64], size: usize, rng: &mut R) -> i64 {
    let sum: i64 = scores.choose_multiple(rng, size).copied().sum();
    sum / size as i64
}

/// Shuffle-mode bootstrap with the standard K-factor schedule and carry-over.
pub fn bootstrap_shuffle<R: Rng + ?Sized>(
    corpus: &[i64],
    protocol: ScoreProtocol,
    rounds: usize,
    initial_rating_a: f64,
    initial_rating_b: f64,
    rng: &mut R,
) -> Result<RatingSeries> {
    let config = BootstrapConfig {
        rounds,
        initial_rating_a,
        initial_rating_b,
        ..Default::default()
    };
    Bootstrap::new(config)?.run_shuffle(corpus, protocol, rng)
}

/// Batch-mode bootstrap with the standard K-factor schedule and carry-over.
pub fn bootstrap_batch<R: Rng + ?Sized>(
    scores_a: &[i64],
    scores_b: &[i64],
    rounds: usize,
    initial_rating_a: f64,
    initial_rating_b: f64,
    rng: &mut R,
) -> Result<RatingSeries> {
    let config = BootstrapConfig {
        rounds,
        initial_rating_a,
        initial_rating_b,
        ..Default::default()
    };
    Bootstrap::new(config)?.run_batch(scores_a, scores_b, rng)
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod bootstrap_tests;
