//! Paired Elo ratings for subjective-quality comparisons
//!
//! This crate provides the pure-computation side of comparing two subjects
//! (typically two codecs) from human quality judgments:
//! - Mapping raw judgment scores (CCR, ACR, signed difference) to Win/Tie/Loss
//! - Elo updates with a tiered K-factor
//! - Bootstrap resampling of the judgment order to get a rating distribution
//! - Summary statistics for the resulting rating series
//!
//! No IO happens here. Callers parse their score files and hand in integers.
//!
//! # Usage
//!
//! ```rust
//! use elo_core::{bootstrap_shuffle, summarize, ScoreProtocol, DEFAULT_RATING};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let corpus: Vec<i64> = vec![70, 70, 30, 50, 65, 20];
//! let mut rng = StdRng::seed_from_u64(7);
//! let series = bootstrap_shuffle(
//!     &corpus,
//!     ScoreProtocol::Comparative,
//!     100,
//!     DEFAULT_RATING,
//!     DEFAULT_RATING,
//!     &mut rng,
//! )
//! .unwrap();
//!
//! let a = summarize(&series.rating_a).unwrap();
//! println!("A: mean {:.1}, sd {:.1}", a.mean, a.std_dev);
//! ```

mod bootstrap;
mod error;
mod outcome;
mod rating;
mod stats;

pub use bootstrap::*;
pub use error::*;
pub use outcome::*;
pub use rating::*;
pub use stats::*;
