//! Error types for elo_core.

use thiserror::Error;

/// Errors raised before any rating computation starts.
///
/// The update engine and the outcome mappers are total, so every variant
/// here comes from validating a corpus, a parameter, or a series up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EloError {
    /// Corpus is empty, too short to form a batch, or paired lists differ in length
    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),
    /// Round count, initial rating, or K-factor schedule is unusable
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Statistics requested on a series with no values
    #[error("Cannot summarize an empty rating series")]
    EmptySeries,
}

pub type Result<T> = std::result::Result<T, EloError>;
