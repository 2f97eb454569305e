//! Error types for mos_elo.

use std::path::PathBuf;

use elo_core::EloError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MosEloError {
    /// Reading or writing a file failed
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A score line is not an integer
    #[error("Invalid score '{value}' at {}:{line}", .path.display())]
    InvalidScore {
        path: PathBuf,
        line: usize,
        value: String,
    },
    /// The settings file is not valid TOML for a run config
    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    /// A report or trajectory could not be converted to or from JSON
    #[error("Failed to (de)serialize report: {0}")]
    Json(#[from] serde_json::Error),
    /// Rating computation rejected its input
    #[error(transparent)]
    Elo(#[from] EloError),
}

impl MosEloError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MosEloError>;
