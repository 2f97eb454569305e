//! Score file ingestion
//!
//! One integer per line. Blank lines and surrounding whitespace are skipped.

use std::path::Path;

use tracing::debug;

use crate::error::{MosEloError, Result};

/// Parse newline-delimited scores. `path` is only used in error messages.
pub fn parse_scores(content: &str, path: &Path) -> Result<Vec<i64>> {
    let mut scores = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let score = line.parse::<i64>().map_err(|_| MosEloError::InvalidScore {
            path: path.to_path_buf(),
            line: idx + 1,
            value: line.to_string(),
        })?;
        scores.push(score);
    }
    Ok(scores)
}

/// Read a score file.
pub fn read_scores(path: &Path) -> Result<Vec<i64>> {
    let content = std::fs::read_to_string(path).map_err(|e| MosEloError::io(path, e))?;
    let scores = parse_scores(&content, path)?;
    debug!(path = %path.display(), count = scores.len(), "loaded scores");
    Ok(scores)
}

/// Read the two ACR score files of a paired test (subject A, subject B).
pub fn read_paired_scores(path_a: &Path, path_b: &Path) -> Result<(Vec<i64>, Vec<i64>)> {
    Ok((read_scores(path_a)?, read_scores(path_b)?))
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod corpus_tests;
