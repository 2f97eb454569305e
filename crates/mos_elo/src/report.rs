//! Bootstrap report storage and formatting

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use elo_core::{histogram, BootstrapConfig, Histogram, RatingSeries, ScoreProtocol, Summary};

use crate::error::{MosEloError, Result};

/// Points per normal overlay curve
pub const OVERLAY_POINTS: usize = 100;

/// Bins per rating histogram
pub const HISTOGRAM_BINS: usize = 10;

/// Which resampling produced a report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BootstrapMode {
    Shuffle,
    Batch,
}

impl fmt::Display for BootstrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapMode::Shuffle => write!(f, "shuffle"),
            BootstrapMode::Batch => write!(f, "batch"),
        }
    }
}

/// Chart data for one subject: overlay curve plus histogram
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Distribution {
    pub summary: Summary,
    /// (rating, density) points of the fitted normal curve
    pub overlay: Vec<(f64, f64)>,
    pub histogram: Histogram,
}

/// Complete bootstrap results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BootstrapReport {
    pub mode: BootstrapMode,
    /// Score mapping used (None for ACR batch runs)
    pub protocol: Option<ScoreProtocol>,
    /// Judgments per subject in the input corpus
    pub judgments: usize,
    /// Configuration used
    pub config: BootstrapConfig,
    pub series: RatingSeries,
    pub subject_a: Distribution,
    pub subject_b: Distribution,
    /// Mean of the per-round gap (A minus B)
    pub mean_gap: f64,
}

impl BootstrapReport {
    /// Summarize a finished series.
    pub fn new(
        mode: BootstrapMode,
        protocol: Option<ScoreProtocol>,
        judgments: usize,
        config: BootstrapConfig,
        series: RatingSeries,
    ) -> Result<Self> {
        let (summary_a, summary_b) = series.summaries()?;

        // Both overlays share one x range so they can be drawn on the same axes
        let all = series.rating_a.iter().chain(&series.rating_b).copied();
        let lo = all.clone().fold(f64::INFINITY, f64::min);
        let hi = all.fold(f64::NEG_INFINITY, f64::max);

        let subject_a = Distribution {
            summary: summary_a,
            overlay: overlay(&summary_a, lo, hi),
            histogram: histogram(&series.rating_a, HISTOGRAM_BINS)?,
        };
        let subject_b = Distribution {
            summary: summary_b,
            overlay: overlay(&summary_b, lo, hi),
            histogram: histogram(&series.rating_b, HISTOGRAM_BINS)?,
        };

        Ok(Self {
            mode,
            protocol,
            judgments,
            config,
            series,
            subject_a,
            subject_b,
            mean_gap: summary_a.mean - summary_b.mean,
        })
    }

    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        save_json(self, path)
    }

    /// Load report from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MosEloError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Bootstrap ({}) ===\n\n", self.mode));
        if let Some(protocol) = self.protocol {
            report.push_str(&format!("Protocol: {}\n", protocol));
        }
        report.push_str(&format!(
            "Judgments: {}, Rounds: {}, Carry-over: {}, Seed: {}\n\n",
            self.judgments,
            self.series.len(),
            if self.config.carry_over { "yes" } else { "no" },
            self.config
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "random".to_string())
        ));

        report.push_str(&format!(
            "{:<10} {:>10} {:>10} {:>10}\n",
            "Subject", "Final", "Mean", "Std dev"
        ));
        report.push_str(&"-".repeat(43));
        report.push('\n');

        let last = self.series.last();
        let rows = [
            ("A", last.map(|p| p.rating_a), &self.subject_a.summary),
            ("B", last.map(|p| p.rating_b), &self.subject_b.summary),
        ];
        for (name, last, summary) in rows {
            report.push_str(&format!(
                "{:<10} {:>10.0} {:>10.1} {:>10.1}\n",
                name,
                last.unwrap_or(f64::NAN),
                summary.mean,
                summary.std_dev
            ));
        }

        report.push_str(&format!("\nMean gap (A - B): {:+.1}\n", self.mean_gap));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// A constant series has no normal curve to draw.
fn overlay(summary: &Summary, lo: f64, hi: f64) -> Vec<(f64, f64)> {
    if summary.std_dev > 0.0 {
        summary.density_curve(lo, hi, OVERLAY_POINTS)
    } else {
        Vec::new()
    }
}

/// Write any serializable value as pretty JSON.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|e| MosEloError::io(path, e))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
