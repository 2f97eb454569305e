//! Summary statistics and chart-ready curves for rating series
//!
//! Nothing here renders anything. Each function returns plain numbers that a
//! plotting tool can draw directly: a normal overlay fitted to a bootstrap
//! series, a density histogram, and the Elo expectation and gain curves.

use serde::{Deserialize, Serialize};

use crate::error::{EloError, Result};
use crate::rating::{expected_score, ELO_SCALE};

/// Mean and population standard deviation of a series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Normal density with this mean and standard deviation, sampled at
    /// `points` evenly spaced values from `from` to `to` inclusive.
    pub fn density_curve(&self, from: f64, to: f64, points: usize) -> Vec<(f64, f64)> {
        linspace(from, to, points)
            .map(|x| (x, normal_pdf(x, self.mean, self.std_dev)))
            .collect()
    }
}

/// Mean and population standard deviation of `series`.
pub fn summarize(series: &[f64]) -> Result<Summary> {
    if series.is_empty() {
        return Err(EloError::EmptySeries);
    }
    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    Ok(Summary {
        mean,
        std_dev: variance.sqrt(),
    })
}

/// Normal probability density at `x`.
///
/// A zero standard deviation has no density; the result is then NaN,
/// or infinite at the mean itself.
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * std::f64::consts::PI).sqrt())
}

/// Equal-width histogram normalized so the bars integrate to 1
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Histogram {
    /// Bin edges, one more than the number of bins
    pub edges: Vec<f64>,
    /// Raw count per bin
    pub counts: Vec<usize>,
    /// Density per bin (count / (total * bin width))
    pub densities: Vec<f64>,
}

/// Density histogram of `series` over its own range.
///
/// The last bin includes the maximum. A series with a single distinct value
/// gets a range of one rating point centred on it.
pub fn histogram(series: &[f64], bins: usize) -> Result<Histogram> {
    if series.is_empty() {
        return Err(EloError::EmptySeries);
    }
    if bins == 0 {
        return Err(EloError::InvalidParameter(
            "histogram needs at least one bin".to_string(),
        ));
    }

    let mut lo = series.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &x in series {
        let idx = (((x - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let total = series.len() as f64;
    let densities = counts
        .iter()
        .map(|&c| c as f64 / (total * width))
        .collect();
    let edges = (0..=bins).map(|i| lo + width * i as f64).collect();

    Ok(Histogram {
        edges,
        counts,
        densities,
    })
}

/// Expected score P(D) for a rating advantage D, at `points` values of D.
pub fn expected_score_curve(from: f64, to: f64, points: usize) -> Vec<(f64, f64)> {
    linspace(from, to, points)
        .map(|d| (d, expected_score(d, 0.0)))
        .collect()
}

/// Rating gained by winning with advantage D under a fixed K, i.e. K * (1 - P(D)).
pub fn gain_curve(k: f64, from: f64, to: f64, points: usize) -> Vec<(f64, f64)> {
    linspace(from, to, points)
        .map(|d| (d, k * (1.0 - 1.0 / (1.0 + 10.0_f64.powf(-d / ELO_SCALE)))))
        .collect()
}

/// `points` evenly spaced values from `from` to `to`, both ends included.
pub fn linspace(from: f64, to: f64, points: usize) -> impl Iterator<Item = f64> {
    let step = if points > 1 {
        (to - from) / (points - 1) as f64
    } else {
        0.0
    };
    (0..points).map(move |i| {
        if i + 1 == points && points > 1 {
            to
        } else {
            from + step * i as f64
        }
    })
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
