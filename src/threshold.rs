//! Threshold resolution: one non-negative magnitude cutoff per conversion.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::WeightMatrix;
use crate::stats;
use crate::Result;

/// Where a resolved cutoff came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "q", rename_all = "lowercase")]
pub enum ThresholdSource {
    /// Fixed caller-supplied magnitude.
    Absolute,
    /// Interpolated quantile `q` of the off-diagonal |w| distribution.
    Quantile(f64),
}

/// A resolved cutoff. Always `>= 0`; edges with `|w| >= value` are kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    value: f64,
    source: ThresholdSource,
}

impl Threshold {
    /// Fixed cutoff, clamped to zero from below.
    pub fn absolute(value: f64) -> Self {
        Self { value: value.max(0.0), source: ThresholdSource::Absolute }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn source(&self) -> ThresholdSource {
        self.source
    }

    /// Whether an edge of weight `w` survives the cutoff.
    #[inline]
    pub fn keeps(&self, weight: f64) -> bool {
        weight.abs() >= self.value
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            ThresholdSource::Absolute => write!(f, "{:.6} (absolute)", self.value),
            ThresholdSource::Quantile(q) => write!(f, "{:.6} (quantile {q})", self.value),
        }
    }
}

/// Decide the cutoff for `matrix`.
///
/// Without a quantile the cutoff is `max(absolute, 0)`. With one, the
/// absolute value is ignored and the cutoff is the `q`-quantile of `|w|`
/// over all G² − G off-diagonal cells, clamped to zero. Fails when `q` lies
/// outside `[0, 1]`, the matrix has no off-diagonal cells (G = 1), or an
/// off-diagonal cell is NaN or infinite.
pub fn resolve_threshold(
    matrix: &WeightMatrix,
    absolute: f64,
    quantile: Option<f64>,
) -> Result<Threshold> {
    let Some(q) = quantile else {
        return Ok(Threshold::absolute(absolute));
    };

    let mut magnitudes: Vec<f64> = matrix.off_diagonal_magnitudes().collect();
    let cut = stats::quantile(&mut magnitudes, q)?;
    debug!(q, cut, candidates = magnitudes.len(), "quantile threshold resolved");

    Ok(Threshold { value: cut.max(0.0), source: ThresholdSource::Quantile(q) })
}
