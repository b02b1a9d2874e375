//! Dense G×G regulatory weight matrix and its row/column convention.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// How matrix rows and columns map onto regulatory targets and sources.
///
/// SCODE-style `A.txt` output is read as `RowTarget`: entry `[i][j]` is the
/// influence of gene `j` (source) on gene `i` (target). Nothing in the
/// matrix file records which convention its producer used. If an upstream
/// tool wrote the transpose, every edge comes out reversed without any
/// error, so pick the orientation deliberately and confirm it with whoever
/// generated the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Row index = target, column index = source.
    #[default]
    RowTarget,
    /// Row index = source, column index = target.
    RowSource,
}

impl Orientation {
    /// Matrix cell `(row, col)` holding the weight of `source → target`.
    #[inline]
    pub fn cell(self, target: usize, source: usize) -> (usize, usize) {
        match self {
            Orientation::RowTarget => (target, source),
            Orientation::RowSource => (source, target),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::RowTarget => f.write_str("row-target"),
            Orientation::RowSource => f.write_str("row-source"),
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "row-target" => Ok(Orientation::RowTarget),
            "row-source" => Ok(Orientation::RowSource),
            other => Err(Error::InvalidParameter(format!(
                "unknown orientation '{other}' (expected row-target or row-source)"
            ))),
        }
    }
}

/// Square weight matrix, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    size: usize,
    data: Vec<f64>,
}

impl WeightMatrix {
    /// Build from parsed rows, checking the shape against the expected gene
    /// count. Row count is checked before any row length.
    pub fn from_rows(rows: Vec<Vec<f64>>, expected: usize) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyInput("weight matrix contains no rows".into()));
        }
        if rows.len() != expected {
            return Err(Error::ShapeMismatch { expected, actual: rows.len() });
        }
        let mut data = Vec::with_capacity(expected * expected);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(Error::RowLength { row, expected, actual: values.len() });
            }
            data.extend(values);
        }
        Ok(Self { size: expected, data })
    }

    /// Side length G.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    /// `|w|` for every cell off the main diagonal, row-major (G² − G values).
    pub fn off_diagonal_magnitudes(&self) -> impl Iterator<Item = f64> + '_ {
        let n = self.size;
        self.data
            .iter()
            .enumerate()
            .filter(move |(idx, _)| idx / n != idx % n)
            .map(|(_, w)| w.abs())
    }
}
