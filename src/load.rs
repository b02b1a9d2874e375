//! Input loaders for the gene-order list and the weight-matrix text file.
//!
//! Both formats are line oriented; blank lines are ignored. Nothing is
//! defaulted: a missing gene list, an empty matrix, or a non-numeric token
//! aborts the conversion.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::model::{GeneOrder, WeightMatrix};
use crate::{Error, Result};

/// Parse a newline-delimited gene list. `origin` names the input in errors.
pub fn parse_gene_order(text: &str, origin: &str) -> Result<GeneOrder> {
    let genes: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect();
    if genes.is_empty() {
        return Err(Error::EmptyInput(format!("no genes found in {origin}")));
    }
    GeneOrder::new(genes)
}

/// Parse whitespace-delimited numeric rows, one matrix row per line.
pub fn parse_matrix_rows(text: &str, origin: &str) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| Error::Parse {
                    line: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(Error::EmptyInput(format!("no numeric rows found in {origin}")));
    }
    Ok(rows)
}

/// Read the gene-order file at `path`.
pub fn read_gene_order(path: &Path) -> Result<GeneOrder> {
    let text = fs::read_to_string(path)?;
    let order = parse_gene_order(&text, &path.display().to_string())?;
    debug!(path = %path.display(), genes = order.len(), "gene order loaded");
    Ok(order)
}

/// Read the matrix file at `path` and check it is `expected × expected`.
pub fn read_matrix(path: &Path, expected: usize) -> Result<WeightMatrix> {
    let text = fs::read_to_string(path)?;
    let rows = parse_matrix_rows(&text, &path.display().to_string())?;
    let matrix = WeightMatrix::from_rows(rows, expected)?;
    debug!(path = %path.display(), size = matrix.size(), "weight matrix loaded");
    Ok(matrix)
}
