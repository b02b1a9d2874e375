//! # grn-edgelist — GRN weight matrix → edge list
//!
//! Post-processes the output of gene-regulatory-network inference (e.g.
//! SCODE's `A.txt`): a square gene × gene weight matrix plus the gene order
//! it was computed over. The matrix is thresholded into a sparse, directed,
//! weighted edge list and exported as a TSV table and an `.ncol` pair list.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: threshold → extract → export are plain functions over
//!    read-only values; only `export_*`, `load` and `batch` touch the disk
//! 2. **Explicit orientation**: which matrix axis is the target is an
//!    [`Orientation`] argument, never an assumption hidden in loop order
//! 3. **Deterministic output**: edges come out target-major, source-minor
//! 4. **Fail before writing**: every shape and parameter check runs before
//!    the first output byte
//!
//! ## Quick Start
//!
//! ```rust
//! use grn_edgelist::{GeneNetwork, GeneOrder, WeightMatrix};
//!
//! # fn example() -> grn_edgelist::Result<()> {
//! let genes = GeneOrder::new(["Gata1", "Spi1"])?;
//! let matrix = WeightMatrix::from_rows(vec![vec![0.0, -0.8], vec![0.1, 0.0]], 2)?;
//! let network = GeneNetwork::new(genes, matrix)?;
//!
//! let threshold = network.resolve_threshold(0.0, Some(0.5))?;
//! let edges = network.edges(threshold)?;
//!
//! let mut tsv = Vec::new();
//! grn_edgelist::export::write_weighted_table(&edges, &mut tsv, 6)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `parallel` | Row-parallel extraction via rayon, same edge order |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod stats;
pub mod threshold;
pub mod extract;
pub mod export;
pub mod load;
pub mod config;
pub mod pipeline;
pub mod batch;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{GeneOrder, WeightMatrix, Orientation, Edge, EdgeSet};
pub use threshold::{Threshold, ThresholdSource, resolve_threshold};
pub use extract::extract_edges;
pub use config::ConvertConfig;
pub use pipeline::{convert, ConversionReport};
pub use batch::{run_batch, BatchConfig, BatchReport};

use std::path::Path;

// ============================================================================
// Top-level network handle
// ============================================================================

/// A gene order paired with its weight matrix, shape-checked on construction.
///
/// This is the in-memory entry point; [`convert`] wraps it with file I/O.
#[derive(Debug, Clone)]
pub struct GeneNetwork {
    genes: GeneOrder,
    matrix: WeightMatrix,
    orientation: Orientation,
}

impl GeneNetwork {
    /// Pair `genes` with `matrix` under the default [`Orientation::RowTarget`].
    pub fn new(genes: GeneOrder, matrix: WeightMatrix) -> Result<Self> {
        if genes.len() != matrix.size() {
            return Err(Error::ShapeMismatch { expected: genes.len(), actual: matrix.size() });
        }
        Ok(Self { genes, matrix, orientation: Orientation::default() })
    }

    /// Load the gene-order file, then a matrix file that must match it.
    pub fn open(gene_file: &Path, matrix_file: &Path) -> Result<Self> {
        let genes = load::read_gene_order(gene_file)?;
        let matrix = load::read_matrix(matrix_file, genes.len())?;
        Self::new(genes, matrix)
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn genes(&self) -> &GeneOrder {
        &self.genes
    }

    pub fn matrix(&self) -> &WeightMatrix {
        &self.matrix
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Resolve the cutoff from an absolute value or a quantile request.
    pub fn resolve_threshold(&self, absolute: f64, quantile: Option<f64>) -> Result<Threshold> {
        threshold::resolve_threshold(&self.matrix, absolute, quantile)
    }

    /// Extract the edge set at `threshold`.
    pub fn edges(&self, threshold: Threshold) -> Result<EdgeSet<'_>> {
        extract::extract_edges(&self.genes, &self.matrix, self.orientation, threshold)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Gene count ({expected}) does not match matrix row count ({actual})")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Row {row} in matrix has length {actual} but expected {expected}")]
    RowLength { row: usize, expected: usize, actual: usize },

    #[error("Matrix parse error on line {line}: '{token}' is not a number")]
    Parse { line: usize, token: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Batch error: {0}")]
    Batch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
