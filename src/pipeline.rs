//! File-to-file conversion: load → resolve → extract → export.
//!
//! All validation (config, gene list, matrix shape, quantile) happens before
//! the first output file is written. A failed conversion leaves no output.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::ConvertConfig;
use crate::threshold::Threshold;
use crate::{export, GeneNetwork, Result};

/// Summary of one successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub genes: usize,
    pub edges_kept: usize,
    pub threshold: Threshold,
    pub edge_table: PathBuf,
    pub pair_list: Option<PathBuf>,
}

/// Convert the matrix in `matrix_file`, labelled by `gene_file`, into the
/// weighted table at `output_file` (and the pair list, when configured).
pub fn convert(
    gene_file: &Path,
    matrix_file: &Path,
    output_file: &Path,
    config: &ConvertConfig,
) -> Result<ConversionReport> {
    config.validate()?;

    let network = GeneNetwork::open(gene_file, matrix_file)?.with_orientation(config.orientation);
    let threshold = network.resolve_threshold(config.absolute_threshold, config.quantile)?;
    let edges = network.edges(threshold)?;

    export::export_weighted_table(&edges, output_file, config.decimals)?;
    if let Some(pair_path) = &config.pair_list_path {
        export::export_pair_list(&edges, pair_path, config.pair_list_unique)?;
    }

    let report = ConversionReport {
        genes: network.genes().len(),
        edges_kept: edges.len(),
        threshold,
        edge_table: output_file.to_path_buf(),
        pair_list: config.pair_list_path.clone(),
    };
    info!(
        genes = report.genes,
        edges_kept = report.edges_kept,
        threshold = %report.threshold,
        output = %output_file.display(),
        "conversion complete"
    );
    Ok(report)
}
