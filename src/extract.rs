//! Edge extraction: one sweep over the matrix, diagonal skipped.
//!
//! Sweep order is target-major, source-minor. The `parallel` feature
//! splits the sweep by target and concatenates the per-target runs in
//! target order, so the resulting [`EdgeSet`] is identical either way.

use tracing::debug;

use crate::model::{Edge, EdgeSet, GeneOrder, Orientation, WeightMatrix};
use crate::threshold::Threshold;
use crate::{Error, Result};

/// Extract every off-diagonal edge whose magnitude reaches `threshold`.
///
/// For target `t` and source `s ≠ t`, the weight is read from the cell
/// `orientation` assigns to `s → t`, and `(gene[s], gene[t], w)` is kept
/// iff `|w| >= threshold`. Weights keep their sign.
pub fn extract_edges<'g>(
    genes: &'g GeneOrder,
    matrix: &WeightMatrix,
    orientation: Orientation,
    threshold: Threshold,
) -> Result<EdgeSet<'g>> {
    if genes.len() != matrix.size() {
        return Err(Error::ShapeMismatch { expected: genes.len(), actual: matrix.size() });
    }

    let edges = sweep(genes, matrix, orientation, threshold);
    debug!(
        genes = genes.len(),
        kept = edges.len(),
        threshold = threshold.value(),
        %orientation,
        "edges extracted"
    );
    Ok(EdgeSet::from(edges))
}

#[cfg(not(feature = "parallel"))]
fn sweep<'g>(
    genes: &'g GeneOrder,
    matrix: &WeightMatrix,
    orientation: Orientation,
    threshold: Threshold,
) -> Vec<Edge<'g>> {
    let mut edges = Vec::new();
    for target in 0..genes.len() {
        collect_target(genes, matrix, orientation, threshold, target, &mut edges);
    }
    edges
}

#[cfg(feature = "parallel")]
fn sweep<'g>(
    genes: &'g GeneOrder,
    matrix: &WeightMatrix,
    orientation: Orientation,
    threshold: Threshold,
) -> Vec<Edge<'g>> {
    use rayon::prelude::*;

    // Indexed collect keeps the per-target runs in target order.
    let runs: Vec<Vec<Edge<'g>>> = (0..genes.len())
        .into_par_iter()
        .map(|target| {
            let mut run = Vec::new();
            collect_target(genes, matrix, orientation, threshold, target, &mut run);
            run
        })
        .collect();
    runs.concat()
}

/// Push every kept `source → target` edge for one target, in source order.
#[inline]
fn collect_target<'g>(
    genes: &'g GeneOrder,
    matrix: &WeightMatrix,
    orientation: Orientation,
    threshold: Threshold,
    target: usize,
    out: &mut Vec<Edge<'g>>,
) {
    for source in 0..genes.len() {
        if source == target {
            continue;
        }
        let (row, col) = orientation.cell(target, source);
        let weight = matrix.get(row, col);
        if threshold.keeps(weight) {
            out.push(Edge::new(&genes[source], &genes[target], weight));
        }
    }
}
