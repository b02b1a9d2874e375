//! Edge set exporters.
//!
//! Two stateless serializers over an [`EdgeSet`]:
//!
//! ```text
//! EdgeSet → write_weighted_table() → source\ttarget\tweight  (TSV, header)
//!         → write_pair_list()      → source target            (.ncol, no header)
//! ```
//!
//! The `export_*` variants render the whole document in memory and hand it
//! to a single `fs::write`, so a destination file is either fully written or
//! not touched by a failed render. Parent directories must already exist.

use std::fs;
use std::io::Write;
use std::path::Path;

use hashbrown::HashSet;
use tracing::debug;

use crate::model::EdgeSet;
use crate::Result;

/// Header line of the weighted edge table.
pub const WEIGHTED_TABLE_HEADER: &str = "source\ttarget\tweight";

/// Default number of decimal places for table weights.
pub const DEFAULT_DECIMALS: usize = 10;

/// Write the weighted TSV table: header, then one row per edge in set order.
///
/// Weights use plain fixed-point formatting with exactly `decimals` places.
pub fn write_weighted_table(
    edges: &EdgeSet<'_>,
    writer: &mut dyn Write,
    decimals: usize,
) -> Result<()> {
    writeln!(writer, "{WEIGHTED_TABLE_HEADER}")?;
    for edge in edges {
        writeln!(
            writer,
            "{}\t{}\t{:.*}",
            edge.source, edge.target, decimals, edge.weight
        )?;
    }
    Ok(())
}

/// Write the unweighted pair list, one `source target` line per edge.
///
/// With `unique`, only the first occurrence of each ordered pair is written.
pub fn write_pair_list(edges: &EdgeSet<'_>, writer: &mut dyn Write, unique: bool) -> Result<()> {
    let mut seen = HashSet::new();
    for edge in edges {
        if unique && !seen.insert(edge.pair()) {
            continue;
        }
        writeln!(writer, "{} {}", edge.source, edge.target)?;
    }
    Ok(())
}

/// Render the weighted table and write it to `path` in one call.
pub fn export_weighted_table(edges: &EdgeSet<'_>, path: &Path, decimals: usize) -> Result<()> {
    let mut buf = Vec::new();
    write_weighted_table(edges, &mut buf, decimals)?;
    fs::write(path, &buf)?;
    debug!(path = %path.display(), edges = edges.len(), bytes = buf.len(), "weighted table written");
    Ok(())
}

/// Render the pair list and write it to `path` in one call.
pub fn export_pair_list(edges: &EdgeSet<'_>, path: &Path, unique: bool) -> Result<()> {
    let mut buf = Vec::new();
    write_pair_list(edges, &mut buf, unique)?;
    fs::write(path, &buf)?;
    debug!(path = %path.display(), unique, bytes = buf.len(), "pair list written");
    Ok(())
}
