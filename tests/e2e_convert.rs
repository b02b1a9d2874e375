//! End-to-end conversion tests: files in → edge table / pair list out.
//!
//! Each test writes a gene order and a matrix into a temp dir, runs
//! `grn_edgelist::convert`, and inspects the produced files.

use std::fs;
use std::path::{Path, PathBuf};

use grn_edgelist::{convert, ConvertConfig, Error, Orientation, ThresholdSource};
use pretty_assertions::assert_eq;

// ============================================================================
// Helper: write inputs into a temp dir
// ============================================================================

struct Fixture {
    dir: tempfile::TempDir,
    genes: PathBuf,
    matrix: PathBuf,
}

impl Fixture {
    fn new(genes: &str, matrix: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let gene_path = dir.path().join("tf_order.txt");
        let matrix_path = dir.path().join("A.txt");
        fs::write(&gene_path, genes).unwrap();
        fs::write(&matrix_path, matrix).unwrap();
        Self { dir, genes: gene_path, matrix: matrix_path }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, config: &ConvertConfig) -> grn_edgelist::Result<grn_edgelist::ConversionReport> {
        convert(&self.genes, &self.matrix, &self.path("edges.tsv"), config)
    }
}

fn data_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}

// ============================================================================
// 1. Two-gene asymmetric matrix: each direction judged on its own cell
// ============================================================================

#[test]
fn test_asymmetric_matrix_keeps_one_direction() {
    let fx = Fixture::new("A\nB\n", "0.0 5.0\n1.0 0.0\n");
    let config = ConvertConfig { absolute_threshold: 2.0, ..Default::default() };
    let report = fx.run(&config).unwrap();

    assert_eq!(report.edges_kept, 1);
    // row 0 is target A; column 1 is source B
    assert_eq!(data_lines(&fx.path("edges.tsv")), vec!["B\tA\t5.0000000000"]);
}

#[test]
fn test_row_source_orientation_reverses_edges() {
    let fx = Fixture::new("A\nB\n", "0.0 5.0\n1.0 0.0\n");
    let config = ConvertConfig {
        absolute_threshold: 2.0,
        orientation: Orientation::RowSource,
        ..Default::default()
    };
    fx.run(&config).unwrap();
    assert_eq!(data_lines(&fx.path("edges.tsv")), vec!["A\tB\t5.0000000000"]);
}

// ============================================================================
// 2. Fatal shape errors: nothing is written
// ============================================================================

#[test]
fn test_three_genes_four_by_four_matrix_writes_nothing() {
    let matrix = "0 1 1 1\n1 0 1 1\n1 1 0 1\n1 1 1 0\n";
    let fx = Fixture::new("A\nB\nC\n", matrix);
    let config = ConvertConfig {
        pair_list_path: Some(fx.path("input.ncol")),
        ..Default::default()
    };

    let err = fx.run(&config).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { expected: 3, actual: 4 }));
    assert!(err.to_string().contains("(3)") && err.to_string().contains("(4)"));
    assert!(!fx.path("edges.tsv").exists());
    assert!(!fx.path("input.ncol").exists());
}

#[test]
fn test_ragged_row_names_row_index() {
    let fx = Fixture::new("A\nB\nC\n", "0 1 1\n1 0\n1 1 0\n");
    let err = fx.run(&ConvertConfig::default()).unwrap_err();
    assert!(matches!(err, Error::RowLength { row: 1, expected: 3, actual: 2 }));
    assert!(!fx.path("edges.tsv").exists());
}

#[test]
fn test_empty_gene_file() {
    let fx = Fixture::new("\n\n", "0 1\n1 0\n");
    assert!(matches!(fx.run(&ConvertConfig::default()), Err(Error::EmptyInput(_))));
    assert!(!fx.path("edges.tsv").exists());
}

#[test]
fn test_quantile_over_single_gene_fails() {
    let fx = Fixture::new("A\n", "3.0\n");
    let config = ConvertConfig { quantile: Some(0.5), ..Default::default() };
    assert!(matches!(fx.run(&config), Err(Error::InvalidParameter(_))));
    assert!(!fx.path("edges.tsv").exists());
}

#[test]
fn test_nan_cell_rejects_quantile_cutoff() {
    let fx = Fixture::new("A\nB\nC\n", "0 NaN 1\n2 0 3\n4 5 0\n");
    let config = ConvertConfig { quantile: Some(1.0), ..Default::default() };

    let err = fx.run(&config).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    assert!(err.to_string().contains("NaN"));
    assert!(!fx.path("edges.tsv").exists());
}

// ============================================================================
// 3. Thresholds
// ============================================================================

#[test]
fn test_quantile_overrides_absolute() {
    let matrix = "0 0.1 0.2\n0.3 0 0.4\n0.5 0.6 0\n";
    let fx = Fixture::new("A\nB\nC\n", matrix);

    let loose = ConvertConfig { quantile: Some(0.5), absolute_threshold: 0.0, ..Default::default() };
    let strict = ConvertConfig { quantile: Some(0.5), absolute_threshold: 100.0, ..Default::default() };
    let a = fx.run(&loose).unwrap();
    let table_a = fs::read_to_string(fx.path("edges.tsv")).unwrap();
    let b = fx.run(&strict).unwrap();
    let table_b = fs::read_to_string(fx.path("edges.tsv")).unwrap();

    assert_eq!(a.threshold, b.threshold);
    assert_eq!(a.threshold.source(), ThresholdSource::Quantile(0.5));
    // magnitudes 0.1..0.6 → median 0.35 → 0.4, 0.5, 0.6 survive
    assert_eq!(a.edges_kept, 3);
    assert_eq!(table_a, table_b);
}

#[test]
fn test_negative_absolute_threshold_keeps_all_off_diagonal() {
    let fx = Fixture::new("A\nB\nC\n", "1 0 0\n0 1 0\n0 0 1\n");
    let config = ConvertConfig { absolute_threshold: -1.0, ..Default::default() };
    let report = fx.run(&config).unwrap();
    assert_eq!(report.threshold.value(), 0.0);
    assert_eq!(report.edges_kept, 6);
}

#[test]
fn test_boundary_weight_is_kept() {
    let fx = Fixture::new("A\nB\n", "0 -0.25\n0.2499 0\n");
    let config = ConvertConfig { absolute_threshold: 0.25, decimals: 2, ..Default::default() };
    fx.run(&config).unwrap();
    assert_eq!(data_lines(&fx.path("edges.tsv")), vec!["B\tA\t-0.25"]);
}

// ============================================================================
// 4. Pair list
// ============================================================================

#[test]
fn test_pair_list_with_duplicate_gene_symbols() {
    // duplicated symbol "A" yields the same ordered pair twice
    let fx = Fixture::new("A\nB\nA\n", "0 1 1\n1 0 1\n1 1 0\n");
    let unique = ConvertConfig {
        pair_list_path: Some(fx.path("unique.ncol")),
        pair_list_unique: true,
        ..Default::default()
    };
    let report = fx.run(&unique).unwrap();
    assert_eq!(report.edges_kept, 6);
    assert_eq!(
        fs::read_to_string(fx.path("unique.ncol")).unwrap(),
        "B A\nA A\nA B\n"
    );

    let raw = ConvertConfig { pair_list_path: Some(fx.path("raw.ncol")), ..Default::default() };
    fx.run(&raw).unwrap();
    assert_eq!(fs::read_to_string(fx.path("raw.ncol")).unwrap().lines().count(), 6);
}
