//! Batch conversion over a directory tree of inference runs.
//!
//! Expected layout (names configurable through [`BatchConfig`]):
//!
//! ```text
//! <base_dir>/
//!   Phase1_early/
//!     early_TF_gene_order.txt        ← gene order shared by every run
//!     out_1/A.txt  → out_1/A_edge_list.tsv, out_1/input.ncol
//!     out_2/A.txt  → ...
//!   Phase2_late/
//!     ...
//! ```
//!
//! Runs are converted in-process, sequentially, in sorted directory order.
//! A broken run or unreadable phase is recorded and skipped; the batch
//! keeps going. The finished [`BatchReport`] serializes to JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ConvertConfig;
use crate::pipeline::{convert, ConversionReport};
use crate::{Error, Result};

/// Placeholder in [`BatchConfig::gene_order_template`] replaced by the
/// phase suffix (the phase directory name after its first `_`).
pub const SUFFIX_PLACEHOLDER: &str = "{suffix}";

/// Directory layout and per-run options for [`run_batch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub base_dir: PathBuf,
    /// Prefix of phase directories under `base_dir`.
    pub phase_prefix: String,
    /// Prefix of run directories inside each phase.
    pub run_prefix: String,
    /// Gene-order file name inside each phase directory.
    pub gene_order_template: String,
    pub matrix_file: String,
    pub edge_table_file: String,
    /// Pair-list file name; `None` disables the pair-list export.
    pub pair_list_file: Option<String>,
    /// Options applied to every run. `pair_list_path` is set per run.
    pub convert: ConvertConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            phase_prefix: "Phase".into(),
            run_prefix: "out_".into(),
            gene_order_template: format!("{SUFFIX_PLACEHOLDER}_TF_gene_order.txt"),
            matrix_file: "A.txt".into(),
            edge_table_file: "A_edge_list.tsv".into(),
            pair_list_file: Some("input.ncol".into()),
            convert: ConvertConfig {
                quantile: Some(0.99),
                decimals: 6,
                pair_list_unique: true,
                ..ConvertConfig::default()
            },
        }
    }
}

impl BatchConfig {
    pub fn from_json(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let cfg: BatchConfig = serde_json::from_str(&contents)?;
        cfg.convert.validate()?;
        Ok(cfg)
    }

    fn gene_order_file(&self, suffix: &str) -> String {
        self.gene_order_template.replace(SUFFIX_PLACEHOLDER, suffix)
    }
}

/// Result of one run directory.
#[derive(Debug, Serialize)]
pub enum RunOutcome {
    Converted(ConversionReport),
    /// Input files that were not found.
    MissingInputs(Vec<PathBuf>),
    /// Conversion error message.
    Failed(String),
}

#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub phase: String,
    pub run_dir: PathBuf,
    pub outcome: RunOutcome,
}

/// A phase directory that produced no runs, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedPhase {
    pub phase: String,
    pub reason: String,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub runs: Vec<RunRecord>,
    pub skipped_phases: Vec<SkippedPhase>,
}

impl BatchReport {
    pub fn converted(&self) -> usize {
        self.runs.iter().filter(|r| matches!(r.outcome, RunOutcome::Converted(_))).count()
    }

    pub fn failed(&self) -> usize {
        self.runs.len() - self.converted()
    }

    /// Pretty-printed JSON summary of every run and skipped phase.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Convert every run directory under `config.base_dir`.
///
/// Errors only when `base_dir` cannot be listed or holds no phase
/// directories; unreadable phases and per-run problems end up in the
/// [`BatchReport`].
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    config.convert.validate()?;

    let phases = sorted_subdirs(&config.base_dir, &config.phase_prefix)?;
    if phases.is_empty() {
        return Err(Error::Batch(format!(
            "no '{}*' directories found in {}",
            config.phase_prefix,
            config.base_dir.display()
        )));
    }
    info!(phases = phases.len(), base = %config.base_dir.display(), "batch started");

    let mut report = BatchReport::default();
    for phase_dir in phases {
        convert_phase(config, &phase_dir, &mut report);
    }

    info!(converted = report.converted(), failed = report.failed(), "batch finished");
    Ok(report)
}

/// Convert every run of one phase directory into `report`.
fn convert_phase(config: &BatchConfig, phase_dir: &Path, report: &mut BatchReport) {
    let phase = dir_name(phase_dir);
    let Some((_, suffix)) = phase.split_once('_') else {
        warn!(%phase, "cannot extract suffix from phase directory, skipping");
        report.skipped_phases.push(SkippedPhase {
            phase,
            reason: "no '_' suffix in directory name".into(),
        });
        return;
    };
    let gene_file = phase_dir.join(config.gene_order_file(suffix));

    let runs = match sorted_subdirs(phase_dir, &config.run_prefix) {
        Ok(runs) => runs,
        Err(e) => {
            warn!(%phase, error = %e, "cannot list phase directory, skipping");
            report.skipped_phases.push(SkippedPhase {
                phase,
                reason: format!("cannot list directory: {e}"),
            });
            return;
        }
    };
    if runs.is_empty() {
        warn!(%phase, "no run directories in phase");
        report.skipped_phases.push(SkippedPhase {
            phase,
            reason: format!("no '{}*' directories", config.run_prefix),
        });
        return;
    }

    for run_dir in runs {
        let outcome = convert_run(config, &gene_file, &run_dir);
        report.runs.push(RunRecord { phase: phase.clone(), run_dir, outcome });
    }
}

fn convert_run(config: &BatchConfig, gene_file: &Path, run_dir: &Path) -> RunOutcome {
    let matrix_file = run_dir.join(&config.matrix_file);
    let missing: Vec<PathBuf> = [gene_file, matrix_file.as_path()]
        .into_iter()
        .filter(|p| !p.is_file())
        .map(Path::to_path_buf)
        .collect();
    if !missing.is_empty() {
        warn!(run = %run_dir.display(), ?missing, "missing input files");
        return RunOutcome::MissingInputs(missing);
    }

    let mut run_config = config.convert.clone();
    run_config.pair_list_path = config.pair_list_file.as_ref().map(|name| run_dir.join(name));
    let output = run_dir.join(&config.edge_table_file);

    match convert(gene_file, &matrix_file, &output, &run_config) {
        Ok(report) => RunOutcome::Converted(report),
        Err(e) => {
            warn!(run = %run_dir.display(), error = %e, "conversion failed");
            RunOutcome::Failed(e.to_string())
        }
    }
}

/// Subdirectories of `dir` whose names start with `prefix`, sorted by path.
fn sorted_subdirs(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() && dir_name(&path).starts_with(prefix) {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
