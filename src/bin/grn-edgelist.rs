//! `grn-edgelist` — command-line front end.
//!
//! # Usage
//!
//! ```bash
//! grn-edgelist convert tf_order.txt A.txt A_edge_list.tsv --quantile 0.99 \
//!     --decimals 6 --ncol-file input.ncol --ncol-unique
//! grn-edgelist batch --base-dir runs/ --config batch.json --report batch_report.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use grn_edgelist::batch::RunOutcome;
use grn_edgelist::{BatchConfig, ConvertConfig, Orientation};

#[derive(Parser, Debug)]
#[command(
    name = "grn-edgelist",
    version,
    about = "Convert a GRN weight matrix into a weighted edge list and .ncol pair list",
    long_about = None
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one matrix file.
    Convert(ConvertArgs),
    /// Convert every `out_*/A.txt` below a directory of `Phase*` folders.
    Batch(BatchArgs),
}

#[derive(clap::Args, Debug)]
struct ConvertArgs {
    /// Gene list in exactly the same order as the matrix rows/columns.
    tf_file: PathBuf,
    /// G×G weight matrix (whitespace-delimited).
    matrix_file: PathBuf,
    /// Edge list TSV path.
    output_file: PathBuf,

    /// JSON file with conversion options; flags below override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Absolute |weight| threshold [default: 0.0].
    #[arg(long, allow_hyphen_values = true)]
    abs_threshold: Option<f64>,

    /// Quantile (0–1) of |weight| as threshold (overrides --abs-threshold).
    #[arg(long)]
    quantile: Option<f64>,

    /// Decimal places for weights [default: 10].
    #[arg(long)]
    decimals: Option<usize>,

    /// Also write a NETCONTROL-compatible .ncol pair list (source target).
    #[arg(long, value_name = "FILE")]
    ncol_file: Option<PathBuf>,

    /// Deduplicate identical directed edges in the .ncol file.
    #[arg(long, default_value_t = false)]
    ncol_unique: bool,

    /// Matrix convention: row-target (row = target, column = source) or row-source.
    #[arg(long, value_name = "ORIENTATION")]
    orientation: Option<Orientation>,
}

#[derive(clap::Args, Debug)]
struct BatchArgs {
    /// JSON batch configuration (layout plus conversion options).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the `Phase*` folders (overrides the config).
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Write a JSON summary of every run to this file.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Command::Convert(args) => run_convert(args),
        Command::Batch(args) => run_batch(args),
    }
}

fn run_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ConvertConfig::from_json(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConvertConfig::default(),
    };
    if let Some(v) = args.abs_threshold {
        config.absolute_threshold = v;
    }
    if args.quantile.is_some() {
        config.quantile = args.quantile;
    }
    if let Some(d) = args.decimals {
        config.decimals = d;
    }
    if args.ncol_file.is_some() {
        config.pair_list_path = args.ncol_file;
    }
    if args.ncol_unique {
        config.pair_list_unique = true;
    }
    if let Some(o) = args.orientation {
        config.orientation = o;
    }

    let report = grn_edgelist::convert(&args.tf_file, &args.matrix_file, &args.output_file, &config)
        .with_context(|| format!("converting {}", args.matrix_file.display()))?;

    info!(
        "[OK] genes={}  edges_kept={}  threshold={:.6}",
        report.genes,
        report.edges_kept,
        report.threshold.value()
    );
    if let Some(path) = &report.pair_list {
        info!("[OK] wrote: {}", path.display());
    }
    Ok(())
}

fn run_batch(args: BatchArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => BatchConfig::from_json(path)
            .with_context(|| format!("loading batch config {}", path.display()))?,
        None => BatchConfig::default(),
    };
    if let Some(dir) = args.base_dir {
        config.base_dir = dir;
    }

    let report = grn_edgelist::run_batch(&config)?;
    for run in &report.runs {
        match &run.outcome {
            RunOutcome::Converted(r) => info!(
                "{} {}: {} edges (threshold {:.6})",
                run.phase,
                run.run_dir.display(),
                r.edges_kept,
                r.threshold.value()
            ),
            RunOutcome::MissingInputs(paths) => {
                warn!("{} {}: missing inputs {:?}", run.phase, run.run_dir.display(), paths)
            }
            RunOutcome::Failed(msg) => {
                warn!("{} {}: failed: {}", run.phase, run.run_dir.display(), msg)
            }
        }
    }
    info!("converted {} run(s), {} skipped or failed", report.converted(), report.failed());

    if let Some(path) = &args.report {
        std::fs::write(path, report.to_json()?)
            .with_context(|| format!("writing batch report {}", path.display()))?;
        info!("[OK] wrote: {}", path.display());
    }
    Ok(())
}
