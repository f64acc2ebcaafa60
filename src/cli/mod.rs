//! Command-line parsing.
//!
//! Argument parsing and command dispatch stay separate from the statistics
//! code; flags are turned into `AnalysisConfig` / `GenerateConfig` in `app`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_THRESHOLD, Family, OutputFormat};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "distfit",
    version,
    about = "Rank normal, exponential and uniform fits for a numeric sample"
)]
pub struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit each family to each sample and print the KS and AICc rankings.
    ///
    /// Reads one number per line from each FILE, or from standard input when
    /// no files are given. Each file is analyzed independently.
    Analyze(AnalyzeArgs),
    /// Write synthetic normal, uniform and exponential samples.
    Generate(GenerateArgs),
}

/// Options for `distfit analyze`.
#[derive(Debug, Parser, Clone)]
pub struct AnalyzeArgs {
    /// Sample files (one number per line). Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Candidate family; repeat to select several (default: all, in order
    /// normal, exponential, uniform).
    #[arg(short = 'f', long = "family", value_enum)]
    pub families: Vec<Family>,

    /// Significance at which the dashed marker row is drawn.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write all reports to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Skip the explanatory header in text output.
    #[arg(long)]
    pub no_preamble: bool,
}

/// Options for `distfit generate`.
#[derive(Debug, Parser, Clone)]
pub struct GenerateArgs {
    /// Output directory.
    #[arg(short = 'o', long, default_value = "data")]
    pub out_dir: PathBuf,

    /// Values per file.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub size: usize,

    /// Random seed (omit for a fresh random stream).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Normal mean.
    #[arg(long, default_value_t = 100.0)]
    pub normal_mean: f64,

    /// Normal standard deviation.
    #[arg(long, default_value_t = 10.0)]
    pub normal_std: f64,

    /// Uniform lower bound.
    #[arg(long, default_value_t = 75.0)]
    pub uniform_low: f64,

    /// Uniform width (upper = low + width).
    #[arg(long, default_value_t = 50.0)]
    pub uniform_width: f64,

    /// Exponential scale (1 / rate), location 0.
    #[arg(long, default_value_t = 100.0)]
    pub exponential_scale: f64,
}
