//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - runs the analysis pipeline over every input
//! - prints text or JSON reports
//! - writes the optional JSON export

use std::io::Write;

use clap::Parser;
use tracing::debug;

use crate::cli::{AnalyzeArgs, Command, GenerateArgs};
use crate::domain::{AnalysisConfig, Family, GenerateConfig, OutputFormat, SampleReport};
use crate::error::AppError;
use crate::io::InputSource;

pub mod pipeline;

/// Entry point for the `distfit` binary.
pub fn run() -> Result<(), AppError> {
    // `distfit` and `distfit FILE...` behave like `distfit analyze ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Generate(args) => handle_generate(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = analysis_config_from_args(&args)?;
    let outcomes = pipeline::run_analysis(&config);
    let (reports, failures) = split_outcomes(outcomes, &mut std::io::stderr().lock());

    match config.format {
        OutputFormat::Text => {
            if config.preamble && !reports.is_empty() {
                println!("{}", crate::report::format_preamble(&config));
            }
            for report in &reports {
                println!("{}", crate::report::format_report(report));
            }
        }
        OutputFormat::Json => println!("{}", crate::report::format_json(&reports)?),
    }

    if let Some(path) = &config.export {
        crate::io::write_report_json(path, &reports)?;
    }

    // Each failure was already printed; summarize with the first one's exit code.
    match failures.first() {
        None => Ok(()),
        Some(first) => Err(AppError::new(
            first.exit_code(),
            format!(
                "{} of {} samples could not be analyzed.",
                failures.len(),
                failures.len() + reports.len()
            ),
        )),
    }
}

/// Separate successful reports from failures, printing each failure once.
fn split_outcomes<W: Write>(
    outcomes: Vec<(InputSource, Result<SampleReport, AppError>)>,
    err_out: &mut W,
) -> (Vec<SampleReport>, Vec<AppError>) {
    let mut reports: Vec<SampleReport> = Vec::with_capacity(outcomes.len());
    let mut failures: Vec<AppError> = Vec::new();
    for (source, outcome) in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(err) => {
                debug!(source = %source, "sample rejected");
                let _ = writeln!(err_out, "{err}");
                failures.push(err);
            }
        }
    }
    (reports, failures)
}

fn handle_generate(args: GenerateArgs) -> Result<(), AppError> {
    let config = generate_config_from_args(&args);
    for path in crate::data::write_samples(&config)? {
        println!("{}", path.display());
    }
    Ok(())
}

pub fn analysis_config_from_args(args: &AnalyzeArgs) -> Result<AnalysisConfig, AppError> {
    if !(args.threshold.is_finite() && (0.0..=1.0).contains(&args.threshold)) {
        return Err(AppError::new(2, format!("Invalid threshold {} (must be in [0, 1]).", args.threshold)));
    }

    let mut families: Vec<Family> = Vec::new();
    for &family in &args.families {
        if !families.contains(&family) {
            families.push(family);
        }
    }
    if families.is_empty() {
        families = Family::ALL.to_vec();
    }

    Ok(AnalysisConfig {
        inputs: args.files.clone(),
        families,
        threshold: args.threshold,
        format: args.format,
        export: args.export.clone(),
        preamble: !args.no_preamble,
    })
}

pub fn generate_config_from_args(args: &GenerateArgs) -> GenerateConfig {
    GenerateConfig {
        out_dir: args.out_dir.clone(),
        size: args.size,
        seed: args.seed,
        normal_mean: args.normal_mean,
        normal_std: args.normal_std,
        uniform_low: args.uniform_low,
        uniform_width: args.uniform_width,
        exponential_scale: args.exponential_scale,
    }
}

/// Rewrite argv so `distfit` defaults to `distfit analyze`.
///
/// Rules:
/// - `distfit`                          -> `distfit analyze` (stdin)
/// - `distfit a.txt b.txt`              -> `distfit analyze a.txt b.txt`
/// - `distfit --family normal a.txt`    -> `distfit analyze --family normal a.txt`
/// - `distfit --help/--version/-h/-V`   -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("analyze".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    let is_subcommand = matches!(arg1.as_str(), "analyze" | "generate");
    if is_top_level_help_or_version || is_subcommand {
        return argv;
    }

    argv.insert(1, "analyze".to_string());
    argv
}
