use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use cmdargs::args::{parse, OrphanValueError, ReportFormat};
use cmdargs::config::{Config, ReportConfig};
use cmdargs::logging::init_tracing;

/// Parse command-line tokens and print how they were understood.
#[derive(Debug, Parser)]
#[command(name = "cmdargs", version)]
struct Cli {
    /// Title printed above the arguments
    #[arg(long)]
    title: Option<String>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Config file (default: <config dir>/cmdargs/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tokens to parse; put them after `--` to keep them away from cmdargs' own options
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if err.downcast_ref::<OrphanValueError>().is_some() {
                eprintln!("Values must follow a --key; single-dash flags never take values.");
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let report_config = apply_overrides(config.report, cli);

    let args = parse(&cli.tokens)?;
    tracing::info!(
        tokens = cli.tokens.len(),
        entries = args.len(),
        "Parsed tokens"
    );

    let mut report = args
        .report(report_config.format, &report_config.title)
        .context("Failed to serialize report")?;
    if !report.ends_with('\n') {
        report.push('\n');
    }
    Ok(report)
}

/// Command-line options win over the config file.
fn apply_overrides(mut report: ReportConfig, cli: &Cli) -> ReportConfig {
    if let Some(title) = &cli.title {
        report.title = title.clone();
    }
    if let Some(format) = cli.format {
        report.format = format;
    }
    report
}
