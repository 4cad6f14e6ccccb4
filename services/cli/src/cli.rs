use crate::check::{run_check, run_normalize_category, CheckArgs, NormalizeCategoryArgs};
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use visa_checklist::config::{AppConfig, ReportFormat};
use visa_checklist::error::AppError;
use visa_checklist::telemetry;

/// Exit status when the checklist still has outstanding mandatory documents.
const NOT_READY_EXIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "visa-checklist",
    about = "Reconcile visa application checklists against uploaded documents",
    version
)]
struct Cli {
    /// Override the configured log level/filter (APP_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether every mandatory checklist item has a reviewed document
    Check(CheckArgs),
    /// Show how stored category codes map to display labels
    NormalizeCategory(NormalizeCategoryArgs),
}

/// Output format flag; mirrors `APP_REPORT_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

pub(crate) fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }

    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Check(args) => {
            let ready = run_check(args, &config)?;
            Ok(if ready {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(NOT_READY_EXIT)
            })
        }
        Command::NormalizeCategory(args) => {
            run_normalize_category(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
