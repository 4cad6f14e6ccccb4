use crate::cli::FormatArg;
use crate::render::{render_category_table, render_json, render_text};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use visa_checklist::checklist::import::{documents_from_path, requirements_from_path};
use visa_checklist::checklist::ChecklistReport;
use visa_checklist::config::{AppConfig, ReportFormat};
use visa_checklist::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Checklist export (.json or .csv)
    #[arg(long)]
    pub(crate) requirements: PathBuf,
    /// Uploaded-document export (.json or .csv)
    #[arg(long)]
    pub(crate) documents: PathBuf,
    /// Output format (defaults to APP_REPORT_FORMAT, then text)
    #[arg(long, value_enum)]
    pub(crate) format: Option<FormatArg>,
    /// Evaluation date shown in the report (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct NormalizeCategoryArgs {
    /// Stored category values, e.g. "Identity" or "Acme Corp Company Documents"
    #[arg(required = true)]
    pub(crate) categories: Vec<String>,
}

/// Returns whether the checklist is ready for the quality check.
pub(crate) fn run_check(args: CheckArgs, config: &AppConfig) -> Result<bool, AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    check_to(args, config, &mut out)
}

pub(crate) fn check_to<W: Write>(
    args: CheckArgs,
    config: &AppConfig,
    out: &mut W,
) -> Result<bool, AppError> {
    let CheckArgs {
        requirements,
        documents,
        format,
        today,
    } = args;

    let format = format.map(ReportFormat::from).unwrap_or(config.report.format);
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let requirement_list = requirements_from_path(&requirements)?;
    let document_list = documents_from_path(&documents)?;
    info!(
        requirements = requirement_list.len(),
        documents = document_list.len(),
        "loaded checklist exports"
    );

    let report = ChecklistReport::build(&requirement_list, &document_list);
    for category in &report.unrecognized_categories {
        warn!(%category, "unrecognized checklist category; passed through unchanged");
    }

    match format {
        ReportFormat::Text => render_text(out, &report, today)?,
        ReportFormat::Json => render_json(out, &report, today)?,
    }

    Ok(report.ready_for_quality_check)
}

pub(crate) fn run_normalize_category(args: NormalizeCategoryArgs) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_category_table(&mut out, &args.categories)?;
    Ok(())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
