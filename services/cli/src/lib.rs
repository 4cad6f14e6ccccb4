mod check;
mod cli;
mod render;

use std::process::ExitCode;

use visa_checklist::error::AppError;

pub fn run() -> Result<ExitCode, AppError> {
    cli::run()
}
