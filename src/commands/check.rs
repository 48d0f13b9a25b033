//! Check command implementation
//!
//! Runs every configured check and prints the report. The return value tells
//! the caller whether the deployment passed; failed checks are not errors.

use std::path::PathBuf;

use crate::checks;
use crate::cli::{CheckArgs, ReportFormat};
use crate::error::Result;
use crate::ui::{JsonFormatter, ReportFormatter, TextFormatter};

/// Run check command, returning whether every check passed
pub fn run(root: Option<PathBuf>, config: Option<PathBuf>, args: CheckArgs) -> Result<bool> {
    let (root, config) = super::load_project(root, config)?;

    tracing::debug!(
        artifacts = config.artifacts.len(),
        descriptors = config.descriptors.len(),
        urls = config.urls.len(),
        "running checks in {}",
        root.path().display()
    );
    let report = checks::run_all(&root, &config);
    for failure in report.failures() {
        tracing::info!(kind = failure.kind(), "check failed");
    }

    let formatter: Box<dyn ReportFormatter> = match args.format {
        ReportFormat::Text => Box::new(TextFormatter {
            detailed: args.detailed,
        }),
        ReportFormat::Json => Box::new(JsonFormatter),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    formatter.format_report(&mut out, root.path(), &report)?;

    Ok(report.passed())
}
