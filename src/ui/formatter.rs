//! Formatters for validation reports
//!
//! The text format is the primary, human-facing output. The JSON format
//! carries the same report for scripts and CI annotations.

use std::io::Write;
use std::path::Path;

use console::Style;
use serde::Serialize;

use crate::checks::{CheckResult, ValidationReport};

/// Formatter trait for rendering a validation report
pub trait ReportFormatter {
    fn format_report(
        &self,
        out: &mut dyn Write,
        root: &Path,
        report: &ValidationReport,
    ) -> std::io::Result<()>;
}

/// One line per check, then a summary line
pub struct TextFormatter {
    /// Also print detail lines (sizes, digests, found patterns)
    pub detailed: bool,
}

impl ReportFormatter for TextFormatter {
    fn format_report(
        &self,
        out: &mut dyn Write,
        root: &Path,
        report: &ValidationReport,
    ) -> std::io::Result<()> {
        writeln!(
            out,
            "{} {}",
            Style::new().bold().apply_to("Deployment validation:"),
            root.display()
        )?;
        writeln!(out)?;

        for result in report.results() {
            self.format_result(out, result)?;
        }

        writeln!(out)?;
        let summary = format!(
            "{} passed, {} failed",
            report.passed_count(),
            report.failed_count()
        );
        if report.passed() {
            writeln!(out, "{}", Style::new().bold().green().apply_to(summary))
        } else {
            writeln!(out, "{}", Style::new().bold().red().apply_to(summary))
        }
    }
}

impl TextFormatter {
    fn format_result(&self, out: &mut dyn Write, result: &CheckResult) -> std::io::Result<()> {
        let marker = if result.passed {
            Style::new().green().bold().apply_to("PASS")
        } else {
            Style::new().red().bold().apply_to("FAIL")
        };
        writeln!(out, "  {}  {}: {}", marker, result.name, result.message)?;

        if self.detailed {
            for detail in &result.details {
                writeln!(out, "        {}", Style::new().dim().apply_to(detail))?;
            }
        }
        Ok(())
    }
}

/// JSON formatter for programmatic output
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: String,
    passed: bool,
    total: usize,
    passed_count: usize,
    failed_count: usize,
    checks: &'a [CheckResult],
}

impl ReportFormatter for JsonFormatter {
    fn format_report(
        &self,
        out: &mut dyn Write,
        root: &Path,
        report: &ValidationReport,
    ) -> std::io::Result<()> {
        let json = JsonReport {
            root: root.display().to_string(),
            passed: report.passed(),
            total: report.results().len(),
            passed_count: report.passed_count(),
            failed_count: report.failed_count(),
            checks: report.results(),
        };
        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)
    }
}
