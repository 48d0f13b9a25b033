//! Notebook export
//!
//! Each marimo notebook is rendered to a static HTML page next to its source
//! with `python -m marimo export <in.py> --to <in.html>`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ExportConfig;
use crate::error::{DeployCheckError, Result};

/// One planned export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ExportJob {
    fn new(input: PathBuf) -> Self {
        let output = input.with_extension("html");
        Self { input, output }
    }

    /// Exporter invocation for this notebook
    pub fn command(&self, python: &str) -> Command {
        let mut cmd = Command::new(python);
        cmd.args(["-m", "marimo", "export"])
            .arg(&self.input)
            .arg("--to")
            .arg(&self.output);
        cmd
    }

    /// Shell-style rendering of [`ExportJob::command`] for plans and logs
    pub fn describe(&self, python: &str) -> String {
        format!(
            "{} -m marimo export {} --to {}",
            python,
            self.input.display(),
            self.output.display()
        )
    }
}

/// Plan exports for every `*.py` file directly under `notebooks_dir`, by name
///
/// A missing directory yields an empty plan.
pub fn plan_exports(notebooks_dir: &Path) -> Result<Vec<ExportJob>> {
    if !notebooks_dir.is_dir() {
        tracing::debug!("{} does not exist", notebooks_dir.display());
        return Ok(Vec::new());
    }

    let mut inputs: Vec<PathBuf> = std::fs::read_dir(notebooks_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "py"))
        .collect();
    inputs.sort();

    Ok(inputs.into_iter().map(ExportJob::new).collect())
}

/// Run the planned exports in order, stopping at the first failure
pub fn run_exports(jobs: &[ExportJob], config: &ExportConfig) -> Result<()> {
    for job in jobs {
        tracing::debug!("running {}", job.describe(&config.python));
        let status = job.command(&config.python).status().map_err(|e| {
            DeployCheckError::ExportFailed {
                path: job.input.display().to_string(),
                reason: format!("failed to start {}: {}", config.python, e),
            }
        })?;

        if !status.success() {
            return Err(DeployCheckError::ExportFailed {
                path: job.input.display().to_string(),
                reason: format!("exporter exited with {}", status),
            });
        }
    }

    Ok(())
}
