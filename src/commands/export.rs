//! Export command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::ExportArgs;
use crate::error::Result;
use crate::pipeline::{plan_exports, run_exports};

/// Run export command
pub fn run(root: Option<PathBuf>, config: Option<PathBuf>, args: ExportArgs) -> Result<()> {
    let (root, mut config) = super::load_project(root, config)?;
    if let Some(python) = args.python {
        config.export.python = python;
    }

    let notebooks_dir = root.join(&config.export.notebooks_dir);
    let jobs = plan_exports(&notebooks_dir)?;
    if jobs.is_empty() {
        println!(
            "No .py files found under {}; nothing to export.",
            config.export.notebooks_dir
        );
        return Ok(());
    }

    for job in &jobs {
        let label = if args.dry_run { "Would run" } else { "Exporting" };
        println!(
            "{} {}",
            Style::new().bold().apply_to(label),
            job.describe(&config.export.python)
        );
    }

    if args.dry_run {
        return Ok(());
    }

    run_exports(&jobs, &config.export)?;
    println!(
        "{}",
        Style::new()
            .green()
            .bold()
            .apply_to(format!("Exported {} notebook(s)", jobs.len()))
    );

    Ok(())
}
