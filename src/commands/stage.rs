//! Stage command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::StageArgs;
use crate::error::Result;
use crate::pipeline::{StageStatus, stage_artifact};

/// Run stage command
pub fn run(root: Option<PathBuf>, config: Option<PathBuf>, args: StageArgs) -> Result<()> {
    let (root, config) = super::load_project(root, config)?;
    let outcome = stage_artifact(&root, &config.stage, args.dry_run)?;

    let status = match outcome.status {
        StageStatus::Copied => Style::new().green().bold().apply_to("Staged"),
        StageStatus::UpToDate => Style::new().green().apply_to("Up to date"),
        StageStatus::Planned => Style::new().yellow().bold().apply_to("Would stage"),
    };
    println!(
        "{} {} -> {}",
        status,
        outcome.source.display(),
        outcome.destination.display()
    );
    println!("  {} {} bytes", Style::new().bold().apply_to("Size:"), outcome.size);
    println!("  {} {}", Style::new().bold().apply_to("Digest:"), outcome.digest);

    Ok(())
}
