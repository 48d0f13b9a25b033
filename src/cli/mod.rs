//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - check: Check command arguments
//! - stage: Stage command arguments
//! - export: Export command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod export;
pub mod stage;

pub use check::{CheckArgs, ReportFormat};
pub use completions::CompletionsArgs;
pub use export::ExportArgs;
pub use stage::StageArgs;

/// deploycheck - artifact-integrity checker
///
/// Verify that a notebook deployment bundle is internally consistent.
#[derive(Parser, Debug)]
#[command(
    name = "deploycheck",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Artifact-integrity checker for browser-deployed notebook bundles",
    long_about = "deploycheck verifies, without running any notebook or browser runtime, that the \
                  packaged wheel sits at the path deployed notebooks expect and that every notebook \
                  installs it correctly. Runs 'check' when no command is given.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  deploycheck                      \x1b[90m# Validate the current project\x1b[0m\n   \
                  deploycheck check --format json  \x1b[90m# Machine-readable report\x1b[0m\n   \
                  deploycheck stage                \x1b[90m# Publish newest wheel as latest\x1b[0m\n   \
                  deploycheck export --dry-run     \x1b[90m# List notebook export commands\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "DEPLOYCHECK_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to deploycheck.yaml in the project root)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the deployment bundle (default)
    Check(CheckArgs),

    /// Publish the newest built wheel under its latest alias
    Stage(StageArgs),

    /// Export notebooks to static HTML with marimo
    Export(ExportArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
