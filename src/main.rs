//! deploycheck - artifact-integrity checker
//!
//! Verifies that a browser-deployed notebook bundle is internally consistent:
//! the packaged wheel sits at the path the notebooks expect, and every
//! notebook's install logic references it correctly.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod checks;
mod cli;
mod commands;
mod config;
mod error;
mod hash;
mod pipeline;
mod project;
mod ui;

use cli::{CheckArgs, Cli, Commands};

/// Exit code for a report with failed checks
const EXIT_CHECKS_FAILED: i32 = 1;

/// Exit code for errors that prevent a report (invalid root, bad config, ...)
const EXIT_ERROR: i32 = 2;

/// Route diagnostics to stderr so reports on stdout stay clean
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("deploycheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Check(CheckArgs::default()));

    let result = match command {
        Commands::Check(args) => commands::check::run(cli.root, cli.config, args)
            .map(|passed| if passed { 0 } else { EXIT_CHECKS_FAILED }),
        Commands::Stage(args) => commands::stage::run(cli.root, cli.config, args).map(|()| 0),
        Commands::Export(args) => commands::export::run(cli.root, cli.config, args).map(|()| 0),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}
