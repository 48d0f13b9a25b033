use clap::Parser;

/// Arguments for the stage command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Publish the newest wheel from dist/ as the latest alias:\n    deploycheck stage\n\n\
                  Show what would be copied:\n    deploycheck stage --dry-run")]
pub struct StageArgs {
    /// Resolve the artifact and print the plan without copying
    #[arg(long)]
    pub dry_run: bool,
}
