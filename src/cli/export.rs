use clap::Parser;

/// Arguments for the export command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Export every notebook to HTML:\n    deploycheck export\n\n\
                  Use a specific interpreter:\n    deploycheck export --python .venv/bin/python\n\n\
                  List the export commands only:\n    deploycheck export --dry-run")]
pub struct ExportArgs {
    /// Python interpreter running marimo (overrides configuration)
    #[arg(long)]
    pub python: Option<String>,

    /// Print the export commands without running them
    #[arg(long)]
    pub dry_run: bool,
}
