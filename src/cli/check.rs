use clap::{Parser, ValueEnum};

/// Report output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line per check plus a summary
    #[default]
    Text,
    /// The same report as a JSON document
    Json,
}

/// Arguments for the check command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the deployment in the current directory:\n    deploycheck check\n\n\
                  Validate another project with its own configuration:\n    deploycheck -r ../site -c ../site/ci/deploycheck.yaml check\n\n\
                  Show sizes, digests and matched patterns:\n    deploycheck check --detailed\n\n\
                  Emit JSON for CI:\n    deploycheck check --format json")]
pub struct CheckArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Show detail lines under each check
    #[arg(long)]
    pub detailed: bool,
}
