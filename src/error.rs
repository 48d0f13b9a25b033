//! Error types and handling for deploycheck
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Failed checks are not errors: they are recorded in the validation report.
//! The variants below cover the conditions that stop a run before (or instead
//! of) producing a report.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for deploycheck operations
#[derive(Error, Diagnostic, Debug)]
pub enum DeployCheckError {
    // Project root errors
    #[error("Invalid project root: {path}: {reason}")]
    #[diagnostic(
        code(deploycheck::root::invalid),
        help("Pass an existing, readable directory with --root or DEPLOYCHECK_ROOT")
    )]
    InvalidProjectRoot { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(deploycheck::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(deploycheck::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(deploycheck::config::parse_failed),
        help("See deploycheck.yaml in the project documentation for the expected layout")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(deploycheck::config::invalid))]
    ConfigInvalid { message: String },

    // Staging errors
    #[error("Build output directory not found: {path}")]
    #[diagnostic(
        code(deploycheck::stage::dist_not_found),
        help("Build the wheel first, e.g. 'python -m build --wheel'")
    )]
    DistDirNotFound { path: String },

    #[error("No artifact matching '{pattern}' in {dir}")]
    #[diagnostic(
        code(deploycheck::stage::no_match),
        help("Check the package name and platform tag in the stage configuration")
    )]
    NoMatchingArtifact { pattern: String, dir: String },

    // Export errors
    #[error("Notebook export failed for {path}: {reason}")]
    #[diagnostic(
        code(deploycheck::export::failed),
        help("Make sure marimo is installed in the selected Python environment")
    )]
    ExportFailed { path: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(deploycheck::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(deploycheck::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(deploycheck::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(deploycheck::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DeployCheckError {
    fn from(err: std::io::Error) -> Self {
        DeployCheckError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DeployCheckError {
    fn from(err: serde_yaml::Error) -> Self {
        DeployCheckError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DeployCheckError>;
