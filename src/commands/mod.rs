//! Command implementations for deploycheck CLI

pub mod check;
pub mod completions;
pub mod export;
pub mod stage;
pub mod version;

use std::path::PathBuf;

use crate::config::DeployConfig;
use crate::error::Result;
use crate::project::ProjectRoot;

/// Validate the project root, then load its configuration
///
/// The root is checked first so an invalid root is reported before anything
/// else is attempted.
pub fn load_project(
    root: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(ProjectRoot, DeployConfig)> {
    let root = ProjectRoot::from_arg(root)?;
    let config = DeployConfig::load(root.path(), config.as_deref())?;
    Ok((root, config))
}
