//! Project root resolution
//!
//! Every path in the configuration is relative to the project root, so the
//! root is validated once, before any check runs.

use std::path::{Path, PathBuf};

use crate::error::{DeployCheckError, Result};

/// A validated project root directory
#[derive(Debug, Clone)]
pub struct ProjectRoot {
    path: PathBuf,
}

impl ProjectRoot {
    /// Open a project root, failing if it is missing, not a directory, or unreadable
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |reason: String| DeployCheckError::InvalidProjectRoot {
            path: path.display().to_string(),
            reason,
        };

        let metadata = std::fs::metadata(path).map_err(|e| invalid(e.to_string()))?;
        if !metadata.is_dir() {
            return Err(invalid("not a directory".to_string()));
        }
        std::fs::read_dir(path).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Resolve the CLI argument (or current directory) to a project root
    pub fn from_arg(root: Option<PathBuf>) -> Result<Self> {
        match root {
            Some(path) => Self::open(path),
            None => {
                let cwd = std::env::current_dir().map_err(|e| DeployCheckError::IoError {
                    message: format!("Failed to get current directory: {}", e),
                })?;
                Self::open(cwd)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Join a configuration path onto the root
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path.join(relative)
    }
}
