//! Configuration file handling for deploycheck
//!
//! This module contains data structures for `deploycheck.yaml`:
//! - [`checks`]: artifact, bundle descriptor and URL declarations
//! - [`pipeline`]: wheel staging and notebook export settings
//!
//! Fixed names such as the "latest" wheel alias live here as configuration
//! values so every check receives them explicitly.

pub mod checks;
pub mod pipeline;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DeployCheckError, Result};

pub use checks::{ArtifactSpec, DescriptorSpec, RequiredPattern, UrlSpec};
pub use pipeline::{ExportConfig, StageConfig};

/// Configuration file looked up in the project root
pub const CONFIG_FILE: &str = "deploycheck.yaml";

/// Complete deploycheck configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DeployConfig {
    #[serde(default)]
    pub artifacts: Vec<ArtifactSpec>,

    #[serde(default)]
    pub descriptors: Vec<DescriptorSpec>,

    #[serde(default)]
    pub urls: Vec<UrlSpec>,

    #[serde(default)]
    pub stage: StageConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl DeployConfig {
    /// Built-in configuration used when the project has no `deploycheck.yaml`
    ///
    /// Mirrors the interactive_functions deployment: the latest wheel under
    /// `docs/assets/wheels`, two marimo notebooks at the project root that
    /// install it under Pyodide, and the GitHub Pages URL it is served from.
    pub fn builtin() -> Self {
        let stage = StageConfig::default();
        let patterns = vec![
            RequiredPattern::new("emscripten check", r#"sys.platform == "emscripten""#),
            RequiredPattern::new("wheel_url construction", "wheel_url = urljoin("),
            RequiredPattern::new("micropip install", "await micropip.install("),
            RequiredPattern::new(
                "interactive_functions import",
                format!("import {}", stage.package),
            ),
        ];
        let base = "https://harryeslick.github.io/interactive_functions/examples/dispersal_kernels/";
        let relative = format!("assets/wheels/{}", stage.latest_file_name());

        Self {
            artifacts: vec![ArtifactSpec::new(stage.latest_path()).with_archive_inspection()],
            descriptors: vec![
                DescriptorSpec::new("dispersal_kernels_marimo.py", patterns.clone()),
                DescriptorSpec::new("diminishing_marimo.py", patterns),
            ],
            urls: vec![UrlSpec {
                base: base.to_string(),
                expected: format!("{}{}", base, relative),
                relative,
            }],
            stage,
            export: ExportConfig::default(),
        }
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a project
    ///
    /// An explicit path must exist. Otherwise `deploycheck.yaml` in the
    /// project root is used when present, and the built-in configuration
    /// when it is not.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(DeployCheckError::ConfigNotFound {
                        path: path.display().to_string(),
                    });
                }
                path.to_path_buf()
            }
            None => {
                let default_path = root.join(CONFIG_FILE);
                if !default_path.is_file() {
                    tracing::debug!(
                        "no {} in {}, using built-in configuration",
                        CONFIG_FILE,
                        root.display()
                    );
                    return Ok(Self::builtin());
                }
                default_path
            }
        };

        Self::from_file(&path)
    }

    fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("loading configuration from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| DeployCheckError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_yaml(&content).map_err(|e| match e {
            DeployCheckError::ConfigParseFailed { reason, .. } => {
                DeployCheckError::ConfigParseFailed {
                    path: path.display().to_string(),
                    reason,
                }
            }
            other => other,
        })
    }

    /// Reject declarations that could never be checked meaningfully
    fn validate(&self) -> Result<()> {
        let paths = self
            .artifacts
            .iter()
            .map(|a| a.path.as_str())
            .chain(self.descriptors.iter().map(|d| d.path.as_str()));
        for path in paths {
            if path.trim().is_empty() {
                return Err(DeployCheckError::ConfigInvalid {
                    message: "check paths must not be empty".to_string(),
                });
            }
            if Path::new(path).is_absolute() {
                return Err(DeployCheckError::ConfigInvalid {
                    message: format!("'{}' must be relative to the project root", path),
                });
            }
        }

        for artifact in &self.artifacts {
            if let Some(name) = &artifact.name {
                if name.is_empty() || name.contains('/') {
                    return Err(DeployCheckError::ConfigInvalid {
                        message: format!(
                            "artifact name for {} must be a plain file name",
                            artifact.path
                        ),
                    });
                }
            }
        }

        for descriptor in &self.descriptors {
            if let Some(empty) = descriptor.patterns.iter().find(|p| p.pattern.is_empty()) {
                return Err(DeployCheckError::ConfigInvalid {
                    message: format!(
                        "pattern '{}' for {} is empty",
                        empty.name, descriptor.path
                    ),
                });
            }
        }

        if self.stage.package.is_empty() || self.stage.platform_tag.is_empty() {
            return Err(DeployCheckError::ConfigInvalid {
                message: "stage.package and stage.platform_tag must be set".to_string(),
            });
        }

        Ok(())
    }
}
