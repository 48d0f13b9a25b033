//! Settings for the build-side pipeline steps: wheel staging and notebook export

use serde::{Deserialize, Serialize};

/// Where built wheels come from and where the latest alias goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Distribution name as it appears in wheel file names
    pub package: String,

    /// Wheel platform tag (e.g. `py3-none-any`)
    pub platform_tag: String,

    /// Build output directory, relative to the project root
    pub dist_dir: String,

    /// Directory the latest alias is published to, relative to the project root
    pub dest_dir: String,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            package: "interactive_functions".to_string(),
            platform_tag: "py3-none-any".to_string(),
            dist_dir: "dist".to_string(),
            dest_dir: "docs/assets/wheels".to_string(),
        }
    }
}

impl StageConfig {
    /// Version-independent file name, e.g. `pkg-latest-py3-none-any.whl`
    pub fn latest_file_name(&self) -> String {
        format!("{}-latest-{}.whl", self.package, self.platform_tag)
    }

    /// Glob selecting versioned builds of the package in the dist directory
    pub fn build_glob(&self) -> String {
        format!("{}-*-{}.whl", self.package, self.platform_tag)
    }

    /// Latest alias path relative to the project root
    pub fn latest_path(&self) -> String {
        format!(
            "{}/{}",
            self.dest_dir.trim_end_matches('/'),
            self.latest_file_name()
        )
    }
}

/// Notebook export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory holding notebook sources, relative to the project root
    pub notebooks_dir: String,

    /// Python interpreter used to run `marimo export`
    pub python: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            notebooks_dir: "docs/notebooks".to_string(),
            python: "python".to_string(),
        }
    }
}
