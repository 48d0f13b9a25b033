//! Check declarations: artifacts, bundle descriptors and URL joins

use serde::{Deserialize, Serialize};

use super::StageConfig;

/// An artifact expected at a fixed, version-independent path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// Path relative to the project root
    pub path: String,

    /// Required file name; the stage's latest alias when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Open the artifact as a wheel and check its structure
    #[serde(default)]
    pub inspect_archive: bool,
}

impl ArtifactSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            inspect_archive: false,
        }
    }

    pub fn with_archive_inspection(mut self) -> Self {
        self.inspect_archive = true;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// File name the artifact path must end in
    pub fn expected_name(&self, stage: &StageConfig) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| stage.latest_file_name())
    }
}

/// A notebook or script that must reference the artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorSpec {
    /// Path relative to the project root
    pub path: String,

    /// Substrings that must all appear in the file, checked in this order
    #[serde(default)]
    pub patterns: Vec<RequiredPattern>,
}

impl DescriptorSpec {
    pub fn new(path: impl Into<String>, patterns: Vec<RequiredPattern>) -> Self {
        Self {
            path: path.into(),
            patterns,
        }
    }
}

/// A named literal substring
///
/// In YAML either a bare string (named after itself) or a
/// `{ name, pattern }` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PatternEntry")]
pub struct RequiredPattern {
    pub name: String,
    pub pattern: String,
}

impl RequiredPattern {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Pattern labelled with its own text
    pub fn literal(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        Self {
            name: pattern.clone(),
            pattern,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PatternEntry {
    Bare(String),
    Named { name: String, pattern: String },
}

impl From<PatternEntry> for RequiredPattern {
    fn from(entry: PatternEntry) -> Self {
        match entry {
            PatternEntry::Bare(pattern) => RequiredPattern::literal(pattern),
            PatternEntry::Named { name, pattern } => RequiredPattern::new(name, pattern),
        }
    }
}

/// A URL the deployed page must be able to build for the artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSpec {
    /// Page base href; a trailing slash is added when missing
    pub base: String,

    /// Artifact path relative to the base
    pub relative: String,

    /// Fully joined URL the page must arrive at
    pub expected: String,
}
