//! Deployment integrity checks
//!
//! Each check probes one target on disk (or one URL) and yields a
//! [`CheckResult`]. Failures are data, not errors: [`run_all`] attempts every
//! declared check and collects the outcomes into a [`ValidationReport`].
//!
//! - [`artifact`]: artifact presence, size and wheel structure
//! - [`descriptor`]: required patterns in notebook sources
//! - [`url`]: wheel URL construction from a page base href

pub mod artifact;
pub mod descriptor;
pub mod url;

use std::fmt;

use serde::Serialize;

use crate::config::DeployConfig;
use crate::project::ProjectRoot;

pub use artifact::{check_archive_structure, check_artifact_exists};
pub use descriptor::check_descriptor_patterns;
pub use self::url::check_url_join;

/// Why a single check failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum CheckFailure {
    /// No regular file at the expected path
    MissingArtifact { path: String },

    /// File present but zero bytes long
    EmptyArtifact { path: String },

    /// Artifact path does not end in the version-independent file name
    MisnamedArtifact { path: String, expected: String },

    /// First required pattern (in declared order) absent from the descriptor
    MissingPattern {
        name: String,
        pattern: String,
        also_missing: Vec<String>,
    },

    /// Descriptor missing or not UTF-8 text
    UnreadableDescriptor { path: String, reason: String },

    /// Artifact is not a usable wheel
    InvalidArchive { path: String, reason: String },

    /// Joined URL differs from the expected one
    UrlMismatch {
        generated: Option<String>,
        expected: String,
        reason: Option<String>,
    },
}

impl CheckFailure {
    /// Stable kind name used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            CheckFailure::MissingArtifact { .. } => "MissingArtifact",
            CheckFailure::EmptyArtifact { .. } => "EmptyArtifact",
            CheckFailure::MisnamedArtifact { .. } => "MisnamedArtifact",
            CheckFailure::MissingPattern { .. } => "MissingPattern",
            CheckFailure::UnreadableDescriptor { .. } => "UnreadableDescriptor",
            CheckFailure::InvalidArchive { .. } => "InvalidArchive",
            CheckFailure::UrlMismatch { .. } => "UrlMismatch",
        }
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckFailure::MissingArtifact { path } => {
                write!(f, "MissingArtifact: {} not found", path)
            }
            CheckFailure::EmptyArtifact { path } => {
                write!(f, "EmptyArtifact: {} is empty", path)
            }
            CheckFailure::MisnamedArtifact { path, expected } => {
                write!(f, "MisnamedArtifact: {} is not named {}", path, expected)
            }
            CheckFailure::MissingPattern {
                name,
                pattern,
                also_missing,
            } => {
                if name == pattern {
                    write!(f, "MissingPattern({}): not found", name)?;
                } else {
                    write!(f, "MissingPattern({}): '{}' not found", name, pattern)?;
                }
                if !also_missing.is_empty() {
                    write!(f, " (also missing: {})", also_missing.join(", "))?;
                }
                Ok(())
            }
            CheckFailure::UnreadableDescriptor { path, reason } => {
                write!(f, "UnreadableDescriptor: {}: {}", path, reason)
            }
            CheckFailure::InvalidArchive { path, reason } => {
                write!(f, "InvalidArchive: {}: {}", path, reason)
            }
            CheckFailure::UrlMismatch {
                generated,
                expected,
                reason,
            } => {
                write!(f, "UrlMismatch: expected {}", expected)?;
                if let Some(generated) = generated {
                    write!(f, ", generated {}", generated)?;
                }
                if let Some(reason) = reason {
                    write!(f, " ({})", reason)?;
                }
                Ok(())
            }
        }
    }
}

/// Outcome of one named check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<CheckFailure>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl CheckResult {
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
            failure: None,
            details: Vec::new(),
        }
    }

    pub fn fail(name: impl Into<String>, failure: CheckFailure) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: failure.to_string(),
            failure: Some(failure),
            details: Vec::new(),
        }
    }

    /// Attach an extra line shown under the check in text reports
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }
}

/// All results of one validation run, in execution order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    results: Vec<CheckResult>,
}

impl ValidationReport {
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// True iff every check passed; an empty report passes
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed_count()
    }

    /// Failures in execution order
    pub fn failures(&self) -> impl Iterator<Item = &CheckFailure> {
        self.results.iter().filter_map(|r| r.failure.as_ref())
    }
}

/// Run every check implied by the configuration
///
/// Artifact checks come first (each followed by its wheel structure check when
/// enabled and the artifact is present), then descriptor checks, then URL
/// checks. A failing check never stops the run.
pub fn run_all(root: &ProjectRoot, config: &DeployConfig) -> ValidationReport {
    let mut results = Vec::new();

    for artifact in &config.artifacts {
        let expected_name = artifact.expected_name(&config.stage);
        let exists = check_artifact_exists(root, &artifact.path, &expected_name);
        let present = exists.passed;
        results.push(exists);

        if artifact.inspect_archive {
            if present {
                results.push(check_archive_structure(root, &artifact.path));
            } else {
                tracing::debug!("skipping structure check for missing {}", artifact.path);
            }
        }
    }

    for descriptor in &config.descriptors {
        results.push(check_descriptor_patterns(
            root,
            &descriptor.path,
            &descriptor.patterns,
        ));
    }

    for url in &config.urls {
        results.push(check_url_join(url));
    }

    for result in &results {
        tracing::debug!(check = %result.name, passed = result.passed, "{}", result.message);
    }

    ValidationReport::new(results)
}
