//! Wheel staging
//!
//! The packaging step writes versioned wheels such as
//! `pkg-0.3.1-py3-none-any.whl` into the build output directory. Deployed
//! notebooks only know the version-independent alias
//! `pkg-latest-py3-none-any.whl`, so the newest build is copied there.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::StageConfig;
use crate::error::{DeployCheckError, Result};
use crate::hash;
use crate::project::ProjectRoot;

/// What staging did (or would do) with the latest alias
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Copied,
    UpToDate,
    Planned,
}

/// Result of a staging run
#[derive(Debug, Clone)]
pub struct StageOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub size: u64,
    pub digest: String,
    pub status: StageStatus,
}

/// Find the newest versioned wheel in `dist_dir`
///
/// Candidates are regular files directly inside `dist_dir` whose name matches
/// the configured build glob, excluding the latest alias itself. The most
/// recently modified wins; equal times fall back to the greatest file name.
pub fn resolve_latest_artifact(dist_dir: &Path, stage: &StageConfig) -> Result<PathBuf> {
    if !dist_dir.is_dir() {
        return Err(DeployCheckError::DistDirNotFound {
            path: dist_dir.display().to_string(),
        });
    }

    let pattern = stage.build_glob();
    let glob = Glob::new(&pattern).map_err(|e| DeployCheckError::ConfigInvalid {
        message: format!("invalid artifact pattern '{}': {}", pattern, e),
    })?;
    let latest_name = stage.latest_file_name();

    let mut candidates: Vec<(SystemTime, String, PathBuf)> = Vec::new();
    for entry in WalkDir::new(dist_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let file_name = entry.file_name().to_string_lossy().to_string();
        if file_name == latest_name {
            continue;
        }
        if glob.matched(&CandidatePath::from(file_name.as_str())).is_none() {
            tracing::debug!("ignoring {} (does not match {})", file_name, pattern);
            continue;
        }

        let modified = entry
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        candidates.push((modified, file_name, entry.into_path()));
    }

    candidates
        .into_iter()
        .max_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
        .map(|(_, _, path)| path)
        .ok_or_else(|| DeployCheckError::NoMatchingArtifact {
            pattern: pattern.clone(),
            dir: dist_dir.display().to_string(),
        })
}

/// Publish the newest build under the latest alias
///
/// With `dry_run` nothing is written. An alias that already has identical
/// contents is left untouched.
pub fn stage_artifact(
    root: &ProjectRoot,
    stage: &StageConfig,
    dry_run: bool,
) -> Result<StageOutcome> {
    let source = resolve_latest_artifact(&root.join(&stage.dist_dir), stage)?;
    let dest_dir = root.join(&stage.dest_dir);
    let destination = dest_dir.join(stage.latest_file_name());

    let size = std::fs::metadata(&source)?.len();
    let digest = hash::hash_file(&source)?;

    let status = if dry_run {
        StageStatus::Planned
    } else if hash::same_contents(&source, &destination)? {
        StageStatus::UpToDate
    } else {
        std::fs::create_dir_all(&dest_dir).map_err(|e| DeployCheckError::FileWriteFailed {
            path: dest_dir.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::copy(&source, &destination).map_err(|e| DeployCheckError::FileWriteFailed {
            path: destination.display().to_string(),
            reason: e.to_string(),
        })?;
        StageStatus::Copied
    };

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        ?status,
        "staged artifact"
    );

    Ok(StageOutcome {
        source,
        destination,
        size,
        digest,
        status,
    })
}
