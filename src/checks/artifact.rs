//! Artifact checks: presence, size and wheel structure

use std::fs::File;
use std::path::Path;

use zip::ZipArchive;

use super::{CheckFailure, CheckResult};
use crate::hash;
use crate::project::ProjectRoot;

/// Check that a non-empty regular file named `expected_name` exists at `relative`
///
/// The path is probed as given; no globbing or version resolution happens
/// here, that is the staging step's job. A path whose file name differs from
/// the version-independent alias fails before the file system is touched.
pub fn check_artifact_exists(
    root: &ProjectRoot,
    relative: &str,
    expected_name: &str,
) -> CheckResult {
    let name = format!("artifact exists: {}", relative);

    let file_name = Path::new(relative).file_name().and_then(|n| n.to_str());
    if file_name != Some(expected_name) {
        return CheckResult::fail(
            name,
            CheckFailure::MisnamedArtifact {
                path: relative.to_string(),
                expected: expected_name.to_string(),
            },
        );
    }

    let path = root.join(relative);

    let metadata = match std::fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() => metadata,
        _ => {
            return CheckResult::fail(
                name,
                CheckFailure::MissingArtifact {
                    path: relative.to_string(),
                },
            );
        }
    };

    let size = metadata.len();
    if size == 0 {
        return CheckResult::fail(
            name,
            CheckFailure::EmptyArtifact {
                path: relative.to_string(),
            },
        );
    }

    let result = CheckResult::pass(name, format!("{} ({} bytes)", relative, size))
        .with_detail(format!("Size: {} bytes", size));

    match hash::hash_file(&path) {
        Ok(digest) => result.with_detail(format!("Digest: {}", digest)),
        Err(e) => {
            tracing::warn!("could not hash {}: {}", path.display(), e);
            result
        }
    }
}

/// Check that the artifact is a wheel with a package init and metadata
pub fn check_archive_structure(root: &ProjectRoot, relative: &str) -> CheckResult {
    let name = format!("wheel structure: {}", relative);
    let invalid = |reason: String| CheckFailure::InvalidArchive {
        path: relative.to_string(),
        reason,
    };

    let file = match File::open(root.join(relative)) {
        Ok(file) => file,
        Err(e) => return CheckResult::fail(name, invalid(e.to_string())),
    };

    let archive = match ZipArchive::new(file) {
        Ok(archive) => archive,
        Err(e) => {
            return CheckResult::fail(name, invalid(format!("corrupted archive ({})", e)));
        }
    };

    let has_init = archive.file_names().any(|f| f.contains("__init__.py"));
    let has_metadata = archive.file_names().any(|f| f.contains("METADATA"));

    match (has_init, has_metadata) {
        (true, true) => CheckResult::pass(
            name,
            format!("{} entries, package and metadata present", archive.len()),
        ),
        (false, _) => CheckResult::fail(name, invalid("no __init__.py entry".to_string())),
        (true, false) => CheckResult::fail(name, invalid("no METADATA entry".to_string())),
    }
}
