//! Bundle descriptor checks
//!
//! A descriptor is a notebook or script that installs the artifact in the
//! browser. Compatibility is plain substring containment: every required
//! pattern must occur somewhere in the file text.

use super::{CheckFailure, CheckResult};
use crate::config::RequiredPattern;
use crate::project::ProjectRoot;

/// Check that every required pattern occurs in the descriptor at `relative`
///
/// Patterns are tested in the given order. The first absent one becomes the
/// reported failure, any others are listed after it.
pub fn check_descriptor_patterns(
    root: &ProjectRoot,
    relative: &str,
    patterns: &[RequiredPattern],
) -> CheckResult {
    let name = format!("descriptor patterns: {}", relative);

    let content = match read_text(root, relative) {
        Ok(content) => content,
        Err(reason) => {
            return CheckResult::fail(
                name,
                CheckFailure::UnreadableDescriptor {
                    path: relative.to_string(),
                    reason,
                },
            );
        }
    };

    let mut missing = patterns
        .iter()
        .filter(|p| !content.contains(p.pattern.as_str()));

    match missing.next() {
        None => {
            let mut result =
                CheckResult::pass(name, format!("{} patterns found", patterns.len()));
            for pattern in patterns {
                result = result.with_detail(format!("found: {}", pattern.name));
            }
            result
        }
        Some(first) => CheckResult::fail(
            name,
            CheckFailure::MissingPattern {
                name: first.name.clone(),
                pattern: first.pattern.clone(),
                also_missing: missing.map(|p| p.name.clone()).collect(),
            },
        ),
    }
}

fn read_text(root: &ProjectRoot, relative: &str) -> std::result::Result<String, String> {
    let bytes = std::fs::read(root.join(relative)).map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|_| "not valid UTF-8 text".to_string())
}
