//! Wheel URL construction check
//!
//! Deployed notebooks build the wheel URL as `urljoin(base_href, relative)`
//! after making sure the base ends with a slash. This reproduces that join
//! with RFC 3986 resolution and compares it against the expected location.

use url::Url;

use super::{CheckFailure, CheckResult};
use crate::config::UrlSpec;

/// Join `relative` onto `base`, treating the base as a directory
pub fn join_url(base: &str, relative: &str) -> Result<Url, url::ParseError> {
    let mut base = base.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)?.join(relative)
}

/// Check that the joined URL equals the expected one
pub fn check_url_join(spec: &UrlSpec) -> CheckResult {
    let name = format!("url join: {}", spec.relative);

    let generated = match join_url(&spec.base, &spec.relative) {
        Ok(url) => url,
        Err(e) => {
            return CheckResult::fail(
                name,
                CheckFailure::UrlMismatch {
                    generated: None,
                    expected: spec.expected.clone(),
                    reason: Some(format!("invalid base '{}': {}", spec.base, e)),
                },
            );
        }
    };

    let matches = match Url::parse(&spec.expected) {
        Ok(expected) => expected == generated,
        Err(_) => generated.as_str() == spec.expected,
    };

    if matches {
        CheckResult::pass(name, "URL construction works correctly")
            .with_detail(format!("Generated: {}", generated))
    } else {
        CheckResult::fail(
            name,
            CheckFailure::UrlMismatch {
                generated: Some(generated.to_string()),
                expected: spec.expected.clone(),
                reason: None,
            },
        )
    }
}
