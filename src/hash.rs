//! BLAKE3 digests for artifact reporting and staging

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{DeployCheckError, Result};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| DeployCheckError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| DeployCheckError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// Whether two files have identical contents
///
/// A missing `other` counts as different.
pub fn same_contents(path: &Path, other: &Path) -> Result<bool> {
    if !other.is_file() {
        return Ok(false);
    }
    if std::fs::metadata(path)?.len() != std::fs::metadata(other)?.len() {
        return Ok(false);
    }
    Ok(hash_file(path)? == hash_file(other)?)
}
