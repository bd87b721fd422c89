//! Artifact checksum calculation.
//!
//! Maven repositories keep `.md5` and `.sha1` sidecars next to every file;
//! the SHA-256 digest is reported back to the user.
//! Digests are computed over the whole file content at once.

use crate::bundler::{Result, error::ErrorExt};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Hex digests of one file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Checksums {
    /// MD5, hex encoded (32 characters)
    pub md5: String,
    /// SHA-1, hex encoded (40 characters)
    pub sha1: String,
    /// SHA-256, hex encoded (64 characters)
    pub sha256: String,
}

/// Calculates MD5, SHA-1 and SHA-256 of a file.
pub fn calculate_checksums(path: &Path) -> Result<Checksums> {
    let content = std::fs::read(path).fs_context("reading file for hash calculation", path)?;

    Ok(Checksums {
        md5: format!("{:x}", md5::compute(&content)),
        sha1: hex::encode(Sha1::digest(&content)),
        sha256: sha256_hex(&content),
    })
}

/// Calculates SHA-256 of in-memory content.
pub fn sha256_hex(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}
