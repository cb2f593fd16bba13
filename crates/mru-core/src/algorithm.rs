//! Digest algorithms for armored side-files.
//!
//! A closed set: the Maven ecosystem publishes `.md5`, `.sha1`, `.sha256`,
//! and `.sha512` side-files and nothing else, so no open registry is needed.

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

/// One of the digest algorithms used for armored files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// All supported algorithms, in side-file naming order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
    ];

    /// Suffix appended to the primary file's extension (e.g. `.jar.sha256`).
    pub fn suffix(self) -> &'static str {
        match self {
            Algorithm::Md5 => ".md5",
            Algorithm::Sha1 => ".sha1",
            Algorithm::Sha256 => ".sha256",
            Algorithm::Sha512 => ".sha512",
        }
    }

    /// Raw digest length in bytes (16/20/32/64).
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
        }
    }

    /// Digest `bytes` and return lowercase hex, two characters per byte.
    pub fn hex_digest(self, bytes: &[u8]) -> String {
        match self {
            Algorithm::Md5 => hex::encode(Md5::digest(bytes)),
            Algorithm::Sha1 => hex::encode(Sha1::digest(bytes)),
            Algorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
            Algorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha512 => "SHA-512",
        };
        f.write_str(name)
    }
}

/// Error parsing an algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{input}': expected md5, sha1, sha256, or sha512")]
pub struct ParseAlgorithmError {
    input: String,
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the lowercase side-file names: `md5`, `sha1`, `sha256`, `sha512`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(ParseAlgorithmError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors_for_test_input() {
        assert_eq!(
            Algorithm::Md5.hex_digest(b"test"),
            "098f6bcd4621d373cade4e832627b4f6"
        );
        assert_eq!(
            Algorithm::Sha1.hex_digest(b"test"),
            "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3"
        );
    }

    #[test]
    fn sha256_empty_input() {
        assert_eq!(
            Algorithm::Sha256.hex_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn hex_length_matches_digest_len() {
        for algorithm in Algorithm::ALL {
            let hex = algorithm.hex_digest(b"abc");
            assert_eq!(hex.len(), 2 * algorithm.digest_len(), "{algorithm}");
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn deterministic() {
        let a = Algorithm::Sha512.hex_digest(b"same bytes");
        let b = Algorithm::Sha512.hex_digest(b"same bytes");
        assert_eq!(a, b);
    }

    #[test]
    fn parse_matches_suffix_names() {
        for algorithm in Algorithm::ALL {
            let name = algorithm.suffix().trim_start_matches('.');
            assert_eq!(name.parse::<Algorithm>().unwrap(), algorithm);
        }
        assert!("sha-256".parse::<Algorithm>().is_err());
    }
}
