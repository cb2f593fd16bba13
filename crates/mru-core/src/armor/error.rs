//! Error types for armor write/verify operations.

use crate::algorithm::Algorithm;
use crate::artifact::MavenArtifact;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of an armor operation. Every variant is fatal to the calling
/// operation; nothing is retried and no partial result is returned.
#[derive(Debug, Error)]
pub enum ArmorError {
    /// A primary or side-file was missing at the derived location. The path
    /// names which one.
    #[error("could not find file at the expected location: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A side-file's stored digest text differs from the digest computed
    /// from the primary file.
    #[error("the {algorithm} hash in the armored file for {artifact} with extension '{extension}' does not match the calculated hash")]
    DigestMismatch {
        artifact: MavenArtifact,
        extension: String,
        algorithm: Algorithm,
    },

    /// Directory creation or file write failed.
    #[error("could not write the file for {artifact} with extension '{extension}'")]
    Write {
        artifact: MavenArtifact,
        extension: String,
        #[source]
        source: io::Error,
    },

    /// Reading an existing file failed.
    #[error("could not read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
