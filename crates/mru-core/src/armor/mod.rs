//! Writing and verifying armored checksum side-files.
//!
//! An armored file sits next to an artifact's primary file and holds the
//! lowercase hex digest of its bytes under one algorithm, e.g.
//! `mvn-utils-1.0.0.jar.sha256`. Operations here are single-shot and use
//! blocking `std::fs` I/O; callers needing coordination serialize externally.

mod error;

pub use error::ArmorError;

use crate::algorithm::Algorithm;
use crate::artifact::MavenArtifact;
use crate::layout;
use std::fs;
use std::path::{Path, PathBuf};

/// Error messages carry absolute paths so failures can be diagnosed without
/// re-running; falls back to the path as given when the cwd is unavailable.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn write_error(artifact: &MavenArtifact, extension: &str, source: std::io::Error) -> ArmorError {
    ArmorError::Write {
        artifact: artifact.clone(),
        extension: extension.to_string(),
        source,
    }
}

/// Write `bytes` to the derived location under `repository`, creating parent
/// directories as needed and overwriting any existing file. Returns the
/// written path.
pub fn write_file(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
    bytes: &[u8],
) -> Result<PathBuf, ArmorError> {
    let output = layout::file_in_repository(repository, artifact, extension);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| write_error(artifact, extension, e))?;
    }
    fs::write(&output, bytes).map_err(|e| write_error(artifact, extension, e))?;
    tracing::debug!("wrote {}", output.display());
    Ok(output)
}

/// `write_file` with text content, stored as UTF-8.
pub fn write_file_str(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
    content: &str,
) -> Result<PathBuf, ArmorError> {
    write_file(repository, artifact, extension, content.as_bytes())
}

/// Read the bytes of the file at the derived location. `FileNotFound` (with
/// the absolute expected path) when the file is absent.
pub fn read_file_bytes(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
) -> Result<Vec<u8>, ArmorError> {
    let file = layout::file_in_repository(repository, artifact, extension);
    if !file.exists() {
        return Err(ArmorError::FileNotFound {
            path: absolute(&file),
        });
    }
    fs::read(&file).map_err(|source| ArmorError::Read {
        path: absolute(&file),
        source,
    })
}

/// Write one armored side-file per algorithm, in caller order, each holding
/// the hex digest of `bytes` as UTF-8 text. Writes are independent; the
/// first failure aborts and earlier side-files stay written.
pub fn write_armored_files(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
    bytes: &[u8],
    algorithms: &[Algorithm],
) -> Result<(), ArmorError> {
    for &algorithm in algorithms {
        let hash = algorithm.hex_digest(bytes);
        let armored_extension = format!("{extension}{}", algorithm.suffix());
        write_file_str(repository, artifact, &armored_extension, &hash)?;
    }
    Ok(())
}

/// Write armored side-files for a primary file already in the repository.
pub fn armor_existing_file(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
    algorithms: &[Algorithm],
) -> Result<(), ArmorError> {
    let bytes = read_file_bytes(repository, artifact, extension)?;
    write_armored_files(repository, artifact, extension, &bytes, algorithms)
}

/// Write the primary file and its armored side-files in one call. Returns
/// the primary file's path.
pub fn write_file_with_armored_files(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
    bytes: &[u8],
    algorithms: &[Algorithm],
) -> Result<PathBuf, ArmorError> {
    let output = write_file(repository, artifact, extension, bytes)?;
    write_armored_files(repository, artifact, extension, bytes, algorithms)?;
    Ok(output)
}

/// `write_file_with_armored_files` reading the content from `source`.
pub fn write_file_with_armored_files_from(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
    source: &Path,
    algorithms: &[Algorithm],
) -> Result<PathBuf, ArmorError> {
    let bytes = fs::read(source).map_err(|e| ArmorError::Read {
        path: absolute(source),
        source: e,
    })?;
    write_file_with_armored_files(repository, artifact, extension, &bytes, algorithms)
}

/// Verify every armored side-file against the primary file's bytes.
///
/// Reads the primary file, then for each algorithm in order compares the
/// stored digest text against a freshly computed one, failing on the first
/// missing side-file or mismatch. After a fully successful check the
/// side-files are rewritten from the primary bytes; their content and
/// mtimes are refreshed rather than trusted as-is.
pub fn verify_armored_files(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
    algorithms: &[Algorithm],
) -> Result<(), ArmorError> {
    let bytes = read_file_bytes(repository, artifact, extension)?;
    for &algorithm in algorithms {
        let expected = algorithm.hex_digest(&bytes);
        let armored_extension = format!("{extension}{}", algorithm.suffix());
        let stored = read_file_bytes(repository, artifact, &armored_extension)?;
        if stored != expected.as_bytes() {
            return Err(ArmorError::DigestMismatch {
                artifact: artifact.clone(),
                extension: extension.to_string(),
                algorithm,
            });
        }
        tracing::debug!("verified {algorithm} for {artifact} ({extension})");
    }
    write_armored_files(repository, artifact, extension, &bytes, algorithms)
}
