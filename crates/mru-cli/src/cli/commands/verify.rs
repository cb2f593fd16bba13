//! `mru verify <coords>` – verify armored side-files against the primary file.

use anyhow::Result;
use mru_core::algorithm::Algorithm;
use mru_core::armor;
use mru_core::artifact::MavenArtifact;
use std::path::Path;

pub fn run_verify(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
    algorithms: &[Algorithm],
) -> Result<()> {
    armor::verify_armored_files(repository, artifact, extension, algorithms)?;
    let names: Vec<String> = algorithms.iter().map(|a| a.to_string()).collect();
    println!("OK: {artifact} ({}) verified with {}", extension, names.join(", "));
    Ok(())
}
