//! `mru path <coords>` – print an artifact's file path in a local repository.

use anyhow::Result;
use mru_core::artifact::MavenArtifact;
use mru_core::layout;
use std::path::Path;

pub fn run_path(repository: &Path, artifact: &MavenArtifact, extension: &str) -> Result<()> {
    let file = layout::file_in_repository(repository, artifact, extension);
    println!("{}", file.display());
    Ok(())
}
