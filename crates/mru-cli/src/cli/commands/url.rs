//! `mru url <coords>` – print the Maven Central URL for an artifact.

use anyhow::Result;
use mru_core::artifact::MavenArtifact;
use mru_core::layout;

pub fn run_url(artifact: &MavenArtifact, extension: &str) -> Result<()> {
    println!("{}", layout::maven_central_url(artifact, extension));
    Ok(())
}
