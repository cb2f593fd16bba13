//! `mru armor <coords>` – (re)write armored side-files for an artifact
//! already present in the repository.

use anyhow::Result;
use mru_core::algorithm::Algorithm;
use mru_core::armor;
use mru_core::artifact::MavenArtifact;
use std::path::Path;

pub fn run_armor(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
    algorithms: &[Algorithm],
) -> Result<()> {
    armor::armor_existing_file(repository, artifact, extension, algorithms)?;
    let names: Vec<String> = algorithms.iter().map(|a| a.to_string()).collect();
    println!(
        "Wrote {} armored file(s) for {artifact} ({})",
        algorithms.len(),
        names.join(", ")
    );
    Ok(())
}
