//! `mru install <coords> <file>` – copy a file into the repository and write
//! its armored side-files.

use anyhow::Result;
use mru_core::algorithm::Algorithm;
use mru_core::armor;
use mru_core::artifact::MavenArtifact;
use std::path::Path;

pub fn run_install(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
    file: &Path,
    algorithms: &[Algorithm],
) -> Result<()> {
    let installed =
        armor::write_file_with_armored_files_from(repository, artifact, extension, file, algorithms)?;
    println!("Installed {artifact} at {}", installed.display());
    for algorithm in algorithms {
        println!("  wrote {}{}", installed.display(), algorithm.suffix());
    }
    Ok(())
}
