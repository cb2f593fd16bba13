//! CLI for the MRU repository utilities.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mru_core::algorithm::Algorithm;
use mru_core::artifact::MavenArtifact;
use mru_core::config::{self, MruConfig};
use mru_core::layout;
use std::path::PathBuf;

use commands::{run_armor, run_digest, run_install, run_path, run_url, run_verify};

/// Top-level CLI for the MRU repository utilities.
#[derive(Debug, Parser)]
#[command(name = "mru")]
#[command(about = "MRU: Maven repository layout and armored checksum files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the Maven Central download URL for an artifact.
    Url {
        /// Artifact coordinates, group:artifact:version[:classifier].
        coords: MavenArtifact,
        /// Primary file extension, with leading dot.
        #[arg(long, default_value = ".jar")]
        extension: String,
        /// Shorthand for --extension .pom.
        #[arg(long, conflicts_with = "extension")]
        pom: bool,
    },

    /// Print an artifact's file path inside a local repository.
    Path {
        /// Artifact coordinates, group:artifact:version[:classifier].
        coords: MavenArtifact,
        /// Repository root (default: configured, else ~/.m2/repository).
        #[arg(long)]
        repository: Option<PathBuf>,
        /// Primary file extension, with leading dot.
        #[arg(long, default_value = ".jar")]
        extension: String,
        /// Shorthand for --extension .pom.
        #[arg(long, conflicts_with = "extension")]
        pom: bool,
    },

    /// Copy a file into the repository and write its armored side-files.
    Install {
        /// Artifact coordinates, group:artifact:version[:classifier].
        coords: MavenArtifact,
        /// File whose bytes become the artifact's primary file.
        file: PathBuf,
        /// Repository root (default: configured, else ~/.m2/repository).
        #[arg(long)]
        repository: Option<PathBuf>,
        /// Primary file extension, with leading dot.
        #[arg(long, default_value = ".jar")]
        extension: String,
        /// Digest algorithm (repeatable); default is the configured set.
        #[arg(long = "algorithm", value_name = "ALG")]
        algorithms: Vec<Algorithm>,
    },

    /// (Re)write armored side-files for an artifact already in the repository.
    Armor {
        /// Artifact coordinates, group:artifact:version[:classifier].
        coords: MavenArtifact,
        /// Repository root (default: configured, else ~/.m2/repository).
        #[arg(long)]
        repository: Option<PathBuf>,
        /// Primary file extension, with leading dot.
        #[arg(long, default_value = ".jar")]
        extension: String,
        /// Digest algorithm (repeatable); default is the configured set.
        #[arg(long = "algorithm", value_name = "ALG")]
        algorithms: Vec<Algorithm>,
    },

    /// Verify armored side-files against the primary file.
    Verify {
        /// Artifact coordinates, group:artifact:version[:classifier].
        coords: MavenArtifact,
        /// Repository root (default: configured, else ~/.m2/repository).
        #[arg(long)]
        repository: Option<PathBuf>,
        /// Primary file extension, with leading dot.
        #[arg(long, default_value = ".jar")]
        extension: String,
        /// Digest algorithm (repeatable); default is the configured set.
        #[arg(long = "algorithm", value_name = "ALG")]
        algorithms: Vec<Algorithm>,
    },

    /// Compute the hex digest of an arbitrary file.
    Digest {
        /// Path to the file.
        file: PathBuf,
        /// Digest algorithm.
        #[arg(long, default_value = "sha256")]
        algorithm: Algorithm,
    },
}

/// `--pom` wins over the (possibly defaulted) `--extension` value.
fn extension_arg(extension: String, pom: bool) -> String {
    if pom {
        layout::POM_EXTENSION.to_string()
    } else {
        extension
    }
}

/// Repository root: flag, then config, then Maven's `~/.m2/repository`.
fn repository_arg(repository: Option<PathBuf>, cfg: &MruConfig) -> Result<PathBuf> {
    if let Some(root) = repository {
        return Ok(root);
    }
    if let Some(root) = &cfg.repository {
        return Ok(root.clone());
    }
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .context("no repository given, none configured, and HOME is not set")?;
    Ok(home.join(".m2").join("repository"))
}

/// Algorithm set: flags if any were given, else the configured default.
fn algorithms_arg(algorithms: Vec<Algorithm>, cfg: &MruConfig) -> Vec<Algorithm> {
    if algorithms.is_empty() {
        cfg.algorithms.clone()
    } else {
        algorithms
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Url {
                coords,
                extension,
                pom,
            } => run_url(&coords, &extension_arg(extension, pom)),
            CliCommand::Path {
                coords,
                repository,
                extension,
                pom,
            } => run_path(
                &repository_arg(repository, &cfg)?,
                &coords,
                &extension_arg(extension, pom),
            ),
            CliCommand::Install {
                coords,
                file,
                repository,
                extension,
                algorithms,
            } => run_install(
                &repository_arg(repository, &cfg)?,
                &coords,
                &extension,
                &file,
                &algorithms_arg(algorithms, &cfg),
            ),
            CliCommand::Armor {
                coords,
                repository,
                extension,
                algorithms,
            } => run_armor(
                &repository_arg(repository, &cfg)?,
                &coords,
                &extension,
                &algorithms_arg(algorithms, &cfg),
            ),
            CliCommand::Verify {
                coords,
                repository,
                extension,
                algorithms,
            } => run_verify(
                &repository_arg(repository, &cfg)?,
                &coords,
                &extension,
                &algorithms_arg(algorithms, &cfg),
            ),
            CliCommand::Digest { file, algorithm } => run_digest(&file, algorithm),
        }
    }
}

#[cfg(test)]
mod tests;
