//! `mru digest <file>` – compute the hex digest of an arbitrary file.

use anyhow::{Context, Result};
use mru_core::algorithm::Algorithm;
use std::path::Path;

/// Compute and print the digest of the given file, `<hex>  <path>`.
pub fn run_digest(file: &Path, algorithm: Algorithm) -> Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("read {}", file.display()))?;
    println!("{}  {}", algorithm.hex_digest(&bytes), file.display());
    Ok(())
}
