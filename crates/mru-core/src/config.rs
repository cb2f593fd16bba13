use crate::algorithm::Algorithm;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/mru/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MruConfig {
    /// Local repository root used when `--repository` is not given.
    /// None means fall back to `~/.m2/repository` at use time.
    #[serde(default)]
    pub repository: Option<PathBuf>,
    /// Algorithms used when no `--algorithm` flags are given.
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,
}

/// Maven's conventional side-file pair.
fn default_algorithms() -> Vec<Algorithm> {
    vec![Algorithm::Md5, Algorithm::Sha1]
}

impl Default for MruConfig {
    fn default() -> Self {
        Self {
            repository: None,
            algorithms: default_algorithms(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mru")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MruConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MruConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MruConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = MruConfig::default();
        assert!(cfg.repository.is_none());
        assert_eq!(cfg.algorithms, vec![Algorithm::Md5, Algorithm::Sha1]);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MruConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MruConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.repository, cfg.repository);
        assert_eq!(parsed.algorithms, cfg.algorithms);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            repository = "/srv/maven/repository"
            algorithms = ["sha256", "sha512"]
        "#;
        let cfg: MruConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.repository.as_deref(),
            Some(std::path::Path::new("/srv/maven/repository"))
        );
        assert_eq!(cfg.algorithms, vec![Algorithm::Sha256, Algorithm::Sha512]);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: MruConfig = toml::from_str("").unwrap();
        assert!(cfg.repository.is_none());
        assert_eq!(cfg.algorithms, vec![Algorithm::Md5, Algorithm::Sha1]);
    }
}
