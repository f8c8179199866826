//! Loads and saves `NandiConfig` as TOML.

use std::fs;
use std::path::{Path, PathBuf};

use nandi_core::config::NandiConfig;
use nandi_core::error::Result;

use crate::paths::NandiPaths;

/// File-backed configuration.
///
/// A missing or blank file yields the defaults; malformed TOML and
/// nonsensical values are errors.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the platform config path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: NandiPaths::config_file()?,
        })
    }

    /// Uses an explicit path (CLI `--config`, tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<NandiConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(NandiConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(NandiConfig::default());
        }

        let config: NandiConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %self.path.display(), "config loaded");
        Ok(config)
    }

    /// Writes `config` as pretty TOML, creating parent directories.
    pub fn save(&self, config: &NandiConfig) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nandi_core::Language;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), NandiConfig::default());
    }

    #[test]
    fn test_blank_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(ConfigService::with_path(path).load().unwrap(), NandiConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("nested/dir/config.toml"));

        let mut config = NandiConfig::default();
        config.chat.reply_delay_ms = 250;
        config.chat.default_language = Language::Kannada;
        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_malformed_toml_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[chat\nreply_delay_ms = ").unwrap();
        assert!(ConfigService::with_path(path).load().unwrap_err().is_serialization());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[call]\ntick_interval_ms = 0\n").unwrap();
        assert!(ConfigService::with_path(path).load().unwrap_err().is_config());
    }
}
