//! Path resolution for Nandi configuration files.
//!
//! ```text
//! ~/.config/nandi/          # Config directory (platform default via `dirs`)
//! └── config.toml           # Application configuration
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// No platform config directory could be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for nandi_core::NandiError {
    fn from(err: PathError) -> Self {
        nandi_core::NandiError::config(err.to_string())
    }
}

pub struct NandiPaths;

impl NandiPaths {
    const APP_DIR: &'static str = "nandi";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the Nandi configuration directory (e.g. `~/.config/nandi/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_app_dir() {
        // Some CI sandboxes have no config dir at all.
        if let (Ok(dir), Ok(file)) = (NandiPaths::config_dir(), NandiPaths::config_file()) {
            assert!(dir.ends_with("nandi"));
            assert_eq!(file.parent(), Some(dir.as_path()));
            assert_eq!(file.file_name().and_then(|n| n.to_str()), Some("config.toml"));
        }
    }
}
