//! OS-specific locations for the config file and logs.

use std::path::{Path, PathBuf};

use crate::ConfigError;

const APP_NAME: &str = "voxelcraft";

/// Where Voxelcraft keeps `config.ron` and its log files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl AppDirs {
    /// Resolve the platform configuration directory without creating anything.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the OS does not expose one.
    pub fn resolve() -> Result<Self, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::resolve_with_root(&base))
    }

    /// Directories rooted under `root`, e.g. a `--config` override or a temp dir.
    pub fn resolve_with_root(root: &Path) -> Self {
        let app_dir = root.join(APP_NAME);
        Self {
            log_dir: app_dir.join("logs"),
            config_dir: app_dir,
        }
    }

    /// Use `config_dir` as-is, logging next to it.
    pub fn at(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
            log_dir: config_dir.join("logs"),
        }
    }

    /// Create both directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteError`] if a directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.config_dir).map_err(ConfigError::WriteError)?;
        std::fs::create_dir_all(&self.log_dir).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
