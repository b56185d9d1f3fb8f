//! Path management for the PsstBin client
//!
//! Provides XDG-compliant path resolution for the configuration file.
//!
//! ## Path Resolution Order
//!
//! 1. `PSSTBIN_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/psstbin` or `~/.config/psstbin`
//! 3. Windows: `%APPDATA%\psstbin`

use std::path::PathBuf;

use crate::error::PsstError;

/// Manages all paths used by the PsstBin client
#[derive(Debug, Clone)]
pub struct PsstPaths {
    /// Base directory for all client data
    base_dir: PathBuf,
}

impl PsstPaths {
    /// Create a new PsstPaths instance
    ///
    /// Path resolution:
    /// 1. `PSSTBIN_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/psstbin` or `~/.config/psstbin`
    /// 3. Windows: `%APPDATA%\psstbin`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PsstError> {
        let base_dir = if let Ok(custom) = std::env::var("PSSTBIN_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PsstPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/psstbin/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PsstError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PsstError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PsstError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("psstbin"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PsstError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PsstError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("psstbin"))
}
