//! User settings for the PsstBin client
//!
//! Manages user preferences: the API endpoint, default paste expiry, and
//! the HTTP request timeout. The file is optional; defaults work against
//! the public service, and the `--api-url` flag or `PSSTBIN_API_URL`
//! environment variable override whatever is stored.

use serde::{Deserialize, Serialize};

use super::paths::PsstPaths;
use crate::error::PsstError;

/// Default base URL for the deployed API
pub const DEFAULT_API_URL: &str = "https://ptto3xcw05.execute-api.us-east-1.amazonaws.com";

/// User settings for the PsstBin client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the PsstBin API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Default paste expiry in seconds when --expiry is not given
    #[serde(default = "default_expiry_seconds")]
    pub default_expiry_seconds: u64,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_expiry_seconds() -> u64 {
    3600
}

fn default_timeout_seconds() -> u64 {
    15
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_url: default_api_url(),
            default_expiry_seconds: default_expiry_seconds(),
            request_timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PsstPaths) -> Result<Self, PsstError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PsstError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| PsstError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't persist yet - let caller decide when to save
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PsstPaths) -> Result<(), PsstError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PsstError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PsstError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.default_expiry_seconds, 3600);
        assert_eq!(settings.request_timeout_seconds, 15);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PsstPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api_url = "https://staging.example.com".to_string();
        settings.default_expiry_seconds = 600;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_url, "https://staging.example.com");
        assert_eq!(loaded.default_expiry_seconds, 600);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let partial = r#"{ "api_url": "https://local.test" }"#;
        let settings: Settings = serde_json::from_str(partial).unwrap();
        assert_eq!(settings.api_url, "https://local.test");
        assert_eq!(settings.default_expiry_seconds, 3600);
    }
}
