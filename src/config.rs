/// User settings
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/photo-squeeze/settings.json
/// - macOS: ~/Library/Application Support/photo-squeeze/settings.json
/// - Windows: %APPDATA%\photo-squeeze\settings.json
///
/// Every field has a default, so a partial file is fine.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::state::level::CompressionLevel;

const APP_DIR: &str = "photo-squeeze";
const SETTINGS_FILE: &str = "settings.json";

/// Sources below this size are not compressed (50KB)
pub const DEFAULT_SKIP_BELOW_BYTES: u64 = 50 * 1024;

/// Longest edge after downscaling
pub const DEFAULT_MAX_DIMENSION: u32 = 1280;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Tier selected at startup; updated whenever the user switches tiers
    pub default_level: CompressionLevel,
    pub skip_below_bytes: u64,
    /// `None` keeps the original pixel dimensions
    pub max_dimension: Option<u32>,
    /// Where compressed files go; `None` means the cache directory
    pub output_dir: Option<PathBuf>,
    pub upload: UploadSettings,
}

/// Shape of the simulated upload
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct UploadSettings {
    /// Progress moves in `100 / steps` increments
    pub steps: u8,
    pub min_delay_ms: u64,
    /// Exclusive upper bound
    pub max_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_level: CompressionLevel::Medium,
            skip_below_bytes: DEFAULT_SKIP_BELOW_BYTES,
            max_dimension: Some(DEFAULT_MAX_DIMENSION),
            output_dir: None,
            upload: UploadSettings::default(),
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            steps: 10,
            min_delay_ms: 200,
            max_delay_ms: 500,
        }
    }
}

impl UploadSettings {
    /// Delay range with the bounds put back in order and `steps >= 1`
    pub fn normalized(self) -> Self {
        let min = self.min_delay_ms.min(self.max_delay_ms);
        let max = self.min_delay_ms.max(self.max_delay_ms);
        Self {
            steps: self.steps.max(1),
            min_delay_ms: min,
            max_delay_ms: max,
        }
    }
}

impl Settings {
    /// Convert to JSON string for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the default location.
    ///
    /// A missing or malformed file yields defaults; the problem is logged,
    /// never fatal.
    pub fn load() -> Self {
        let path = match settings_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                return Self::default();
            }
        };

        match Self::load_from(&path) {
            Ok(Some(settings)) => {
                log::info!("⚙️  Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read settings from `path`. `Ok(None)` when the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(path)?;
        Ok(Some(Self::from_json(&json)?))
    }

    /// Write settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Directory compressed files are written to
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => default_output_dir(),
        }
    }
}

/// Get the path where settings are stored
pub fn settings_path() -> Result<PathBuf, ConfigError> {
    let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    path.push(APP_DIR);
    path.push(SETTINGS_FILE);
    Ok(path)
}

/// Default output directory for compressed JPEGs
/// Returns ~/.cache/photo-squeeze/compressed on Linux
pub fn default_output_dir() -> PathBuf {
    let mut path = dirs::cache_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(std::env::temp_dir);

    path.push(APP_DIR);
    path.push("compressed");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_level, CompressionLevel::Medium);
        assert_eq!(settings.skip_below_bytes, 51_200);
        assert_eq!(settings.max_dimension, Some(1280));
        assert_eq!(settings.upload.steps, 10);
    }

    #[test]
    fn test_serialization() {
        let mut settings = Settings::default();
        settings.default_level = CompressionLevel::High;
        settings.max_dimension = None;
        settings.output_dir = Some(PathBuf::from("/tmp/out"));

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();

        assert_eq!(settings, restored);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings = Settings::from_json(r#"{ "default_level": "low", "upload": { "steps": 4 } }"#)
            .unwrap();

        assert_eq!(settings.default_level, CompressionLevel::Low);
        assert_eq!(settings.skip_below_bytes, DEFAULT_SKIP_BELOW_BYTES);
        assert_eq!(settings.upload.steps, 4);
        assert_eq!(settings.upload.min_delay_ms, 200);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("photo-squeeze-config-{}", std::process::id()));
        let path = dir.join("nested").join(SETTINGS_FILE);

        assert!(Settings::load_from(&path).unwrap().is_none());

        let mut settings = Settings::default();
        settings.default_level = CompressionLevel::Low;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.default_level, CompressionLevel::Low);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_upload_settings_normalized() {
        let upload = UploadSettings {
            steps: 0,
            min_delay_ms: 900,
            max_delay_ms: 100,
        }
        .normalized();

        assert_eq!(upload.steps, 1);
        assert_eq!(upload.min_delay_ms, 100);
        assert_eq!(upload.max_delay_ms, 900);
    }
}
