/// Error types for photo-squeeze
///
/// Each module propagates its own error with `?`. The UI layer turns any of
/// them into a blocking notification via `Display`.
use std::path::PathBuf;
use thiserror::Error;

/// Failures while inspecting the file the user picked
#[derive(Debug, Error)]
pub enum PickError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read file metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported or corrupted image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Background task failed: {0}")]
    Join(String),
}

/// Failures while compressing an image
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("JPEG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write compressed file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Background task failed: {0}")]
    Join(String),
}

/// Failures while loading or saving settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Operations the session refuses in its current state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please pick an image before uploading")]
    NoImage,

    #[error("Another operation is still running")]
    Busy,
}
