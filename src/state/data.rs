/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the picker, the compressor and the UI layer.
use std::path::PathBuf;

use super::level::CompressionLevel;

/// Descriptive metadata about the picked image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDetails {
    /// Pixel width of the original
    pub width: u32,
    /// Pixel height of the original
    pub height: u32,
    /// MIME type guessed from the file, "image/*" when unknown
    pub mime_type: String,
    /// File name only (e.g., "IMG_0001.png"), "unknown" when unavailable
    pub file_name: String,
}

/// A file the user picked, after its metadata was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    pub path: PathBuf,
    /// Size on disk in bytes
    pub size: u64,
    pub details: ImageDetails,
}

/// What the compressor ended up doing with a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Source was already under the size threshold
    SkippedSmall,
    /// A smaller (or equal) JPEG was written
    Compressed,
    /// Encoding grew the file, the source is kept
    KeptOriginal,
    /// Compression failed, the source is shown as-is
    Failed,
}

impl Decision {
    pub fn describe(self) -> &'static str {
        match self {
            Decision::SkippedSmall => "Image already small, no compression needed",
            Decision::Compressed => "Compressed",
            Decision::KeptOriginal => "Compression was not effective, original kept",
            Decision::Failed => "Compression failed, original kept",
        }
    }
}

/// Result of one compression run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionOutcome {
    /// File to display: the compressed JPEG, or the source itself
    pub output: PathBuf,
    /// Size of `output` in bytes
    pub size: u64,
    /// Pixel dimensions of `output`
    pub dimensions: (u32, u32),
    pub decision: Decision,
}

/// The transient "current image" record.
/// Replaced wholesale on every pick or tier change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentImage {
    /// File the user picked; recompression always starts from here
    pub source: PathBuf,
    /// File shown in the preview
    pub output: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
    pub details: ImageDetails,
    pub output_dimensions: (u32, u32),
    pub level: CompressionLevel,
    pub decision: Decision,
}

impl CurrentImage {
    /// Combine a picked source with the compressor's result
    pub fn from_outcome(
        picked: &PickedImage,
        level: CompressionLevel,
        outcome: CompressionOutcome,
    ) -> Self {
        Self {
            source: picked.path.clone(),
            output: outcome.output,
            original_size: picked.size,
            compressed_size: outcome.size,
            details: picked.details.clone(),
            output_dimensions: outcome.dimensions,
            level,
            decision: outcome.decision,
        }
    }

    /// Fallback record when compression failed: the source stands in for the output
    pub fn uncompressed(picked: &PickedImage, level: CompressionLevel) -> Self {
        Self {
            source: picked.path.clone(),
            output: picked.path.clone(),
            original_size: picked.size,
            compressed_size: picked.size,
            details: picked.details.clone(),
            output_dimensions: (picked.details.width, picked.details.height),
            level,
            decision: Decision::Failed,
        }
    }

    /// Rebuild the `PickedImage` this record was made from
    pub fn picked(&self) -> PickedImage {
        PickedImage {
            path: self.source.clone(),
            size: self.original_size,
            details: self.details.clone(),
        }
    }

    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(Some(self.original_size), Some(self.compressed_size))
    }
}

/// Percentage saved going from `original` to `compressed`.
/// Zero when either size is missing or zero.
pub fn reduction_percent(original: Option<u64>, compressed: Option<u64>) -> f64 {
    match (original, compressed) {
        (Some(original), Some(compressed)) if original > 0 && compressed > 0 => {
            (original as f64 - compressed as f64) / original as f64 * 100.0
        }
        _ => 0.0,
    }
}

/// Two-decimal rendering used in the info panel
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Bytes as kilobytes with two decimals (e.g., "51.20 KB")
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
