/// Compression tiers
///
/// Three ordinal levels mapped to a fixed JPEG quality. Anything that does
/// not name a known tier falls back to `Medium`.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum CompressionLevel {
    /// Light compression, best quality
    Low,
    /// Balanced
    #[default]
    Medium,
    /// Strong compression, smallest files
    High,
}

impl CompressionLevel {
    /// All tiers in display order
    pub const ALL: [CompressionLevel; 3] = [Self::Low, Self::Medium, Self::High];

    /// Encoder quality as a fraction in (0, 1]
    pub fn quality(self) -> f32 {
        match self {
            Self::Low => 0.9,
            Self::Medium => 0.7,
            Self::High => 0.5,
        }
    }

    /// Quality as the integer percentage the JPEG encoder expects
    pub fn jpeg_quality(self) -> u8 {
        (self.quality() * 100.0).round() as u8
    }

    /// Stable lowercase name used in settings and output file names
    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a tier name, defaulting to `Medium` for anything unknown
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            other => {
                log::warn!("Unknown compression level {:?}, using medium", other);
                Self::Medium
            }
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl From<String> for CompressionLevel {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<CompressionLevel> for String {
    fn from(level: CompressionLevel) -> Self {
        level.name().to_string()
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
