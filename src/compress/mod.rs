/// Image compression module
///
/// This module handles:
/// - Decoding with the EXIF orientation applied (orientation.rs)
/// - Re-encoding images as JPEG at a tier's quality (encoder.rs)
/// - The skip / keep-original size rules and output files (pipeline.rs)
/// - Removing outputs that are no longer displayed (cleanup.rs)

pub mod cleanup;
pub mod encoder;
pub mod orientation;
pub mod pipeline;

pub use pipeline::{compress, CompressOptions};
