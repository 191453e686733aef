/// Compression pipeline
///
/// Applies the two size rules around the encoder:
/// - sources under the skip threshold are returned untouched
/// - if the JPEG comes out bigger than the source, the source is kept
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

use super::{encoder, orientation};
use crate::config::Settings;
use crate::error::CompressError;
use crate::state::data::{CompressionOutcome, Decision, PickedImage};
use crate::state::level::CompressionLevel;

/// The parts of `Settings` the compressor cares about
#[derive(Debug, Clone, PartialEq)]
pub struct CompressOptions {
    pub skip_below_bytes: u64,
    pub max_dimension: Option<u32>,
    pub output_dir: PathBuf,
}

impl From<&Settings> for CompressOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            skip_below_bytes: settings.skip_below_bytes,
            max_dimension: settings.max_dimension,
            output_dir: settings.resolved_output_dir(),
        }
    }
}

/// Compress `picked` at `level` on the blocking pool
pub async fn compress(
    picked: PickedImage,
    level: CompressionLevel,
    options: CompressOptions,
) -> Result<CompressionOutcome, CompressError> {
    // Spawn blocking because decoding and encoding are CPU-intensive
    tokio::task::spawn_blocking(move || compress_blocking(&picked, level, &options))
        .await
        .map_err(|e| CompressError::Join(e.to_string()))?
}

/// Blocking implementation of `compress`
pub fn compress_blocking(
    picked: &PickedImage,
    level: CompressionLevel,
    options: &CompressOptions,
) -> Result<CompressionOutcome, CompressError> {
    let source = picked.path.as_path();
    let original_size = fs::metadata(source)
        .map_err(|e| CompressError::Read {
            path: source.to_path_buf(),
            source: e,
        })?
        .len();

    if original_size < options.skip_below_bytes {
        log::info!("Image already small ({} bytes), skipping compression", original_size);
        return Ok(keep_source(picked, original_size, Decision::SkippedSmall));
    }

    let img = orientation::open_upright(source).map_err(|e| CompressError::Decode {
        path: source.to_path_buf(),
        source: e,
    })?;

    let encoded = encoder::encode_jpeg(&img, level.jpeg_quality(), options.max_dimension)?;

    if decide(original_size, encoded.size()) == Decision::KeptOriginal {
        log::info!(
            "Compression not effective ({} -> {} bytes), keeping original",
            original_size,
            encoded.size()
        );
        return Ok(keep_source(picked, original_size, Decision::KeptOriginal));
    }

    fs::create_dir_all(&options.output_dir).map_err(|e| CompressError::Write {
        path: options.output_dir.clone(),
        source: e,
    })?;

    let output = options
        .output_dir
        .join(output_file_name(source, level, Utc::now().timestamp_millis()));

    fs::write(&output, &encoded.bytes).map_err(|e| CompressError::Write {
        path: output.clone(),
        source: e,
    })?;

    log::info!(
        "🗜️  Compressed {} -> {} ({} -> {} bytes, quality {})",
        source.display(),
        output.display(),
        original_size,
        encoded.size(),
        level.jpeg_quality()
    );

    Ok(CompressionOutcome {
        output,
        size: encoded.size(),
        dimensions: (encoded.width, encoded.height),
        decision: Decision::Compressed,
    })
}

/// Keep-original rule: only a strictly larger result is rejected
pub fn decide(original_size: u64, compressed_size: u64) -> Decision {
    if compressed_size > original_size {
        Decision::KeptOriginal
    } else {
        Decision::Compressed
    }
}

/// `<stem>_<tier>_<unix millis>.jpg`
pub fn output_file_name(source: &Path, level: CompressionLevel, timestamp_millis: i64) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "image".to_string());

    format!("{}_{}_{}.jpg", stem, level.name(), timestamp_millis)
}

fn keep_source(picked: &PickedImage, size: u64, decision: Decision) -> CompressionOutcome {
    CompressionOutcome {
        output: picked.path.clone(),
        size,
        dimensions: (picked.details.width, picked.details.height),
        decision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::orientation::fixtures::write_jpeg_with_orientation;
    use crate::picker::inspect_blocking;
    use image::{Rgb, RgbImage};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "photo-squeeze-compress-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn options(dir: &Path) -> CompressOptions {
        CompressOptions {
            skip_below_bytes: 50 * 1024,
            max_dimension: Some(1280),
            output_dir: dir.join("out"),
        }
    }

    /// Deterministic noise; PNG can't squeeze it, so the file is well over 50KB
    fn write_noise_png(path: &Path, width: u32, height: u32) {
        let mut state: u32 = 0x1234_5678;
        let img = RgbImage::from_fn(width, height, |_, _| {
            let mut next = || {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state & 0xff) as u8
            };
            Rgb([next(), next(), next()])
        });
        img.save(path).unwrap();
    }

    #[test]
    fn test_small_image_is_not_compressed() {
        let dir = temp_dir("small");
        let path = dir.join("small.png");
        RgbImage::from_pixel(16, 16, Rgb([255, 0, 0])).save(&path).unwrap();

        let picked = inspect_blocking(&path).unwrap();
        let outcome = compress_blocking(&picked, CompressionLevel::High, &options(&dir)).unwrap();

        assert_eq!(outcome.decision, Decision::SkippedSmall);
        assert_eq!(outcome.size, picked.size);
        assert_eq!(outcome.output, path);
        assert!(!dir.join("out").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_large_image_is_compressed_to_jpeg() {
        let dir = temp_dir("large");
        let path = dir.join("noise.png");
        write_noise_png(&path, 400, 300);

        let picked = inspect_blocking(&path).unwrap();
        assert!(picked.size >= 50 * 1024);

        let outcome = compress_blocking(&picked, CompressionLevel::Medium, &options(&dir)).unwrap();

        assert_eq!(outcome.decision, Decision::Compressed);
        assert!(outcome.size <= picked.size);
        assert_ne!(outcome.output, path);
        assert_eq!(fs::metadata(&outcome.output).unwrap().len(), outcome.size);
        assert_eq!(outcome.dimensions, (400, 300));
        assert_eq!(
            image::ImageFormat::from_path(&outcome.output).unwrap(),
            image::ImageFormat::Jpeg
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_higher_tier_never_larger_than_lower_tier() {
        let dir = temp_dir("tiers");
        let path = dir.join("noise.png");
        write_noise_png(&path, 320, 320);

        let picked = inspect_blocking(&path).unwrap();
        let opts = options(&dir);
        let low = compress_blocking(&picked, CompressionLevel::Low, &opts).unwrap();
        let medium = compress_blocking(&picked, CompressionLevel::Medium, &opts).unwrap();
        let high = compress_blocking(&picked, CompressionLevel::High, &opts).unwrap();

        assert!(high.size <= medium.size);
        assert!(medium.size <= low.size);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_oversized_image_is_downscaled() {
        let dir = temp_dir("downscale");
        let path = dir.join("wide.png");
        write_noise_png(&path, 1600, 400);

        let picked = inspect_blocking(&path).unwrap();
        let outcome = compress_blocking(&picked, CompressionLevel::High, &options(&dir)).unwrap();

        assert_eq!(outcome.dimensions, (1280, 320));
        // Details still describe the original
        assert_eq!((picked.details.width, picked.details.height), (1600, 400));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_growing_result_keeps_original() {
        let dir = temp_dir("grow");
        let path = dir.join("flat.png");
        // A flat PNG is a few hundred bytes, smaller than any JPEG header
        RgbImage::from_pixel(8, 8, Rgb([0, 0, 0])).save(&path).unwrap();

        let picked = inspect_blocking(&path).unwrap();
        let mut opts = options(&dir);
        opts.skip_below_bytes = 0;

        let outcome = compress_blocking(&picked, CompressionLevel::Low, &opts).unwrap();

        assert_eq!(outcome.decision, Decision::KeptOriginal);
        assert_eq!(outcome.output, path);
        assert_eq!(outcome.size, picked.size);
        assert!(!dir.join("out").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_exif_rotation_is_baked_into_output() {
        let dir = temp_dir("exif");
        let path = dir.join("phone.jpg");
        let mut state: u32 = 0x9e37_79b9;
        let img = RgbImage::from_fn(400, 200, |_, _| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let v = (state >> 24) as u8;
            Rgb([v, v.wrapping_add(85), v.wrapping_add(170)])
        });
        write_jpeg_with_orientation(&path, &img, 6);

        let picked = inspect_blocking(&path).unwrap();
        assert_eq!((picked.details.width, picked.details.height), (200, 400));

        let mut opts = options(&dir);
        opts.skip_below_bytes = 0;
        let outcome = compress_blocking(&picked, CompressionLevel::Medium, &opts).unwrap();

        assert_eq!(outcome.decision, Decision::Compressed);
        assert_eq!(outcome.dimensions, (200, 400));
        let written = image::open(&outcome.output).unwrap();
        assert_eq!((written.width(), written.height()), (200, 400));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_decide() {
        assert_eq!(decide(100, 101), Decision::KeptOriginal);
        assert_eq!(decide(100, 100), Decision::Compressed);
        assert_eq!(decide(100, 10), Decision::Compressed);
    }

    #[test]
    fn test_output_file_name() {
        let name = output_file_name(Path::new("/photos/IMG_0001.HEIC"), CompressionLevel::High, 42);
        assert_eq!(name, "IMG_0001_high_42.jpg");
        assert_eq!(
            output_file_name(Path::new("/"), CompressionLevel::Low, 7),
            "image_low_7.jpg"
        );
    }

    #[tokio::test]
    async fn test_compress_missing_file() {
        let picked = PickedImage {
            path: PathBuf::from("/nonexistent/photo.png"),
            size: 0,
            details: crate::state::data::ImageDetails {
                width: 1,
                height: 1,
                mime_type: "image/png".to_string(),
                file_name: "photo.png".to_string(),
            },
        };
        let opts = options(&std::env::temp_dir());
        let result = compress(picked, CompressionLevel::Medium, opts).await;
        assert!(matches!(result, Err(CompressError::Read { .. })));
    }
}
