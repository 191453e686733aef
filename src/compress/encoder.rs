/// JPEG encoding
///
/// Downscales (never crops, never upscales) and re-encodes an image as a
/// baseline JPEG at the requested quality, entirely in memory.
use image::codecs::jpeg::JpegEncoder;
use image::{imageops::FilterType, DynamicImage, ExtendedColorType, ImageResult};
use std::borrow::Cow;

/// Encoded JPEG bytes plus the dimensions that were encoded
#[derive(Debug, Clone)]
pub struct EncodedJpeg {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl EncodedJpeg {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Dimensions after fitting `width x height` inside a `max x max` box,
/// keeping the aspect ratio. Images already inside the box are unchanged.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    let longest = width.max(height);
    if max == 0 || longest <= max {
        return (width, height);
    }

    let scale = max as f64 / longest as f64;
    let w = ((width as f64 * scale).round() as u32).max(1);
    let h = ((height as f64 * scale).round() as u32).max(1);
    (w, h)
}

/// Encode `img` as JPEG at `quality` (1-100)
pub fn encode_jpeg(
    img: &DynamicImage,
    quality: u8,
    max_dimension: Option<u32>,
) -> ImageResult<EncodedJpeg> {
    let (width, height) = match max_dimension {
        Some(max) => fit_within(img.width(), img.height(), max),
        None => (img.width(), img.height()),
    };

    let source: Cow<DynamicImage> = if (width, height) != (img.width(), img.height()) {
        Cow::Owned(img.resize_exact(width, height, FilterType::Lanczos3))
    } else {
        Cow::Borrowed(img)
    };

    // JPEG has no alpha channel
    let rgb = source.to_rgb8();

    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
    encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)?;

    Ok(EncodedJpeg {
        bytes,
        width: rgb.width(),
        height: rgb.height(),
    })
}
