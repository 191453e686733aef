/// EXIF orientation handling
///
/// Re-encoding drops all metadata, so the rotation/flip a camera recorded in
/// the EXIF Orientation tag is baked into the pixels before encoding. The
/// dimensions reported to the UI are the upright ones.
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, ImageResult};
use std::path::Path;

/// Decode `path` and apply its EXIF orientation
pub fn open_upright(path: &Path) -> ImageResult<DynamicImage> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;

    let mut img = DynamicImage::from_decoder(decoder)?;
    if orientation != Orientation::NoTransforms {
        log::info!("Applying EXIF orientation {:?} to {}", orientation, path.display());
        img.apply_orientation(orientation);
    }
    Ok(img)
}

/// Upright pixel dimensions, read from the header only
pub fn upright_dimensions(path: &Path) -> ImageResult<(u32, u32)> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let (width, height) = decoder.dimensions();
    let orientation = decoder.orientation()?;
    Ok(oriented(width, height, orientation))
}

/// Dimensions after `orientation` is applied to a `width x height` image
pub fn oriented(width: u32, height: u32, orientation: Orientation) -> (u32, u32) {
    match orientation {
        Orientation::Rotate90
        | Orientation::Rotate270
        | Orientation::Rotate90FlipH
        | Orientation::Rotate270FlipH => (height, width),
        _ => (width, height),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::write_jpeg_with_orientation;
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};
    use std::fs;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "photo-squeeze-orientation-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_oriented_swaps_for_quarter_turns() {
        assert_eq!(oriented(400, 200, Orientation::Rotate90), (200, 400));
        assert_eq!(oriented(400, 200, Orientation::Rotate270FlipH), (200, 400));
        assert_eq!(oriented(400, 200, Orientation::Rotate180), (400, 200));
        assert_eq!(oriented(400, 200, Orientation::NoTransforms), (400, 200));
    }

    #[test]
    fn test_rotate90_tag_is_applied() {
        let dir = temp_dir("rotate90");
        let path = dir.join("portrait.jpg");

        // Left half red, right half blue
        let img = RgbImage::from_fn(40, 20, |x, _| {
            if x < 20 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 0, 255])
            }
        });
        write_jpeg_with_orientation(&path, &img, 6);

        assert_eq!(upright_dimensions(&path).unwrap(), (20, 40));

        let upright = open_upright(&path).unwrap();
        assert_eq!(upright.dimensions(), (20, 40));
        // Rotated clockwise: the red left half ends up on top
        let top = upright.get_pixel(10, 5);
        let bottom = upright.get_pixel(10, 35);
        assert!(top[0] > 200 && top[2] < 60);
        assert!(bottom[2] > 200 && bottom[0] < 60);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_untagged_image_is_unchanged() {
        let dir = temp_dir("plain");
        let path = dir.join("plain.png");
        RgbImage::from_pixel(30, 10, Rgb([1, 2, 3])).save(&path).unwrap();

        assert_eq!(upright_dimensions(&path).unwrap(), (30, 10));
        assert_eq!(open_upright(&path).unwrap().dimensions(), (30, 10));

        let _ = fs::remove_dir_all(&dir);
    }
}
