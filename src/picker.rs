/// Photo picker
///
/// Shows the native file dialog and reads what the UI needs to know about
/// the chosen file (size on disk, pixel dimensions, type, name).
use image::ImageFormat;
use rfd::FileDialog;
use std::fs;
use std::path::{Path, PathBuf};

use crate::compress::orientation::upright_dimensions;
use crate::error::PickError;
use crate::state::data::{ImageDetails, PickedImage};

/// Extensions offered in the picker (formats the `image` crate decodes)
pub const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "webp", "bmp", "gif", "tif", "tiff"];

const UNKNOWN_MIME: &str = "image/*";
const UNKNOWN_NAME: &str = "unknown";

/// Show the native file picker. `None` means the user cancelled.
///
/// Blocks the UI thread while the dialog is open, like any modal picker.
pub fn pick_image_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select a Photo")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
}

/// Read size and image metadata on the blocking pool
pub async fn inspect(path: PathBuf) -> Result<PickedImage, PickError> {
    tokio::task::spawn_blocking(move || inspect_blocking(&path))
        .await
        .map_err(|e| PickError::Join(e.to_string()))?
}

/// Blocking implementation of `inspect`
pub fn inspect_blocking(path: &Path) -> Result<PickedImage, PickError> {
    if !path.exists() {
        return Err(PickError::NotFound(path.to_path_buf()));
    }

    let size = fs::metadata(path)
        .map_err(|source| PickError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    // Reads only the header, not the whole image
    let (width, height) = upright_dimensions(path).map_err(|source| PickError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let details = ImageDetails {
        width,
        height,
        mime_type: mime_type_for(path),
        file_name: file_name_for(path),
    };

    log::info!(
        "🖼️  Picked {} ({} bytes, {}x{})",
        path.display(),
        size,
        width,
        height
    );

    Ok(PickedImage {
        path: path.to_path_buf(),
        size,
        details,
    })
}

fn mime_type_for(path: &Path) -> String {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_MIME.to_string())
}

fn file_name_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}
