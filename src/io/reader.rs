use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{ImageReader, RgbaImage};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Raster extensions accepted during batch iteration.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

pub fn is_supported_raster(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Decode the file at `path` into an 8-bit RGBA grid, whatever the source
/// format. Missing or unreadable files surface as `ReaderError::Io` before
/// any decoding starts.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, ReaderError> {
    let file = File::open(path)?;
    let reader = ImageReader::new(BufReader::new(file)).with_guessed_format()?;
    let image = reader.decode()?.to_rgba8();
    info!(
        "Loaded {}x{} RGBA image from {:?}",
        image.width(),
        image.height(),
        path
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_rgba(Path::new("/nonexistent/sprite.png"));
        assert!(matches!(result, Err(ReaderError::Io(_))));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"not an image at all").unwrap();
        let result = load_rgba(&path);
        assert!(matches!(result, Err(ReaderError::Decode(_)) | Err(ReaderError::Io(_))));
    }

    #[test]
    fn round_trips_a_saved_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 1, image::Rgba([0, 0, 255, 128]));
        image.save(&path).unwrap();

        let loaded = load_rgba(&path).unwrap();
        assert_eq!(loaded, image);
    }

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(is_supported_raster(Path::new("a/b/c.PNG")));
        assert!(is_supported_raster(Path::new("photo.jpeg")));
        assert!(!is_supported_raster(Path::new("notes.txt")));
        assert!(!is_supported_raster(Path::new("no_extension")));
    }
}
