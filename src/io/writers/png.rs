use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::io::writers::WriterError;

pub fn write_rgba_png(image: &RgbaImage, output: &Path) -> Result<(), WriterError> {
    image.save_with_format(output, ImageFormat::Png)?;
    info!(
        "Wrote {}x{} PNG to {:?}",
        image.width(),
        image.height(),
        output
    );
    Ok(())
}
