use image::{RgbaImage, imageops};
use tracing::info;

/// Pixels with alpha below this count as transparent during trimming.
pub const ALPHA_THRESHOLD: u8 = 128;

fn column_has_content(image: &RgbaImage, x: u32) -> bool {
    (0..image.height()).any(|y| image.get_pixel(x, y)[3] >= ALPHA_THRESHOLD)
}

fn row_has_content(image: &RgbaImage, y: u32) -> bool {
    (0..image.width()).any(|x| image.get_pixel(x, y)[3] >= ALPHA_THRESHOLD)
}

/// Crop the image to the minimal bounding box containing every pixel with
/// alpha >= [`ALPHA_THRESHOLD`]. A fully transparent image is returned
/// unchanged.
pub fn trim_transparent(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();

    let Some(left) = (0..width).find(|&x| column_has_content(image, x)) else {
        info!("Image is entirely transparent; no trimming");
        return image.clone();
    };
    // A visible column exists, so the remaining edges exist too
    let right = (0..width)
        .rev()
        .find(|&x| column_has_content(image, x))
        .unwrap_or(left);
    let top = (0..height)
        .find(|&y| row_has_content(image, y))
        .unwrap_or(0);
    let bottom = (0..height)
        .rev()
        .find(|&y| row_has_content(image, y))
        .unwrap_or(top);

    let trimmed =
        imageops::crop_imm(image, left, top, right - left + 1, bottom - top + 1).to_image();
    info!(
        "Trimmed transparent border: {}x{} -> {}x{}",
        width,
        height,
        trimmed.width(),
        trimmed.height()
    );
    trimmed
}
