use image::{Rgba, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

fn next_multiple(value: usize, block_size: usize) -> usize {
    if value % block_size == 0 {
        value
    } else {
        value.div_ceil(block_size) * block_size
    }
}

/// Blend a source channel over the fully transparent canvas using the source
/// alpha as the mask: out = (src * a + dst * (255 - a) + 127) / 255 with dst = 0.
fn blend_over_transparent(channel: u8, alpha: u16) -> u8 {
    ((channel as u16 * alpha + 127) / 255) as u8
}

/// Pad the image onto a square transparent canvas whose side is a multiple of
/// `block_size`. Each axis is first rounded up to its next multiple, then both
/// are overridden to the larger of the two, so the canvas is always square.
/// The source is pasted centered with floor-division offsets (the odd spare
/// pixel of padding falls bottom/right), composited with its own alpha as the
/// blend mask. Returns the padded image and the paste offset.
pub fn pad_to_square_multiple(
    image: &RgbaImage,
    block_size: usize,
) -> Result<(RgbaImage, (u32, u32))> {
    if block_size == 0 {
        return Err(Error::ZeroSize { size: block_size });
    }

    let (width, height) = (image.width() as usize, image.height() as usize);
    let side = next_multiple(width, block_size).max(next_multiple(height, block_size));
    if width == side && height == side {
        return Ok((image.clone(), (0, 0)));
    }

    let offset_x = ((side - width) / 2) as u32;
    let offset_y = ((side - height) / 2) as u32;

    let mut canvas = RgbaImage::new(side as u32, side as u32);
    for (x, y, pixel) in image.enumerate_pixels() {
        let alpha = pixel[3] as u16;
        let blended = Rgba([
            blend_over_transparent(pixel[0], alpha),
            blend_over_transparent(pixel[1], alpha),
            blend_over_transparent(pixel[2], alpha),
            blend_over_transparent(pixel[3], alpha),
        ]);
        canvas.put_pixel(offset_x + x, offset_y + y, blended);
    }

    info!(
        "Padded to {}x{} (multiples of {}), offset ({},{})",
        side, side, block_size, offset_x, offset_y
    );
    Ok((canvas, (offset_x, offset_y)))
}
