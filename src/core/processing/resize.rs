use std::collections::HashMap;

use image::{Rgba, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Most frequent exact RGBA color in the block, counted over a row-major
/// scan. Ties go to the color encountered first; an empty block yields
/// fully transparent.
fn most_common_color(
    image: &RgbaImage,
    x_range: (u32, u32),
    y_range: (u32, u32),
) -> Rgba<u8> {
    let mut counts: HashMap<[u8; 4], (usize, usize)> = HashMap::new();
    let mut order = 0usize;
    for y in y_range.0..y_range.1 {
        for x in x_range.0..x_range.1 {
            let color = image.get_pixel(x, y).0;
            counts
                .entry(color)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, order));
            order += 1;
        }
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(color, _)| Rgba(color))
        .unwrap_or(Rgba([0, 0, 0, 0]))
}

/// Downsample the image to exactly `target_size` x `target_size` by reducing
/// each block to its most common color. Block spans are `floor(dim / target)`;
/// the final block per axis runs to the true edge, so non-multiple dimensions
/// are still fully covered.
pub fn block_resize(image: &RgbaImage, target_size: usize) -> Result<RgbaImage> {
    if target_size == 0 {
        return Err(Error::ZeroSize { size: target_size });
    }

    let (width, height) = (image.width() as usize, image.height() as usize);
    let span_x = width / target_size;
    let span_y = height / target_size;

    info!(
        "Block-based downsampling: {}x{} -> {}x{} ({}x{} blocks)",
        width, height, target_size, target_size, span_x, span_y
    );

    let mut output = RgbaImage::new(target_size as u32, target_size as u32);
    for by in 0..target_size {
        let y_start = by * span_y;
        let y_end = if by + 1 == target_size {
            height
        } else {
            ((by + 1) * span_y).min(height)
        };
        for bx in 0..target_size {
            let x_start = bx * span_x;
            let x_end = if bx + 1 == target_size {
                width
            } else {
                ((bx + 1) * span_x).min(width)
            };

            let color = most_common_color(
                image,
                (x_start as u32, x_end as u32),
                (y_start as u32, y_end as u32),
            );
            output.put_pixel(bx as u32, by as u32, color);
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_always_target_sized() {
        for (w, h, target) in [(100, 100, 50), (64, 64, 64), (10, 7, 3), (3, 9, 5)] {
            let image = RgbaImage::new(w, h);
            let resized = block_resize(&image, target).unwrap();
            assert_eq!(resized.dimensions(), (target as u32, target as u32));
        }
    }

    #[test]
    fn uniform_image_stays_uniform() {
        let image = RgbaImage::from_pixel(100, 100, Rgba([12, 34, 56, 255]));
        let resized = block_resize(&image, 50).unwrap();
        assert!(resized.pixels().all(|p| p.0 == [12, 34, 56, 255]));
    }

    #[test]
    fn majority_color_wins_per_block() {
        // 4x4 image, target 2: each 2x2 block has 3 red / 1 green
        let mut image = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        image.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
        image.put_pixel(2, 0, Rgba([0, 255, 0, 255]));
        image.put_pixel(0, 2, Rgba([0, 255, 0, 255]));
        image.put_pixel(2, 2, Rgba([0, 255, 0, 255]));

        let resized = block_resize(&image, 2).unwrap();
        assert!(resized.pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn ties_go_to_first_color_in_scan_order() {
        // 2x2 block with two colors at equal count; (0,0) is scanned first
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([1, 1, 1, 255]));
        image.put_pixel(1, 0, Rgba([2, 2, 2, 255]));
        image.put_pixel(0, 1, Rgba([2, 2, 2, 255]));
        image.put_pixel(1, 1, Rgba([1, 1, 1, 255]));

        let resized = block_resize(&image, 1).unwrap();
        assert_eq!(resized.get_pixel(0, 0).0, [1, 1, 1, 255]);
    }

    #[test]
    fn transparent_pixels_count_as_their_own_color() {
        let mut image = RgbaImage::new(3, 1);
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        image.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
        image.put_pixel(2, 0, Rgba([200, 0, 0, 255]));

        let resized = block_resize(&image, 1).unwrap();
        assert_eq!(resized.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn degenerate_dimensions_produce_transparent_pixels() {
        // 2x2 source, target 4: spans are zero, only the last row/column
        // blocks see any pixels
        let image = RgbaImage::from_pixel(2, 2, Rgba([5, 5, 5, 255]));
        let resized = block_resize(&image, 4).unwrap();
        assert_eq!(resized.dimensions(), (4, 4));
        assert_eq!(resized.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(resized.get_pixel(3, 3).0, [5, 5, 5, 255]);
    }

    #[test]
    fn deterministic_across_runs() {
        let mut image = RgbaImage::new(9, 9);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 31 % 256) as u8, (y * 17 % 256) as u8, 77, 255]);
        }
        let a = block_resize(&image, 3).unwrap();
        let b = block_resize(&image, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_target_is_rejected() {
        let image = RgbaImage::new(4, 4);
        assert!(matches!(
            block_resize(&image, 0),
            Err(Error::ZeroSize { size: 0 })
        ));
    }
}
