use std::collections::HashMap;

use image::{Rgba, RgbaImage};
use ndarray::{Array2, s};
use tracing::info;

/// Pixel grid factored into integer labels over a deduplicated palette.
/// The palette is ordered by first occurrence in a row-major scan, so label
/// construction is deterministic for a given image.
pub struct ColorLabelGrid {
    pub palette: Vec<[u8; 4]>,
    pub labels: Array2<usize>,
}

impl ColorLabelGrid {
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut index: HashMap<[u8; 4], usize> = HashMap::new();
        let mut palette: Vec<[u8; 4]> = Vec::new();
        let mut labels = Array2::zeros((height, width));
        for (x, y, pixel) in image.enumerate_pixels() {
            let label = *index.entry(pixel.0).or_insert_with(|| {
                palette.push(pixel.0);
                palette.len() - 1
            });
            labels[[y as usize, x as usize]] = label;
        }
        Self { palette, labels }
    }

    pub fn to_image(&self) -> RgbaImage {
        let (height, width) = self.labels.dim();
        let mut image = RgbaImage::new(width as u32, height as u32);
        for ((y, x), &label) in self.labels.indexed_iter() {
            image.put_pixel(x as u32, y as u32, Rgba(self.palette[label]));
        }
        image
    }
}

/// Replace every pixel with the most frequent color of its kernel x kernel
/// neighborhood, clipped at the image borders. Ties go to the lowest label.
/// Each iteration updates all pixels from the previous iteration's labels
/// (synchronous update). A kernel of 1 or zero iterations is a no-op.
pub fn majority_filter(image: &RgbaImage, kernel: usize, iterations: usize) -> RgbaImage {
    if kernel <= 1 || iterations == 0 {
        return image.clone();
    }

    let grid = ColorLabelGrid::from_image(image);
    let (height, width) = grid.labels.dim();
    let pad = kernel / 2;

    let mut labels = grid.labels;
    let mut counts = vec![0usize; grid.palette.len()];
    for _ in 0..iterations {
        let mut next = labels.clone();
        for y in 0..height {
            let y0 = y.saturating_sub(pad);
            let y1 = (y + pad + 1).min(height);
            for x in 0..width {
                let x0 = x.saturating_sub(pad);
                let x1 = (x + pad + 1).min(width);

                counts.fill(0);
                for &label in labels.slice(s![y0..y1, x0..x1]).iter() {
                    counts[label] += 1;
                }
                let mut best = 0usize;
                for (label, &count) in counts.iter().enumerate() {
                    if count > counts[best] {
                        best = label;
                    }
                }
                next[[y, x]] = best;
            }
        }
        labels = next;
    }

    info!(
        "Majority filter applied: kernel {}, {} iteration(s), {} palette colors",
        kernel,
        iterations,
        grid.palette.len()
    );
    ColorLabelGrid {
        palette: grid.palette,
        labels,
    }
    .to_image()
}
