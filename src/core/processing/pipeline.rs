use image::RgbaImage;
use serde::Serialize;
use tracing::info;

use crate::core::params::ProcessingParams;
use crate::core::processing::cluster::{cluster_colors, unique_color_count};
use crate::core::processing::majority::majority_filter;
use crate::core::processing::padding::pad_to_square_multiple;
use crate::core::processing::resize::block_resize;
use crate::core::processing::trim::trim_transparent;
use crate::error::Result;

/// Dimensions and palette statistics observed at each pipeline stage,
/// suitable for the JSON metadata sidecar.
#[derive(Debug, Clone, Serialize)]
pub struct SpriteReport {
    pub source_width: u32,
    pub source_height: u32,
    pub trimmed_width: u32,
    pub trimmed_height: u32,
    pub unique_colors: usize,
    pub quantized_colors: Option<usize>,
    pub padded_width: u32,
    pub padded_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
    pub sprite_size: usize,
}

/// Run the full sprite pipeline over an in-memory grid: trim the transparent
/// border, optionally quantize the palette, pad to a square multiple of the
/// sprite size, downsample block-by-block, and optionally smooth the result.
/// Each stage consumes the previous stage's grid and produces a fresh one.
pub fn process_pixel_pipeline(
    image: &RgbaImage,
    params: &ProcessingParams,
) -> Result<(RgbaImage, SpriteReport)> {
    params.validate()?;

    let (source_width, source_height) = image.dimensions();

    let trimmed = trim_transparent(image);
    let (trimmed_width, trimmed_height) = trimmed.dimensions();

    let unique_colors = unique_color_count(&trimmed);
    let (quantized, quantized_colors) = match params.colors {
        Some(n_colors) => {
            let clustered = cluster_colors(&trimmed, n_colors, params.seed)?;
            (clustered, Some(n_colors.min(unique_colors)))
        }
        None => (trimmed, None),
    };

    let (padded, (offset_x, offset_y)) = pad_to_square_multiple(&quantized, params.size)?;
    let (padded_width, padded_height) = padded.dimensions();

    let sprite = block_resize(&padded, params.size)?;

    let sprite = match params.smooth {
        Some(smooth) => majority_filter(&sprite, smooth.kernel, smooth.iterations),
        None => sprite,
    };

    info!(
        "Pipeline complete: {}x{} -> {}x{} sprite",
        source_width,
        source_height,
        sprite.width(),
        sprite.height()
    );

    let report = SpriteReport {
        source_width,
        source_height,
        trimmed_width,
        trimmed_height,
        unique_colors,
        quantized_colors,
        padded_width,
        padded_height,
        offset_x,
        offset_y,
        sprite_size: params.size,
    };
    Ok((sprite, report))
}
