//! High-level, ergonomic library API: process images to sprite files or
//! in-memory buffers, plus batch helpers for directories. Prefer these
//! entrypoints over the low-level processing modules when embedding SPRIXEL.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::process_pixel_pipeline;
use crate::error::Result;
use crate::io::reader::{is_supported_raster, load_rgba};
use crate::io::writers::metadata::create_metadata_sidecar;
use crate::io::writers::png::write_rgba_png;

pub use crate::core::processing::pipeline::SpriteReport;

/// Result of in-memory processing
#[derive(Debug, Clone)]
pub struct ProcessedSprite {
    pub image: RgbaImage,
    pub report: SpriteReport,
}

/// Process an input raster to an in-memory sprite (no disk output)
pub fn process_image_to_buffer(
    input: &Path,
    params: &ProcessingParams,
) -> Result<ProcessedSprite> {
    params.validate()?;
    let image = load_rgba(input)?;
    let (sprite, report) = process_pixel_pipeline(&image, params)?;
    Ok(ProcessedSprite {
        image: sprite,
        report,
    })
}

/// Process an input raster and write the sprite (and, when requested, its
/// JSON metadata sidecar) to `output`. Nothing is written when processing
/// fails.
pub fn process_image_to_path(
    input: &Path,
    output: &Path,
    params: &ProcessingParams,
) -> Result<()> {
    let sprite = process_image_to_buffer(input, params)?;
    write_rgba_png(&sprite.image, output)?;
    if params.metadata {
        create_metadata_sidecar(&sprite.report, output)?;
    }
    Ok(())
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Return an iterator over supported raster files directly inside `input_dir`,
/// in sorted order for reproducible batch runs.
pub fn iterate_images(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_raster(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files.into_iter())
}

/// Process every supported raster from `input_dir` into `output_dir` using
/// `params`. If `continue_on_error` is true, per-file errors are counted in
/// the report and processing continues; otherwise the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.validate()?;
    std::fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_raster(&path) {
            files.push(path);
        } else {
            report.skipped += 1;
        }
    }
    files.sort();

    for path in files {
        let Some(stem) = path.file_stem() else {
            report.skipped += 1;
            continue;
        };
        let output_path = output_dir.join(format!(
            "{}.{}",
            stem.to_string_lossy(),
            params.format.extension()
        ));

        match process_image_to_path(&path, &output_path, params) {
            Ok(()) => {
                info!("Processed: {:?} -> {:?}", path, output_path);
                report.processed += 1;
            }
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", path, e);
            }
        }
    }
    Ok(report)
}
