#![doc = r#"
SPRIXEL — a block-based raster-to-sprite converter.

This crate turns arbitrary raster images into fixed-size square sprites
through a pipeline of transparency trimming, optional k-means color
quantization, square padding, and block-based most-common-color
downsampling. It powers the SPRIXEL CLI and can be embedded in your own
Rust applications.

Stability
---------
The public library API is experimental in initial releases. It is built on
top of a working MVP used by the CLI and is robust, but may evolve as the
crate stabilizes. Breaking changes can occur.

Add dependency
--------------
```toml
[dependencies]
sprixel = "0.1"
```

Quick start: process an image to a file
---------------------------------------
```rust,no_run
use std::path::Path;
use sprixel::{ProcessingParams, process_image_to_path};

fn main() -> sprixel::Result<()> {
    let params = ProcessingParams {
        size: 64,
        colors: Some(16),
        ..Default::default()
    };

    process_image_to_path(
        Path::new("input/hero.png"),
        Path::new("output/hero.png"),
        &params,
    )
}
```

Process in-memory grids
-----------------------
```rust
use image::{Rgba, RgbaImage};
use sprixel::{ProcessingParams, process_pixel_pipeline};

fn main() -> sprixel::Result<()> {
    let image = RgbaImage::from_pixel(100, 60, Rgba([30, 140, 20, 255]));
    let params = ProcessingParams {
        size: 50,
        ..Default::default()
    };

    let (sprite, report) = process_pixel_pipeline(&image, &params)?;
    assert_eq!(sprite.dimensions(), (50, 50));
    assert_eq!((report.padded_width, report.padded_height), (100, 100));
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use sprixel::{ProcessingParams, process_directory_to_path};

fn main() -> sprixel::Result<()> {
    let params = ProcessingParams::default();
    let report = process_directory_to_path(
        Path::new("input"),
        Path::new("output"),
        &params,
        true, // continue_on_error
    )?;

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `sprixel::Result<T>`; match on `sprixel::Error`
to handle specific cases, e.g. reader or argument-validation errors.

```rust,no_run
use std::path::Path;
use sprixel::{Error, ProcessingParams, process_image_to_path};

fn main() {
    let params = ProcessingParams::default();
    match process_image_to_path(Path::new("/bad/path.png"), Path::new("/out.png"), &params) {
        Ok(()) => {}
        Err(Error::Reader(e)) => eprintln!("Reader error: {e}"),
        Err(Error::InvalidArgument { arg, value }) => eprintln!("Bad argument {arg}={value}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `OutputFormat`, `SmoothParams`).
- [`io`] — raster readers and sprite/metadata writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{DEFAULT_SEED, ProcessingParams};
pub use crate::error::{Error, Result};
pub use crate::types::{OutputFormat, SmoothParams};

// Readers and writers
pub use crate::io::reader::{ReaderError, is_supported_raster, load_rgba};
pub use crate::io::writers::{WriterError, create_metadata_sidecar, write_rgba_png};

// High-level API re-exports
pub use crate::api::{
    BatchReport, ProcessedSprite, SpriteReport, iterate_images, process_directory_to_path,
    process_image_to_buffer, process_image_to_path,
};

// Processing primitives for direct use
pub use crate::core::processing::cluster::{cluster_colors, unique_color_count};
pub use crate::core::processing::majority::{ColorLabelGrid, majority_filter};
pub use crate::core::processing::padding::pad_to_square_multiple;
pub use crate::core::processing::pipeline::process_pixel_pipeline;
pub use crate::core::processing::resize::block_resize;
pub use crate::core::processing::trim::trim_transparent;
