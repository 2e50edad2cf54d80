//! I/O layer for decoding input rasters and writing sprite outputs.
//! Provides the RGBA `reader` and `writers` for PNG outputs and JSON
//! metadata sidecars.
pub mod reader;
pub use reader::{ReaderError, is_supported_raster, load_rgba};

pub mod writers;
pub use writers::WriterError;
