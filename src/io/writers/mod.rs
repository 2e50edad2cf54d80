use thiserror::Error;

pub mod metadata;
pub mod png;

pub use metadata::create_metadata_sidecar;
pub use png::write_rgba_png;

#[derive(Debug, Error)]
pub enum WriterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
