use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Color count must be greater than 0, got: {colors}")]
    InvalidColors { colors: usize },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image reader error: {0}")]
    Reader(#[from] sprixel::io::ReaderError),
}
