//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image-codec, and JSON errors, and provides a
//! semantic variant for the missing-input case callers match on.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Input sheet not found: {path}")]
    MissingInput { path: String },
}
