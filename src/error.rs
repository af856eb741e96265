//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image and temporary-file errors, and provides semantic
//! variants for encoding and writer failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JPEG encoding failed: {0}")]
    Jpeg(String),

    #[error("Could not move image into place: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Image of {width}x{height} pixels is too large for the output format")]
    DimensionsTooLarge { width: u32, height: u32 },
}

impl Error {
    pub fn encode<E: std::fmt::Display>(e: E) -> Self {
        Error::Encode(e.to_string())
    }
}
