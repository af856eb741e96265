use jpeg_encoder::{ColorType, Encoder};
use std::io::Write;

use image::GrayImage;

use crate::error::{Error, Result};

/// Unbuffered: callers pass a buffered writer and flush it.
pub fn write_gray_jpeg<W: Write>(writer: W, bitmap: &GrayImage) -> Result<()> {
    let (width, height) = bitmap.dimensions();
    let too_large = || Error::DimensionsTooLarge { width, height };
    let cols = u16::try_from(width).map_err(|_| too_large())?;
    let rows = u16::try_from(height).map_err(|_| too_large())?;

    let encoder = Encoder::new(writer, 100);
    encoder
        .encode(bitmap.as_raw(), cols, rows, ColorType::Luma)
        .map_err(|e| Error::Jpeg(e.to_string()))
}
