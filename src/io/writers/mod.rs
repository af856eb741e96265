pub mod jpeg;
pub mod png;

use std::io::Write;

use image::GrayImage;

use crate::error::Result;
use crate::types::OutputFormat;

/// Encodes `bitmap` into `writer` using the encoder for `format`.
pub fn write_bitmap<W: Write>(writer: W, bitmap: &GrayImage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Png => png::write_gray_png(writer, bitmap),
        OutputFormat::Jpeg => jpeg::write_gray_jpeg(writer, bitmap),
    }
}
