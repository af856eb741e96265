use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder};

use crate::error::Result;

pub fn write_gray_png<W: Write>(writer: W, bitmap: &GrayImage) -> Result<()> {
    let encoder = PngEncoder::new(writer);
    encoder.write_image(
        bitmap.as_raw(),
        bitmap.width(),
        bitmap.height(),
        ExtendedColorType::L8,
    )?;
    Ok(())
}
