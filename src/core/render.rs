//! Bitmap rendering seam. The `qrcode` crate owns symbol encoding and rasterization;
//! this module only adapts it to the crate's types.
use image::{GrayImage, Luma};
use qrcode::QrCode;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ErrorCorrection;

/// Anything able to turn text into a QR bitmap.
pub trait QrRenderer {
    /// Encodes `text` at `level` and draws every module as a `module_size` pixel square.
    fn render(&self, text: &str, level: ErrorCorrection, module_size: u32) -> Result<GrayImage>;
}

/// Renderer backed by the `qrcode` crate: black modules on white with the standard
/// four-module quiet zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodeRenderer;

impl QrRenderer for QrcodeRenderer {
    fn render(&self, text: &str, level: ErrorCorrection, module_size: u32) -> Result<GrayImage> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), level.into())
            .map_err(Error::encode)?;
        debug!(
            "Encoded {} bytes at level {} into a {}x{} symbol",
            text.len(),
            level,
            code.width(),
            code.width()
        );

        let bitmap = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(module_size, module_size)
            .build();
        Ok(bitmap)
    }
}
