//! High-level library API: render a URL into a QR bitmap and persist it at the
//! configured path. Prefer these entrypoints over the low-level `core` and `io`
//! modules when embedding the generator.
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::GrayImage;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::core::params::QrParams;
use crate::core::render::{QrRenderer, QrcodeRenderer};
use crate::error::Result;
use crate::io::writers::write_bitmap;
use crate::types::{ErrorCorrection, OutputFormat};

/// Error-correction level used for every generated code.
pub const ERROR_CORRECTION: ErrorCorrection = ErrorCorrection::Quartile;

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQr {
    /// Absolute location of the written image
    pub path: PathBuf,
    /// Text that was encoded
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}

/// Render `params.url` and write it to `params.output_file` with the default renderer.
pub fn generate(params: &QrParams) -> Result<GeneratedQr> {
    generate_to_path(params, &QrcodeRenderer)
}

/// Render `params.url` with `renderer` and write it to `params.output_file`.
///
/// Missing parent directories are created. The image is encoded into a temporary
/// file next to the destination and then moved over it, so an existing file is
/// replaced and a failed write never leaves a truncated image behind.
pub fn generate_to_path(params: &QrParams, renderer: &dyn QrRenderer) -> Result<GeneratedQr> {
    let bitmap = renderer.render(&params.url, ERROR_CORRECTION, params.pixel_size)?;
    let (width, height) = bitmap.dimensions();
    info!(
        "Rendered {}x{} bitmap at {} px per module",
        width, height, params.pixel_size
    );

    let output = Path::new(&params.output_file);
    let format = OutputFormat::from_filename(&params.output_file);
    save_bitmap(&bitmap, output, format)?;

    let path = std::path::absolute(output)?;
    Ok(GeneratedQr {
        path,
        url: params.url.clone(),
        width,
        height,
        format,
    })
}

/// Temporary file created like a regular new file: 0o666 filtered by the process umask.
fn new_temp_file(dir: &Path) -> Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".qrcode-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    Ok(builder.tempfile_in(dir)?)
}

/// Encode `bitmap` as `format` and atomically place it at `output`.
pub fn save_bitmap(bitmap: &GrayImage, output: &Path, format: OutputFormat) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    debug!("Ensured output directory {:?}", dir);

    let mut tmp = new_temp_file(dir)?;
    // Overwriting keeps the destination's mode, as an in-place write would.
    if let Ok(existing) = fs::metadata(output) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_bitmap(&mut writer, bitmap, format)?;
        writer.flush()?;
    }
    tmp.persist(output)?;
    info!("save_bitmap: {} written to {:?}", format, output);
    Ok(())
}
