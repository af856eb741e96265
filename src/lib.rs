#![doc = r#"
qrcode-cli: turn a URL into a QR-code image file.

The crate wraps the `qrcode` encoder with the small amount of policy the `qrcode`
command line tool needs: clamped module sizes, output filenames coerced to a
supported raster extension, error-correction level Q, and atomic writes of PNG or
JPEG files. The CLI is a thin layer over the functions re-exported here.

Quick start
-----------
```rust,no_run
use qrcode_cli::{generate, QrParams};

fn main() -> qrcode_cli::Result<()> {
    let params = QrParams {
        url: "https://example.com".to_string(),
        pixel_size: 12,
        output_file: "codes/example.png".to_string(),
    };

    let saved = generate(&params)?;
    println!("wrote {} ({}x{})", saved.path.display(), saved.width, saved.height);
    Ok(())
}
```

Custom renderers
----------------
`generate_to_path` accepts any [`QrRenderer`], which makes it possible to swap the
encoder or to test the save path without producing a real symbol.

Error handling
--------------
All public functions return `qrcode_cli::Result<T>`; match on `qrcode_cli::Error`
to separate encoding failures from filesystem problems.

Useful modules
--------------
- [`api`]: generation entry points.
- [`core`]: parameters, filename normalization and the renderer seam.
- [`io`]: PNG and JPEG writers.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::filename::normalize_output_filename;
pub use crate::core::params::{
    DEFAULT_OUTPUT_FILE, DEFAULT_PIXEL_SIZE, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE, QrParams,
    clamp_pixel_size,
};
pub use crate::core::render::{QrRenderer, QrcodeRenderer};
pub use crate::error::{Error, Result};
pub use crate::types::{ErrorCorrection, OutputFormat};

pub use crate::api::{ERROR_CORRECTION, GeneratedQr, generate, generate_to_path, save_bitmap};
