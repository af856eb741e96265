use serde::{Deserialize, Serialize};

/// Default output path used when no `--output` is given.
pub const DEFAULT_OUTPUT_FILE: &str = "qrcode.png";
/// Default pixel size of one QR module.
pub const DEFAULT_PIXEL_SIZE: u32 = 20;
pub const MIN_PIXEL_SIZE: u32 = 10;
pub const MAX_PIXEL_SIZE: u32 = 100;

/// Generation parameters suitable for presets and embedding applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrParams {
    /// Text to encode; required and non-blank
    pub url: String,
    /// Pixel edge length of each module, within [MIN_PIXEL_SIZE, MAX_PIXEL_SIZE]
    pub pixel_size: u32,
    /// Destination path ending in `.png` or `.jpg`
    pub output_file: String,
}

impl Default for QrParams {
    fn default() -> Self {
        Self {
            url: String::new(),
            pixel_size: DEFAULT_PIXEL_SIZE,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

/// Clamps a requested module size into the supported range.
pub fn clamp_pixel_size(requested: i64) -> u32 {
    requested.clamp(MIN_PIXEL_SIZE as i64, MAX_PIXEL_SIZE as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let params = QrParams::default();
        assert!(params.url.is_empty());
        assert_eq!(params.pixel_size, 20);
        assert_eq!(params.output_file, "qrcode.png");
    }

    #[test]
    fn clamp_covers_both_bounds() {
        for n in [-1000, -1, 0, 5, 9] {
            assert_eq!(clamp_pixel_size(n), 10);
        }
        for n in [101, 250, i64::MAX] {
            assert_eq!(clamp_pixel_size(n), 100);
        }
        for n in 10..=100 {
            assert_eq!(clamp_pixel_size(n), n as u32);
        }
    }

    #[test]
    fn partial_preset_fills_defaults() {
        let params: QrParams =
            serde_json::from_str(r#"{ "url": "https://example.com" }"#).unwrap();
        assert_eq!(params.url, "https://example.com");
        assert_eq!(params.pixel_size, DEFAULT_PIXEL_SIZE);
        assert_eq!(params.output_file, DEFAULT_OUTPUT_FILE);
    }
}
