//! Shared types and enums used across the crate.
//! Includes `ErrorCorrection` and `OutputFormat`.
use serde::{Deserialize, Serialize};

/// QR error-correction tier; higher tiers survive more damage at the cost of density.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// ~7% recoverable
    Low,
    /// ~15% recoverable
    Medium,
    /// ~25% recoverable
    Quartile,
    /// ~30% recoverable
    High,
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => qrcode::EcLevel::L,
            ErrorCorrection::Medium => qrcode::EcLevel::M,
            ErrorCorrection::Quartile => qrcode::EcLevel::Q,
            ErrorCorrection::High => qrcode::EcLevel::H,
        }
    }
}

impl std::fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCorrection::Low => write!(f, "L"),
            ErrorCorrection::Medium => write!(f, "M"),
            ErrorCorrection::Quartile => write!(f, "Q"),
            ErrorCorrection::High => write!(f, "H"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Picks the encoder for an already-normalized filename: `.jpg` means JPEG,
    /// everything else is written as PNG.
    pub fn from_filename(name: &str) -> Self {
        let is_jpg = std::path::Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg"));
        if is_jpg {
            OutputFormat::Jpeg
        } else {
            OutputFormat::Png
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "PNG"),
            OutputFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}
