//! Core building blocks: generation parameters, output filename normalization and
//! the QR rendering seam. These are consumed by the high-level `api` module.
pub mod filename;
pub mod params;
pub mod render;
