//! I/O layer: `writers` encode rendered bitmaps as PNG or JPEG streams.
pub mod writers;
