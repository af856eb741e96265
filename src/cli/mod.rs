//! Command Line Interface (CLI) layer for the `qrcode` binary.
//!
//! This module defines argument parsing (`args`), usage errors (`errors`),
//! console reporting (`report`) and the orchestration logic (`runner`). It wires
//! user-provided options to the library functionality exposed via
//! `qrcode_cli::api`.
pub mod args;
pub mod errors;
pub mod report;
pub mod runner;

pub use runner::run;
