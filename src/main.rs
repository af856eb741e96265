//! `qrcode` CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: collect arguments, run the
//! generator and exit with the appropriate status. For programmatic use, prefer
//! the library API (`qrcode_cli::api`).

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let tokens = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    cli::run(tokens)
}
