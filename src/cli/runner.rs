use std::process::ExitCode;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use qrcode_cli::api::generate_to_path;
use qrcode_cli::{GeneratedQr, QrRenderer, QrcodeRenderer};

use super::args::{parse_args, usage, wants_log};
use super::errors::UsageError;
use super::report::{ConsoleReporter, ReportLevel, Reporter};

const BANNER: &str = concat!("QR Code Generator v", env!("CARGO_PKG_VERSION"));

/// Terminal state of one invocation.
#[derive(Debug)]
pub enum Outcome {
    HelpShown,
    UsageFailed(UsageError),
    RenderFailed(String),
    Saved(GeneratedQr),
}

impl Outcome {
    /// One-line description for the debug log.
    pub fn summary(&self) -> String {
        match self {
            Outcome::HelpShown => "help shown".to_string(),
            Outcome::UsageFailed(e) => format!("usage error: {}", e),
            Outcome::RenderFailed(message) => format!("generation failed: {}", message),
            Outcome::Saved(saved) => format!(
                "{} {}x{} written to {}",
                saved.format,
                saved.width,
                saved.height,
                saved.path.display()
            ),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Saved(_) => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run(tokens: Vec<String>) -> ExitCode {
    if wants_log(&tokens) {
        init_logging();
    }
    let mut reporter = ConsoleReporter::new();
    let outcome = execute(tokens, &mut reporter, &QrcodeRenderer);
    debug!("Finished: {}", outcome.summary());
    outcome.exit_code()
}

/// Parse, render and save, reporting progress through `reporter`.
pub fn execute(
    tokens: Vec<String>,
    reporter: &mut dyn Reporter,
    renderer: &dyn QrRenderer,
) -> Outcome {
    reporter.plain(BANNER);
    reporter.plain("");

    let params = match parse_args(tokens, reporter) {
        Ok(params) => params,
        Err(UsageError::HelpRequested) => {
            reporter.plain(&usage());
            return Outcome::HelpShown;
        }
        Err(e) => {
            reporter.report(ReportLevel::Error, &e.to_string());
            reporter.plain("Run with --help for usage.");
            return Outcome::UsageFailed(e);
        }
    };

    info!(
        "Generating QR code: url={:?} size={} output={:?}",
        params.url, params.pixel_size, params.output_file
    );

    match generate_to_path(&params, renderer) {
        Ok(saved) => {
            reporter.report(
                ReportLevel::Success,
                &format!("QR code saved to: {}", saved.path.display()),
            );
            reporter.report(ReportLevel::Success, &format!("Encoded URL: {}", saved.url));
            Outcome::Saved(saved)
        }
        Err(e) => {
            warn!("Generation failed: {}", e);
            let message = e.to_string();
            reporter.report(ReportLevel::Error, &format!("Error generating QR code: {}", message));
            Outcome::RenderFailed(message)
        }
    }
}
