use clap::{CommandFactory, Parser};
use tracing::debug;

use qrcode_cli::{QrParams, clamp_pixel_size, normalize_output_filename};

use super::errors::UsageError;
use super::report::{ReportLevel, Reporter};

/// Declares the command surface and renders `--help`.
///
/// Tokens are scanned by [`parse_args`] rather than clap because flags match
/// case-insensitively and unrecognized tokens are skipped instead of rejected.
#[derive(Parser, Debug)]
#[command(
    name = "qrcode",
    version,
    about = "Generate a QR-code image from a URL",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Print this help and exit
    #[arg(short, long)]
    pub help: bool,

    /// Text to encode (required)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Pixel size of one QR module, clamped to 10..=100
    #[arg(short, long, value_name = "N", default_value_t = 20)]
    pub size: i64,

    /// Output image; extensions other than .png/.jpg are replaced with .png
    #[arg(short, long, value_name = "FILE", default_value = "qrcode.png")]
    pub output: String,

    /// Enable debug logging on stderr (RUST_LOG overrides the filter)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

/// Usage text printed for `--help` and for an empty command line.
pub fn usage() -> String {
    CliArgs::command().render_help().to_string()
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Flag {
    Help,
    Url,
    Size,
    Output,
    Log,
}

impl Flag {
    fn classify(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "-h" | "--help" => Some(Flag::Help),
            "-u" | "--url" => Some(Flag::Url),
            "-s" | "--size" => Some(Flag::Size),
            "-o" | "--output" => Some(Flag::Output),
            "--log" => Some(Flag::Log),
            _ => None,
        }
    }

    fn takes_value(self) -> bool {
        matches!(self, Flag::Url | Flag::Size | Flag::Output)
    }
}

/// True when `--log` appears as a flag before any `--help`. Values of
/// `--url`, `--size` and `--output` are skipped, as [`parse_args`] does.
pub fn wants_log(tokens: &[String]) -> bool {
    let mut tokens = tokens.iter();
    while let Some(token) = tokens.next() {
        match Flag::classify(token) {
            Some(Flag::Log) => return true,
            Some(Flag::Help) => return false,
            Some(flag) if flag.takes_value() => {
                tokens.next();
            }
            _ => {}
        }
    }
    false
}

fn take_value<I>(tokens: &mut I, flag: &str) -> Result<String, UsageError>
where
    I: Iterator<Item = String>,
{
    tokens.next().ok_or_else(|| UsageError::MissingValue {
        flag: flag.to_string(),
    })
}

/// Scans the argument list into [`QrParams`], reporting each accepted flag.
///
/// `-h/--help` stops the scan wherever it appears as a flag. A token following
/// `--url`, `--size` or `--output` is always taken as that flag's value.
pub fn parse_args<I>(tokens: I, reporter: &mut dyn Reporter) -> Result<QrParams, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut tokens = tokens.into_iter().peekable();
    if tokens.peek().is_none() {
        return Err(UsageError::HelpRequested);
    }

    let mut params = QrParams::default();

    while let Some(token) = tokens.next() {
        match Flag::classify(&token) {
            Some(Flag::Help) => return Err(UsageError::HelpRequested),
            Some(Flag::Url) => {
                let url = take_value(&mut tokens, &token)?;
                reporter.report(ReportLevel::Info, &format!("URL set to: {}", url));
                params.url = url;
            }
            Some(Flag::Size) => {
                let raw = take_value(&mut tokens, &token)?;
                let requested: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| UsageError::InvalidSize { value: raw.clone() })?;
                let size = clamp_pixel_size(requested);
                if i64::from(size) != requested {
                    reporter.report(
                        ReportLevel::Warning,
                        &format!("Size {} is out of range, using {}", requested, size),
                    );
                } else {
                    reporter.report(ReportLevel::Info, &format!("Pixel size set to: {}", size));
                }
                params.pixel_size = size;
            }
            Some(Flag::Output) => {
                let candidate = take_value(&mut tokens, &token)?;
                let output = normalize_output_filename(&candidate);
                if output != candidate {
                    reporter.report(
                        ReportLevel::Warning,
                        &format!("Output filename changed from '{}' to '{}'", candidate, output),
                    );
                } else {
                    reporter.report(ReportLevel::Info, &format!("Output file set to: {}", output));
                }
                params.output_file = output;
            }
            // Handled before parsing so logging is live while we scan.
            Some(Flag::Log) => {}
            None => debug!("Ignoring unrecognized argument: {:?}", token),
        }
    }

    if params.url.trim().is_empty() {
        return Err(UsageError::MissingUrl);
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::report::MemoryReporter;

    fn parse(args: &[&str]) -> (Result<QrParams, UsageError>, MemoryReporter) {
        let mut reporter = MemoryReporter::default();
        let tokens = args.iter().map(|s| s.to_string());
        let result = parse_args(tokens, &mut reporter);
        (result, reporter)
    }

    #[test]
    fn help_text_lists_every_flag() {
        CliArgs::command().debug_assert();
        let text = usage();
        for flag in ["--help", "--url", "--size", "--output", "--log"] {
            assert!(text.contains(flag), "usage is missing {}", flag);
        }
    }

    #[test]
    fn empty_input_requests_help() {
        let (result, _) = parse(&[]);
        assert_eq!(result, Err(UsageError::HelpRequested));
    }

    #[test]
    fn url_only_uses_defaults() {
        let (result, reporter) = parse(&["-u", "https://example.com"]);
        let params = result.unwrap();
        assert_eq!(params.url, "https://example.com");
        assert_eq!(params.pixel_size, 20);
        assert_eq!(params.output_file, "qrcode.png");
        assert!(reporter.has(ReportLevel::Info, "URL set to: https://example.com"));
    }

    #[test]
    fn flags_are_case_insensitive() {
        let (result, _) = parse(&["--URL", "https://example.com", "-S", "42", "--Output", "a.png"]);
        let params = result.unwrap();
        assert_eq!(params.pixel_size, 42);
        assert_eq!(params.output_file, "a.png");
    }

    #[test]
    fn help_short_circuits_anywhere() {
        let (result, _) = parse(&["-u", "https://example.com", "--HELP"]);
        assert_eq!(result, Err(UsageError::HelpRequested));
        let (result, _) = parse(&["-h", "-s", "abc"]);
        assert_eq!(result, Err(UsageError::HelpRequested));
    }

    #[test]
    fn size_is_clamped_into_range() {
        for (raw, expected) in [("5", 10), ("-3", 10), ("9", 10), ("10", 10), ("55", 55), ("100", 100), ("101", 100), ("5000", 100)] {
            let (result, _) = parse(&["-u", "x", "-s", raw]);
            assert_eq!(result.unwrap().pixel_size, expected, "size {}", raw);
        }
    }

    #[test]
    fn clamping_is_reported_as_warning() {
        let (_, reporter) = parse(&["-u", "x", "-s", "5"]);
        assert!(reporter.has(ReportLevel::Warning, "using 10"));
        let (_, reporter) = parse(&["-u", "x", "-s", "30"]);
        assert!(reporter.has(ReportLevel::Info, "Pixel size set to: 30"));
    }

    #[test]
    fn non_numeric_size_fails() {
        let (result, _) = parse(&["-u", "x", "-s", "abc"]);
        assert_eq!(
            result,
            Err(UsageError::InvalidSize {
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn missing_values_fail() {
        let (result, _) = parse(&["-u"]);
        assert_eq!(result, Err(UsageError::MissingValue { flag: "-u".to_string() }));
        let (result, _) = parse(&["-u", "x", "--size"]);
        assert_eq!(result, Err(UsageError::MissingValue { flag: "--size".to_string() }));
        let (result, _) = parse(&["-u", "x", "-O"]);
        assert_eq!(result, Err(UsageError::MissingValue { flag: "-O".to_string() }));
    }

    #[test]
    fn blank_or_absent_url_fails() {
        let (result, _) = parse(&["-u", ""]);
        assert_eq!(result, Err(UsageError::MissingUrl));
        let (result, _) = parse(&["-u", "   "]);
        assert_eq!(result, Err(UsageError::MissingUrl));
        let (result, _) = parse(&["-s", "30"]);
        assert_eq!(result, Err(UsageError::MissingUrl));
    }

    #[test]
    fn unrecognized_tokens_are_ignored() {
        let (result, reporter) = parse(&["stray", "-u", "x", "--verbose", "-z"]);
        assert_eq!(result.unwrap().url, "x");
        assert!(reporter.entries.iter().all(|(l, _)| *l != ReportLevel::Error));
    }

    #[test]
    fn renamed_output_gets_distinct_notice() {
        let (result, reporter) = parse(&["-u", "x", "-o", "out.gif"]);
        assert_eq!(result.unwrap().output_file, "out.png");
        assert!(reporter.has(ReportLevel::Warning, "changed from 'out.gif' to 'out.png'"));
        assert!(!reporter.has(ReportLevel::Info, "Output file set to"));

        let (_, reporter) = parse(&["-u", "x", "-o", "out.jpg"]);
        assert!(reporter.has(ReportLevel::Info, "Output file set to: out.jpg"));
    }

    #[test]
    fn value_tokens_are_taken_verbatim() {
        let (result, _) = parse(&["-u", "--size"]);
        let params = result.unwrap();
        assert_eq!(params.url, "--size");
        assert_eq!(params.pixel_size, 20);
    }

    #[test]
    fn log_flag_is_detected_in_any_case() {
        let tokens = vec!["-u".to_string(), "x".to_string(), "--LOG".to_string()];
        assert!(wants_log(&tokens));
        assert!(!wants_log(&tokens[..2]));
    }

    #[test]
    fn log_as_a_value_does_not_enable_logging() {
        let tokens: Vec<String> = ["-u", "--log"].iter().map(|s| s.to_string()).collect();
        assert!(!wants_log(&tokens));
        let (result, _) = parse(&["-u", "--log"]);
        assert_eq!(result.unwrap().url, "--log");

        let tokens: Vec<String> = ["-o", "a.png", "--Log", "-u", "x"].iter().map(|s| s.to_string()).collect();
        assert!(wants_log(&tokens));
    }
}
