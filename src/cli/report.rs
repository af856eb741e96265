//! Console reporting for the CLI.
//!
//! Formatting is pure (`format_report`); where the text goes and whether it is
//! colored is decided by the `Reporter` handed to the parser and runner.
use std::io::{self, IsTerminal, Write};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ReportLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ReportLevel {
    fn color_code(self) -> &'static str {
        match self {
            ReportLevel::Info => "36",
            ReportLevel::Success => "32",
            ReportLevel::Warning => "33",
            ReportLevel::Error => "31",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            ReportLevel::Info => "[INFO]",
            ReportLevel::Success => "[ OK ]",
            ReportLevel::Warning => "[WARN]",
            ReportLevel::Error => "[FAIL]",
        }
    }
}

/// Renders one report line, optionally wrapping the tag in ANSI color.
pub fn format_report(level: ReportLevel, message: &str, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m {}", level.color_code(), level.tag(), message)
    } else {
        format!("{} {}", level.tag(), message)
    }
}

pub trait Reporter {
    fn report(&mut self, level: ReportLevel, message: &str);

    /// Unstyled text such as the banner and usage help.
    fn plain(&mut self, text: &str);
}

/// Writes to stdout, errors to stderr. Colors only on a terminal and when
/// `NO_COLOR` is unset.
pub struct ConsoleReporter {
    stdout_color: bool,
    stderr_color: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        let allowed = std::env::var_os("NO_COLOR").is_none();
        Self {
            stdout_color: allowed && io::stdout().is_terminal(),
            stderr_color: allowed && io::stderr().is_terminal(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, level: ReportLevel, message: &str) {
        // Console write failures (closed pipe) have nowhere better to go.
        if level == ReportLevel::Error {
            let line = format_report(level, message, self.stderr_color);
            let _ = writeln!(io::stderr(), "{}", line);
        } else {
            let line = format_report(level, message, self.stdout_color);
            let _ = writeln!(io::stdout(), "{}", line);
        }
    }

    fn plain(&mut self, text: &str) {
        let _ = writeln!(io::stdout(), "{}", text);
    }
}

/// Collects report lines in memory.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryReporter {
    pub entries: Vec<(ReportLevel, String)>,
    pub plain: Vec<String>,
}

#[cfg(test)]
impl MemoryReporter {
    pub fn has(&self, level: ReportLevel, needle: &str) -> bool {
        self.entries
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

#[cfg(test)]
impl Reporter for MemoryReporter {
    fn report(&mut self, level: ReportLevel, message: &str) {
        self.entries.push((level, message.to_string()));
    }

    fn plain(&mut self, text: &str) {
        self.plain.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_formatting_has_no_escape_codes() {
        let line = format_report(ReportLevel::Warning, "size clamped", false);
        assert_eq!(line, "[WARN] size clamped");
    }

    #[test]
    fn colored_formatting_wraps_tag_only() {
        let line = format_report(ReportLevel::Error, "boom", true);
        assert_eq!(line, "\x1b[31m[FAIL]\x1b[0m boom");
        let line = format_report(ReportLevel::Success, "done", true);
        assert!(line.starts_with("\x1b[32m"));
    }
}
