use std::path::Path;

use crate::core::params::DEFAULT_OUTPUT_FILE;

const ACCEPTED_EXTENSIONS: [&str; 2] = ["png", "jpg"];

/// Guarantees the returned filename ends in `.png` or `.jpg`.
///
/// Blank input falls back to [`DEFAULT_OUTPUT_FILE`]. A name that already carries an
/// accepted extension (in any letter case) is returned untouched; any other extension,
/// or none at all, is replaced with `.png` while directory components and the base
/// name are kept.
pub fn normalize_output_filename(candidate: &str) -> String {
    if candidate.trim().is_empty() {
        return DEFAULT_OUTPUT_FILE.to_string();
    }

    let path = Path::new(candidate);
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|ok| ext.eq_ignore_ascii_case(ok))
        });
    if accepted {
        return candidate.to_string();
    }

    path.with_extension("png").to_string_lossy().into_owned()
}
