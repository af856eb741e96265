use thiserror::Error;

/// Problems with the command line itself. None of these leave a file behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Help requested")]
    HelpRequested,

    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    #[error("Invalid size parameter: {value}. Must be an integer")]
    InvalidSize { value: String },

    #[error("Missing required argument: --url")]
    MissingUrl,
}
