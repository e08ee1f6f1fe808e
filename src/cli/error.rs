//! Errors surfaced by subcommand handlers.

use std::path::PathBuf;

use crate::ascii::AsciiError;
use crate::config::ConfigError;
use crate::stream::StreamError;

/// Top-level error for the `ascii-cam` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Ascii(#[from] AsciiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("Failed to decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Config file already exists: {0}")]
    ConfigExists(PathBuf),

    #[error("Missing {0}: pass it on the command line or set it in the [stream] config table")]
    MissingOption(&'static str),

    #[error("Failed to install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_error_is_transparent() {
        let err = CliError::from(AsciiError::InvalidArgument("columns must be > 0".to_string()));
        assert_eq!(err.to_string(), "Invalid argument: columns must be > 0");
    }

    #[test]
    fn test_missing_option_message() {
        let err = CliError::MissingOption("--width");
        assert!(err.to_string().starts_with("Missing --width"));
    }
}
