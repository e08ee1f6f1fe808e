//! Error types for the ASCII conversion core.

/// Errors raised by the conversion core.
///
/// Degenerate geometry (zero rows, zero columns, empty rasters) is not an
/// error: those inputs produce a minimal well-formed result instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AsciiError {
    /// A caller passed an argument the core cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The off-screen raster surface could not be provided
    #[error("Failed to initialize raster surface: {0}")]
    Initialization(String),
}
