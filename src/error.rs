//! Error types for pixwav

use thiserror::Error;

/// Result type alias for pixwav operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pixwav
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image loading or saving error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Input shorter than the format requires
    #[error("Truncated stream: need {need} bytes, have {have}")]
    TruncatedStream { need: usize, have: usize },

    /// Width/height that are zero, out of range, or overflow size arithmetic
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// RIFF/WAVE header does not match the canonical PCM layout
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),
}

impl Error {
    /// Create a truncated stream error
    pub fn truncated(need: usize, have: usize) -> Self {
        Error::TruncatedStream { need, have }
    }

    /// Create an invalid dimensions error
    pub fn invalid_dimensions<S: Into<String>>(msg: S) -> Self {
        Error::InvalidDimensions(msg.into())
    }

    /// Create a malformed header error
    pub fn malformed_header<S: Into<String>>(msg: S) -> Self {
        Error::MalformedHeader(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_message() {
        let err = Error::truncated(52, 44);
        assert_eq!(err.to_string(), "Truncated stream: need 52 bytes, have 44");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
