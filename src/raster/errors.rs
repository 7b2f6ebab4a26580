//! Custom error types for bitmap decomposition

use std::fmt;
use std::io;

/// Error types for the rectangle decomposition pipeline
#[derive(Debug)]
pub enum RectError {
    /// I/O error
    IoError(io::Error),
    /// Image decoding or encoding failure
    ImageError(image::ImageError),
    /// SVG document writing failure
    XmlError(String),
    /// Bitmap smaller than the 2x2 minimum
    BitmapTooSmall { width: u32, height: u32 },
    /// Invalid argument supplied by the caller
    InvalidArgument(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RectError::IoError(e) => write!(f, "I/O error: {}", e),
            RectError::ImageError(e) => write!(f, "Image error: {}", e),
            RectError::XmlError(msg) => write!(f, "SVG writing error: {}", msg),
            RectError::BitmapTooSmall { width, height } => write!(
                f,
                "Bitmap must be at least 2x2 pixels, got {}x{}",
                width, height
            ),
            RectError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            RectError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for RectError {}

impl From<io::Error> for RectError {
    fn from(error: io::Error) -> Self {
        RectError::IoError(error)
    }
}

impl From<image::ImageError> for RectError {
    fn from(error: image::ImageError) -> Self {
        RectError::ImageError(error)
    }
}

impl From<quick_xml::Error> for RectError {
    fn from(error: quick_xml::Error) -> Self {
        RectError::XmlError(error.to_string())
    }
}

/// Result type for decomposition operations
pub type RectResult<T> = Result<T, RectError>;

impl From<String> for RectError {
    fn from(msg: String) -> Self {
        RectError::GenericError(msg)
    }
}
