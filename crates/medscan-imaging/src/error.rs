//! Error types for the imaging engine.

use thiserror::Error;

/// Result type for imaging operations.
pub type ImagingResult<T> = Result<T, ImagingError>;

/// Errors that can occur during image analysis.
#[derive(Debug, Error)]
pub enum ImagingError {
    /// The input byte buffer could not be decoded to a pixel buffer.
    #[error("failed to decode image: {message}")]
    Decode {
        /// Human-readable decode failure description.
        message: String,
    },

    /// The input byte buffer was empty.
    #[error("empty image data")]
    EmptyInput,

    /// Two buffers that must share dimensions do not.
    #[error("dimension mismatch: expected {expected_width}x{expected_height}, found {found_width}x{found_height}")]
    DimensionMismatch {
        /// Expected width.
        expected_width: u32,
        /// Expected height.
        expected_height: u32,
        /// Found width.
        found_width: u32,
        /// Found height.
        found_height: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// JPEG/PNG encoding failed.
    #[error("failed to encode image: {message}")]
    Encode {
        /// Human-readable encode failure description.
        message: String,
    },

    /// PNG writer error.
    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImagingError {
    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an encode error.
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
