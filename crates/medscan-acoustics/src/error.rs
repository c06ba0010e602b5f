//! Error types for the acoustic engine.

use thiserror::Error;

/// Result type for acoustic operations.
pub type AcousticsResult<T> = Result<T, AcousticsError>;

/// Errors that can occur during acoustic analysis.
#[derive(Debug, Error)]
pub enum AcousticsError {
    /// The input byte buffer was empty.
    #[error("empty audio data")]
    EmptyInput,

    /// The input could not be interpreted as a waveform.
    #[error("failed to decode audio: {message}")]
    Decode {
        /// Human-readable decode failure description.
        message: String,
    },
}

impl AcousticsError {
    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
