//! Error types for the audio core.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while decoding, processing, or encoding audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The byte stream does not start with a RIFF tag.
    #[error("invalid container: expected RIFF tag")]
    InvalidContainer,

    /// The RIFF container does not carry the WAVE format tag.
    #[error("invalid format: expected WAVE tag")]
    InvalidFormat,

    /// The host is big-endian; all multi-byte reads and writes in this
    /// codec assume a little-endian host.
    #[error("unsupported host endianness: little-endian host required")]
    UnsupportedEndianness,

    /// Bits per sample outside the supported set.
    #[error("unsupported bit depth: {bits} (only 8, 16, 24, 32 supported)")]
    UnsupportedBitDepth {
        /// The unsupported bits-per-sample value.
        bits: u16,
    },

    /// The stream ended before a non-empty `fmt ` chunk was found.
    #[error("missing fmt chunk in WAV stream")]
    MissingFmtChunk,

    /// The stream ended before a non-empty `data` chunk was found.
    #[error("missing data chunk in WAV stream")]
    MissingDataChunk,

    /// Carrier frequency that is zero, negative, or not a number.
    #[error("invalid frequency: {freq} Hz (must be positive)")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
