//! Error types for the Netgrid translator.
//!
//! The conversion functions themselves are total: malformed netlist lines
//! and dangling signal references degrade to partial results rather than
//! errors (the editor's validator reports syntax problems separately).
//! [`NetgridError`] covers the host-level failures around the core -
//! reading files and decoding graph JSON from the editor.

use thiserror::Error;

/// Result type alias using [`NetgridError`].
pub type Result<T> = std::result::Result<T, NetgridError>;

/// Unified error type for all Netgrid operations.
#[derive(Error, Debug)]
pub enum NetgridError {
    /// Error reading a netlist or graph file
    #[error("Failed to read file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Graph JSON from the editor could not be decoded
    #[error("Failed to decode graph JSON: {0}")]
    GraphDecodeError(#[from] serde_json::Error),

    /// Invalid simulator stimulus (non-binary characters in a bit string)
    #[error("Invalid stimulus for signal '{signal}': {message}")]
    InvalidStimulus { signal: String, message: String },
}

impl NetgridError {
    /// Create a file read error.
    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid stimulus error.
    pub fn invalid_stimulus(signal: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStimulus {
            signal: signal.into(),
            message: message.into(),
        }
    }
}
