//! Error types for building and rendering node trees

use thiserror::Error;

/// Result type alias for node operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or loading a node tree
#[derive(Error, Debug)]
pub enum Error {
    /// A write to the output sink failed. Rendering stops at the first
    /// failure; whatever was written before it stays in the sink.
    #[error("Failed to write to output sink: {0}")]
    SinkWrite(#[from] std::io::Error),

    /// A JSON node tree could not be parsed
    #[error("Invalid node tree: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// The underlying sink error, if this is a write failure
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Error::SinkWrite(e) => Some(e),
            _ => None,
        }
    }
}
