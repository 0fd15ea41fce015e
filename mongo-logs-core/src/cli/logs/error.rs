use crate::profile::DecodeError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("could not encode document as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Anything that stops the tail loop. None of these are retried.
#[derive(Debug, Error)]
pub enum TailError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("profile cursor failed: {0}")]
    Source(#[from] mongodb::error::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl From<DecodeError> for TailError {
    fn from(e: DecodeError) -> Self {
        Self::Format(FormatError::Decode(e))
    }
}

impl From<serde_json::Error> for TailError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(FormatError::Encode(e))
    }
}
