//! Crate-level error type and `Result` alias.
//! Splits failures into "the OCR capability could not be obtained" and
//! "recognition failed", which the CLI reports with distinct exit codes.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{engine} is not available: {message}")]
    CapabilityUnavailable { engine: &'static str, message: String },

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unreadable engine output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn recognition<E: std::fmt::Display>(e: E) -> Self {
        Error::Recognition(e.to_string())
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::CapabilityUnavailable { .. } => 2,
            _ => 1,
        }
    }
}
