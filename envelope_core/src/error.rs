//! Error types for the result envelope

use thiserror::Error;

/// Result type for envelope operations
pub type Result<T> = std::result::Result<T, EnvelopeError>;

/// Errors that can occur while collecting a result
///
/// Every variant is a contract violation by the producing operation. None of
/// them are retryable.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// The submitted value is not bytes, text or a dense numeric array
    #[error("Unsupported type: {actual}")]
    UnsupportedType { actual: String },

    /// A result was already stored in this encoder
    #[error("Result already collected")]
    AlreadyCollected,

    /// The result was read before anything was stored
    #[error("No result collected")]
    NoResult,

    /// Array element count disagrees with its shape
    #[error("Array shape mismatch: shape {shape:?} holds {expected} elements, got {actual}")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EnvelopeError {
    /// Stable name of the error kind, used in failure reports
    pub fn kind(&self) -> &'static str {
        match self {
            EnvelopeError::UnsupportedType { .. } => "UnsupportedType",
            EnvelopeError::AlreadyCollected => "AlreadyCollected",
            EnvelopeError::NoResult => "NoResult",
            EnvelopeError::ShapeMismatch { .. } => "ShapeMismatch",
            EnvelopeError::Serialization(_) => "Serialization",
        }
    }
}
