//! Error types for the operation boundary

use envelope_core::EnvelopeError;
use thiserror::Error;

/// Result type for operations run across the boundary
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors surfaced to the native side of the boundary
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The envelope contract was violated
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// The operation itself reported a failure
    #[error("Operation failed: {message}")]
    Operation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BridgeError {
    /// Failure raised by the producing code
    pub fn operation(message: impl Into<String>) -> Self {
        BridgeError::Operation {
            message: message.into(),
            source: None,
        }
    }

    /// Failure raised by the producing code, keeping the underlying cause
    pub fn operation_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        BridgeError::Operation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::Envelope(e) => e.kind(),
            BridgeError::Operation { .. } => "OperationFailed",
        }
    }
}
