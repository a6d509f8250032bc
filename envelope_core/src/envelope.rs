//! Wire representation of a collected result

use crate::array::NdArray;
use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

/// Tagged envelope carrying exactly one payload
///
/// Serializes as `{"type": "<tag>", ...}`. Binary payloads use standard
/// padded base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResultEnvelope {
    /// Opaque binary payload
    Bytes { data: String },

    /// Text payload, passed through verbatim
    String { data: String },

    /// Dense numeric array
    Array {
        dtype: String,
        shape: Vec<usize>,
        data: String,
    },
}

impl ResultEnvelope {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        ResultEnvelope::Bytes {
            data: STANDARD.encode(bytes),
        }
    }

    pub fn from_text(text: &str) -> Self {
        ResultEnvelope::String {
            data: text.to_string(),
        }
    }

    pub fn from_array(array: &NdArray) -> Self {
        ResultEnvelope::Array {
            dtype: array.dtype().name().to_string(),
            shape: array.shape().to_vec(),
            data: STANDARD.encode(array.to_bytes()),
        }
    }

    /// The envelope's `type` tag
    pub fn tag(&self) -> &'static str {
        match self {
            ResultEnvelope::Bytes { .. } => "bytes",
            ResultEnvelope::String { .. } => "string",
            ResultEnvelope::Array { .. } => "array",
        }
    }

    /// Canonical JSON text
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
