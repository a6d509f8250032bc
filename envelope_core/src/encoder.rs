//! Single-assignment result encoder
//!
//! A [`ResultEncoder`] is created fresh for one operation, receives at most
//! one value, and is discarded once the caller has read the encoded result.

use crate::array::NdArray;
use crate::envelope::ResultEnvelope;
use crate::error::{EnvelopeError, Result};
use crate::types::Value;

/// The value categories an envelope can carry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
    Array(&'a NdArray),
}

impl<'a> TryFrom<&'a Value> for Payload<'a> {
    type Error = EnvelopeError;

    fn try_from(value: &'a Value) -> Result<Self> {
        match value {
            Value::Bytes(b) => Ok(Payload::Bytes(b)),
            Value::String(s) => Ok(Payload::Text(s)),
            Value::NdArray(a) => Ok(Payload::Array(a)),
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::List(_)
            | Value::Object(_) => Err(EnvelopeError::UnsupportedType {
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl Payload<'_> {
    /// Encode the payload into its envelope
    pub fn encode(self) -> ResultEnvelope {
        match self {
            Payload::Bytes(b) => ResultEnvelope::from_bytes(b),
            Payload::Text(s) => ResultEnvelope::from_text(s),
            Payload::Array(a) => ResultEnvelope::from_array(a),
        }
    }
}

/// Collects exactly one result as envelope JSON
#[derive(Debug, Default)]
pub struct ResultEncoder {
    /// Serialized envelope, once collected
    result: Option<String>,
}

impl ResultEncoder {
    /// Create an empty encoder
    pub fn new() -> Self {
        Self { result: None }
    }

    /// Collect a value of any supported category
    ///
    /// Fails with [`EnvelopeError::AlreadyCollected`] if a result is already
    /// stored, whatever the value, and with [`EnvelopeError::UnsupportedType`]
    /// if the value is not bytes, text or a dense array. Neither failure
    /// changes the encoder's state.
    pub fn submit(&mut self, value: &Value) -> Result<()> {
        self.ensure_empty()?;
        let payload = Payload::try_from(value)?;
        tracing::debug!("Collecting {} result", value.type_name());
        self.set_result(&payload.encode())
    }

    /// Collect an opaque byte sequence
    pub fn submit_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_empty()?;
        self.set_result(&Payload::Bytes(bytes).encode())
    }

    /// Collect a text string
    pub fn submit_text(&mut self, text: &str) -> Result<()> {
        self.ensure_empty()?;
        self.set_result(&Payload::Text(text).encode())
    }

    /// Collect a dense numeric array
    pub fn submit_array(&mut self, array: &NdArray) -> Result<()> {
        self.ensure_empty()?;
        self.set_result(&Payload::Array(array).encode())
    }

    /// Serialize and store an envelope
    pub(crate) fn set_result(&mut self, envelope: &ResultEnvelope) -> Result<()> {
        self.ensure_empty()?;
        let json = envelope.to_json()?;
        tracing::debug!(tag = envelope.tag(), len = json.len(), "Result collected");
        self.result = Some(json);
        Ok(())
    }

    /// Get the stored envelope JSON
    pub fn get_result(&self) -> Result<&str> {
        self.result.as_deref().ok_or(EnvelopeError::NoResult)
    }

    /// Consume the encoder and take the envelope JSON
    pub fn into_result(self) -> Result<String> {
        self.result.ok_or(EnvelopeError::NoResult)
    }

    /// Whether a result has been stored
    pub fn is_collected(&self) -> bool {
        self.result.is_some()
    }

    fn ensure_empty(&self) -> Result<()> {
        if self.result.is_some() {
            tracing::warn!("Rejecting second result for single-use encoder");
            return Err(EnvelopeError::AlreadyCollected);
        }
        Ok(())
    }
}
