//! Envelope Core
//!
//! Marshals one computed value into a self-describing JSON envelope that a
//! native caller can decode without knowing the producing environment.
//! Supported payloads are opaque bytes, text, and dense numeric arrays.

pub mod array;
pub mod encoder;
pub mod envelope;
pub mod error;
pub mod types;

pub use array::{ArrayData, DType, Element, NdArray};
pub use encoder::{Payload, ResultEncoder};
pub use envelope::ResultEnvelope;
pub use error::{EnvelopeError, Result};
pub use types::Value;
