//! Envelope Bridge
//!
//! Runs value-producing operations on the dynamic side of the boundary.
//! Each run gets its own encoder, and the native side receives either exactly
//! one envelope or an explicit failure report.

pub mod error;
pub mod observability;
pub mod outcome;
pub mod runner;

pub use error::{BridgeError, Result};
pub use observability::init_tracing;
pub use outcome::{FailureReport, OperationOutcome};
pub use runner::run_operation;
