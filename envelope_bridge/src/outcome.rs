//! Results reported back across the boundary

use crate::error::BridgeError;
use serde::Serialize;
use std::error::Error as _;

/// Failure information handed to the native side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    /// Error kind, e.g. `NoResult` or `OperationFailed`
    pub error_type: String,
    /// Human-readable message
    pub message: String,
    /// Cause chain, one cause per line
    pub traceback: String,
}

/// Wire form of a failed operation
#[derive(Serialize)]
struct FailureJson<'a> {
    success: bool,
    error: &'a str,
    error_type: &'a str,
    traceback: &'a str,
}

impl FailureReport {
    /// JSON of the form `{"success":false,"error":..,"error_type":..,"traceback":..}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&FailureJson {
            success: false,
            error: &self.message,
            error_type: &self.error_type,
            traceback: &self.traceback,
        })
    }
}

impl From<&BridgeError> for FailureReport {
    fn from(err: &BridgeError) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        Self {
            error_type: err.kind().to_string(),
            message: err.to_string(),
            traceback: causes.join("\n"),
        }
    }
}

/// Result of running one operation
#[derive(Debug, Clone)]
pub struct OperationOutcome {
    /// Name the operation was run under
    pub name: String,
    /// Whether exactly one envelope was produced
    pub success: bool,
    /// Envelope JSON on success
    pub result: Option<String>,
    /// Failure information otherwise
    pub error: Option<FailureReport>,
    /// Execution duration in milliseconds
    pub duration_ms: f64,
}

impl OperationOutcome {
    pub(crate) fn succeeded(name: &str, result: String, duration_ms: f64) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            result: Some(result),
            error: None,
            duration_ms,
        }
    }

    pub(crate) fn failed(name: &str, err: &BridgeError, duration_ms: f64) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            result: None,
            error: Some(FailureReport::from(err)),
            duration_ms,
        }
    }

    /// Envelope JSON on success, the failure report otherwise
    pub fn into_result(self) -> std::result::Result<String, FailureReport> {
        match (self.result, self.error) {
            (Some(result), _) => Ok(result),
            (None, Some(report)) => Err(report),
            (None, None) => Err(FailureReport::from(&BridgeError::from(
                envelope_core::EnvelopeError::NoResult,
            ))),
        }
    }

    /// Text handed to the native side: the envelope or the failure report
    pub fn to_json(&self) -> serde_json::Result<String> {
        match (&self.result, &self.error) {
            (Some(result), _) => Ok(result.clone()),
            (None, Some(report)) => report.to_json(),
            (None, None) => FailureReport::from(&BridgeError::from(
                envelope_core::EnvelopeError::NoResult,
            ))
            .to_json(),
        }
    }
}
