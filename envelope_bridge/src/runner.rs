//! Runs one value-producing operation against a fresh encoder

use crate::error::Result;
use crate::outcome::OperationOutcome;
use envelope_core::ResultEncoder;

/// Run `op` with its own [`ResultEncoder`] and report the outcome
///
/// The operation must submit exactly one value. If it returns an error, any
/// value it already submitted is dropped. If it returns `Ok` without
/// submitting, the outcome is a `NoResult` failure.
pub fn run_operation<F>(name: &str, op: F) -> OperationOutcome
where
    F: FnOnce(&mut ResultEncoder) -> Result<()>,
{
    let span = tracing::info_span!("operation", name = %name);
    let _enter = span.enter();
    let start = std::time::Instant::now();

    let result = collect(op);
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    match result {
        Ok(json) => {
            tracing::info!(duration_ms, "Operation produced a result");
            OperationOutcome::succeeded(name, json, duration_ms)
        }
        Err(err) => {
            tracing::warn!(kind = err.kind(), duration_ms, "Operation failed: {}", err);
            OperationOutcome::failed(name, &err, duration_ms)
        }
    }
}

fn collect<F>(op: F) -> Result<String>
where
    F: FnOnce(&mut ResultEncoder) -> Result<()>,
{
    let mut encoder = ResultEncoder::new();
    op(&mut encoder)?;
    Ok(encoder.into_result()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use envelope_core::{NdArray, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_successful_operation() {
        let outcome = run_operation("greet", |rust| {
            rust.submit(&Value::from("hello"))?;
            Ok(())
        });

        assert!(outcome.success);
        assert_eq!(outcome.name, "greet");
        assert_eq!(
            outcome.result.as_deref(),
            Some(r#"{"type":"string","data":"hello"}"#)
        );
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_operation_without_result() {
        let outcome = run_operation("silent", |_| Ok(()));

        assert!(!outcome.success);
        assert_eq!(outcome.error.unwrap().error_type, "NoResult");
    }

    #[test]
    fn test_double_collection_fails_operation() {
        let outcome = run_operation("twice", |rust| {
            rust.submit_text("one")?;
            rust.submit_text("two")?;
            Ok(())
        });

        assert!(!outcome.success);
        assert!(outcome.result.is_none());
        assert_eq!(outcome.error.unwrap().error_type, "AlreadyCollected");
    }

    #[test]
    fn test_operation_error_discards_partial_result() {
        let outcome = run_operation("partial", |rust| {
            rust.submit_bytes(b"abcd")?;
            Err(BridgeError::operation("division by zero"))
        });

        assert!(!outcome.success);
        assert!(outcome.result.is_none());
        assert_eq!(
            outcome.to_json().unwrap(),
            r#"{"success":false,"error":"Operation failed: division by zero","error_type":"OperationFailed","traceback":""}"#
        );
    }

    #[test]
    fn test_each_run_gets_a_fresh_encoder() {
        let array = NdArray::from_vec(vec![2], vec![1.0f64, 2.0]).unwrap();

        let first = run_operation("first", |rust| Ok(rust.submit_array(&array)?));
        let second = run_operation("second", |rust| Ok(rust.submit_array(&array)?));

        assert!(first.success);
        assert!(second.success);
        assert_eq!(first.result, second.result);
    }
}
