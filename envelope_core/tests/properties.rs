//! Property tests for the collected envelope
//!
//! Envelopes are inspected through `serde_json::Value` so the tests read the
//! wire format the way a native consumer would.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use envelope_core::{DType, EnvelopeError, NdArray, ResultEncoder, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn collect(value: Value) -> serde_json::Value {
    let mut encoder = ResultEncoder::new();
    encoder.submit(&value).unwrap();
    serde_json::from_str(encoder.get_result().unwrap()).unwrap()
}

fn decode_data(envelope: &serde_json::Value) -> Vec<u8> {
    STANDARD
        .decode(envelope["data"].as_str().unwrap())
        .unwrap()
}

fn shape_of(envelope: &serde_json::Value) -> Vec<usize> {
    envelope["shape"]
        .as_array()
        .unwrap()
        .iter()
        .map(|dim| dim.as_u64().unwrap() as usize)
        .collect()
}

fn valid_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<String>().prop_map(Value::String),
        proptest::collection::vec(any::<u8>(), 0..32).prop_map(Value::Bytes),
        proptest::collection::vec(any::<i16>(), 0..8)
            .prop_map(|v| Value::NdArray(NdArray::from_vec(vec![v.len()], v).unwrap())),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let envelope = collect(Value::Bytes(bytes.clone()));

        prop_assert_eq!(envelope["type"].as_str(), Some("bytes"));
        prop_assert_eq!(decode_data(&envelope), bytes);
    }

    #[test]
    fn text_passes_through(text in any::<String>()) {
        let envelope = collect(Value::String(text.clone()));

        prop_assert_eq!(envelope["type"].as_str(), Some("string"));
        prop_assert_eq!(envelope["data"].as_str(), Some(text.as_str()));
    }

    #[test]
    fn float_array_reconstructs(
        (rows, cols, values) in (0usize..5, 0usize..5).prop_flat_map(|(rows, cols)| {
            (Just(rows), Just(cols), proptest::collection::vec(any::<f64>(), rows * cols))
        })
    ) {
        let array = NdArray::from_vec(vec![rows, cols], values.clone()).unwrap();
        let envelope = collect(Value::NdArray(array));

        prop_assert_eq!(envelope["dtype"].as_str(), Some("float64"));
        prop_assert_eq!(shape_of(&envelope), vec![rows, cols]);

        let raw = decode_data(&envelope);
        prop_assert_eq!(raw.len(), rows * cols * DType::Float64.itemsize());

        let decoded: Vec<u64> = raw
            .chunks_exact(8)
            .map(|chunk| {
                let mut word = [0u8; 8];
                word.copy_from_slice(chunk);
                u64::from_le_bytes(word)
            })
            .collect();
        let expected: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn second_submit_keeps_first(first in valid_value(), second in valid_value()) {
        let mut encoder = ResultEncoder::new();
        encoder.submit(&first).unwrap();
        let stored = encoder.get_result().unwrap().to_string();

        let rejected = matches!(encoder.submit(&second), Err(EnvelopeError::AlreadyCollected));
        prop_assert!(rejected);
        prop_assert_eq!(encoder.get_result().unwrap(), stored.as_str());
    }
}

#[test]
fn int32_matrix_scenario() {
    let array = NdArray::from_vec(vec![2, 2], vec![1i32, 2, 3, 4]).unwrap();
    let envelope = collect(Value::from(array));

    assert_eq!(envelope["type"], "array");
    assert_eq!(envelope["dtype"], "int32");
    assert_eq!(shape_of(&envelope), vec![2, 2]);

    let values: Vec<i32> = decode_data(&envelope)
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
}

#[test]
fn every_dtype_matches_its_byte_length() {
    let arrays = vec![
        NdArray::from_vec(vec![2], vec![true, false]).unwrap(),
        NdArray::from_vec(vec![2], vec![-1i8, 1]).unwrap(),
        NdArray::from_vec(vec![2], vec![-1i16, 1]).unwrap(),
        NdArray::from_vec(vec![2], vec![-1i64, 1]).unwrap(),
        NdArray::from_vec(vec![2], vec![1u8, 2]).unwrap(),
        NdArray::from_vec(vec![2], vec![1u16, 2]).unwrap(),
        NdArray::from_vec(vec![2], vec![1u32, 2]).unwrap(),
        NdArray::from_vec(vec![2], vec![1u64, 2]).unwrap(),
        NdArray::from_vec(vec![2], vec![1.0f32, 2.0]).unwrap(),
    ];

    for array in arrays {
        let dtype = array.dtype();
        let envelope = collect(Value::from(array));

        assert_eq!(envelope["dtype"].as_str(), Some(dtype.name()));
        assert_eq!(decode_data(&envelope).len(), 2 * dtype.itemsize());
    }
}

#[test]
fn three_dimensional_array_is_row_major() {
    let values: Vec<u16> = (0..24).collect();
    let array = NdArray::from_vec(vec![2, 3, 4], values.clone()).unwrap();
    let envelope = collect(Value::from(array));

    assert_eq!(shape_of(&envelope), vec![2, 3, 4]);

    let decoded: Vec<u16> = decode_data(&envelope)
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();
    assert_eq!(decoded, values);
}
