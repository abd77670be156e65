#![cfg(all(feature = "serde", feature = "numeric", feature = "time"))]
//! Serialization of the error types under the `serde` feature.

use rstest::rstest;
use serde_json::json;
use utilkit::numeric::{ParseNumericError, parse};
use utilkit::time::{TimeError, midnight_by_time_zone};

#[rstest]
fn test_parse_error_serializes_with_input() {
    let error = parse::<u16>("-3").unwrap_err();

    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({ "NegativeUnsigned": { "input": "-3", "type_name": "u16" } })
    );
}

#[rstest]
fn test_time_error_deserializes() {
    let value = json!({ "ZoneNotFound": { "name": "Moon/Base" } });
    let error: TimeError = serde_json::from_value(value).unwrap();

    assert_eq!(Err(error), midnight_by_time_zone("Moon/Base"));
}

#[rstest]
fn test_invalid_parse_error_round_trips() {
    let error = ParseNumericError::Invalid {
        input: "x".to_string(),
        type_name: "f32".to_string(),
    };
    let text = serde_json::to_string(&error).unwrap();

    let decoded: ParseNumericError = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, error);
}
