//! Verify `validate` against the JSON test vectors stored in `test-vectors/`.
//!
//! Each case carries an input value and either the expected validated
//! payload or the expected error code and message. The same file can be
//! replayed by non-Rust hosts through the C ABI.

use todo_core::{validate, TodoInput};

#[test]
fn validate_test_vectors() {
    let raw = include_str!("../../test-vectors/validate.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let cases = vectors["cases"].as_array().unwrap();
    assert!(!cases.is_empty());

    for case in cases {
        let name = case["name"].as_str().unwrap();
        let result = validate(&case["input"]);
        let expected = &case["expected"];

        if let Some(ok) = expected.get("ok") {
            let input = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
            assert_eq!(input.text(), ok["text"].as_str().unwrap(), "{name}: text");
            assert_eq!(serde_json::to_value(&input).unwrap(), *ok, "{name}: serialized");
        } else {
            let err = match result {
                Ok(input) => panic!("{name}: expected error, got {input:?}"),
                Err(e) => e,
            };
            let expected_err = &expected["err"];
            assert_eq!(err.code(), expected_err["code"].as_str().unwrap(), "{name}: code");
            assert_eq!(
                err.to_string(),
                expected_err["message"].as_str().unwrap(),
                "{name}: message"
            );
        }
    }
}

#[test]
fn deserialize_matches_test_vectors() {
    let raw = include_str!("../../test-vectors/validate.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let decoded = serde_json::from_value::<TodoInput>(case["input"].clone());
        assert_eq!(
            decoded.is_ok(),
            case["expected"].get("ok").is_some(),
            "{name}: deserialize outcome"
        );
    }
}
