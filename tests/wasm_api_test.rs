//! WASM API test
//!
//! Checks the exported functions from inside a browser. Run with
//! `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use roman_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_int_to_roman() {
    assert_eq!(int_to_roman(1994.0), "MCMXCIV");
    assert_eq!(int_to_roman_fast(9999.0), "(IX)CMXCIX");
    assert_eq!(int_to_roman(0.0), "N/A");
}

#[wasm_bindgen_test]
fn test_roman_to_int() {
    assert_eq!(roman_to_int("MCMXCIV").unwrap(), 1994.0);
    assert_eq!(roman_to_int("IIII").unwrap(), 4.0);

    let err = roman_to_int("MCMA").unwrap_err();
    assert!(err.as_string().unwrap().contains("'A'"));
}

#[wasm_bindgen_test]
fn test_validate_roman() {
    assert_eq!(validate_roman("MCMXCIV"), "");
    assert_eq!(validate_roman("IIII"), "0: IIII");
}

#[cfg(feature = "regex")]
#[wasm_bindgen_test]
fn test_re_roman() {
    assert!(re_roman("MCMXCIV"));
    assert!(!re_roman("IIII"));
}

#[wasm_bindgen_test]
fn test_validation_verdict_object() {
    let verdict = validation_verdict("VV").unwrap();
    let back: roman_wasm::ValidationVerdict = serde_wasm_bindgen::from_value(verdict).unwrap();
    assert_eq!(back.reason(), "9: VV");
}

#[wasm_bindgen_test]
fn test_convert_value() {
    let result: JsValue = convert_value("4000", ConversionDirection::IntegerToRoman).unwrap();
    let result: ConversionResult = serde_wasm_bindgen::from_value(result).unwrap();
    assert_eq!(result.output, "(IV)");
    assert!(result.valid);

    let json = convert_value_json("IC", ConversionDirection::RomanToInteger).unwrap();
    assert!(json.contains(r#""valid":false"#));
    assert!(json.contains(r#""reason":"6: IC""#));
}
