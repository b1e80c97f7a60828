//! WASM API for numeral conversion
//!
//! `convert` is the single entry point the UI calls on every keystroke.
//! The remaining exports give JavaScript direct access to each codec
//! operation.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{error_value, serialize, to_json, whole_number};
use crate::api::types::{ConversionDirection, ConversionResult};
use crate::codec::{decode, decode_checked, encode, encode_digit_table, CodecError, DomainError};
use crate::parse::validate;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Shown for integers outside the representable range
pub const NOT_REPRESENTABLE: &str = "N/A";

/// Shown for text that is not a number or not a well-formed numeral
pub const INVALID_VALUE: &str = "Invalid value";

/// Convert raw UI text in the given direction
pub fn convert(text: &str, direction: ConversionDirection) -> ConversionResult {
    let input = text.trim();
    if input.is_empty() {
        return ConversionResult::empty();
    }

    let result = match direction {
        ConversionDirection::IntegerToRoman => integer_to_roman(input),
        ConversionDirection::RomanToInteger => roman_to_integer(input),
    };

    if !result.valid {
        wasm_warn!("convert {:?} ({:?}) rejected: {}", input, direction, result.reason);
    }
    result
}

fn integer_to_roman(input: &str) -> ConversionResult {
    let value: i64 = match input.parse() {
        Ok(value) => value,
        Err(_) => {
            return ConversionResult::invalid(
                input,
                INVALID_VALUE,
                format!("{:?} is not an integer", input),
            )
        }
    };

    match encode(value) {
        Ok(numeral) => ConversionResult::valid(input, numeral),
        Err(e) => ConversionResult::invalid(input, NOT_REPRESENTABLE, e.to_string()),
    }
}

fn roman_to_integer(input: &str) -> ConversionResult {
    match decode_checked(input) {
        Ok(value) => ConversionResult::valid(input, value.get().to_string()),
        Err(CodecError::Domain(e)) => ConversionResult::invalid(input, NOT_REPRESENTABLE, e.to_string()),
        Err(CodecError::Grammar(violation)) => {
            ConversionResult::invalid(input, INVALID_VALUE, violation.to_string())
        }
        Err(e) => ConversionResult::invalid(input, INVALID_VALUE, e.to_string()),
    }
}

fn encode_or_not_representable(number: f64, encoder: fn(i64) -> Result<String, DomainError>) -> String {
    match whole_number(number).map(encoder) {
        Some(Ok(numeral)) => numeral,
        _ => NOT_REPRESENTABLE.to_string(),
    }
}

// ============================================================================
// WASM exports
// ============================================================================

/// Integer to numeral, greedy encoder. "N/A" when not representable.
#[wasm_bindgen(js_name = intToRoman)]
pub fn int_to_roman(number: f64) -> String {
    encode_or_not_representable(number, encode)
}

/// Integer to numeral, digit-table encoder. Same output as `intToRoman`.
#[wasm_bindgen(js_name = intToRomanFast)]
pub fn int_to_roman_fast(number: f64) -> String {
    encode_or_not_representable(number, encode_digit_table)
}

/// Numeral to integer, without grammar checking. Throws on characters
/// outside the numeral alphabet.
#[wasm_bindgen(js_name = romanToInt)]
pub fn roman_to_int(text: &str) -> Result<f64, JsValue> {
    wasm_log!("romanToInt called: {:?}", text);
    decode(text)
        .map(|value| value as f64)
        .map_err(|e| error_value(e.to_string()))
}

/// Grammar check. Empty string when valid, `"<code>: <substring>"` otherwise.
#[wasm_bindgen(js_name = validateRoman)]
pub fn validate_roman(text: &str) -> String {
    validate(text).reason()
}

/// Grammar check returning the full verdict object
#[wasm_bindgen(js_name = validationVerdict)]
pub fn validation_verdict(text: &str) -> Result<JsValue, JsValue> {
    serialize(&validate(text), "Verdict serialization error")
}

/// Regular-expression check for unbracketed numerals
#[cfg(feature = "regex")]
#[wasm_bindgen(js_name = reRoman)]
pub fn re_roman(text: &str) -> bool {
    crate::parse::matches_classical_pattern(text)
}

/// Convert UI text, returning a `ConversionResult` object
#[wasm_bindgen(js_name = convertValue)]
pub fn convert_value(text: &str, direction: ConversionDirection) -> Result<JsValue, JsValue> {
    wasm_info!("convertValue called: {:?} ({:?})", text, direction);
    let result = convert(text, direction);
    serialize(&result, "Conversion result serialization error")
}

/// Convert UI text, returning the `ConversionResult` as JSON
#[wasm_bindgen(js_name = convertValueJson)]
pub fn convert_value_json(text: &str, direction: ConversionDirection) -> Result<String, JsValue> {
    wasm_info!("convertValueJson called: {:?} ({:?})", text, direction);
    let result = convert(text, direction);
    to_json(&result, "JSON serialization error").map_err(JsValue::from)
}
