//! Roman Numeral Codec WASM Module
//!
//! Converts integers to Roman numerals and back, and checks numeral
//! grammar. Values from 4000 up to 3,999,999 put the thousands in a
//! bracketed region: `(IV)` is 4000, `(IX)CMXCIX` is 9999.
//!
//! The codec is pure; `api` wraps it for the JavaScript UI.

pub mod models;
pub mod codec;
pub mod diagnostics;
pub mod parse;
pub mod api;

// Re-export commonly used types
pub use models::{Letter, NumeralValue, DIGIT_SYMBOLS, MAX_VALUE, MIN_VALUE};
pub use codec::{
    decode, decode_checked, encode, encode_digit_table, CodecError, DomainError, ParseError,
};
pub use diagnostics::{RuleKind, RuleViolation, ValidationVerdict};
pub use parse::validate;
#[cfg(feature = "regex")]
pub use parse::matches_classical_pattern;
pub use api::{convert, ConversionDirection, ConversionResult};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            wasm_warn!("logger already initialized");
        }
    }

    log::info!("Roman numeral codec WASM module initialized");
}
