//! Shared types for the WASM API
//!
//! The direction the UI converts in, and the result object it displays.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Which way a conversion goes
#[wasm_bindgen]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionDirection {
    IntegerToRoman = 0,
    RomanToInteger = 1,
}

/// Result of converting one UI input
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConversionResult {
    pub input: String,
    /// Text to display: the converted value, or an invalid marker
    pub output: String,
    pub valid: bool,
    /// Diagnostic detail, empty when valid
    pub reason: String,
}

impl ConversionResult {
    pub fn valid(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            valid: true,
            reason: String::new(),
        }
    }

    pub fn invalid(
        input: impl Into<String>,
        output: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            valid: false,
            reason: reason.into(),
        }
    }

    /// Nothing typed yet
    pub fn empty() -> Self {
        Self::valid("", "")
    }
}
