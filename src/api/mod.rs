//! Numeral codec WASM API
//!
//! This module provides the JavaScript-facing API for the converter UI.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `types`: Conversion direction and result types
//! - `convert`: The exported conversion, decoding and validation functions

pub mod helpers;
pub mod types;
pub mod convert;

pub use convert::*;
pub use types::{ConversionDirection, ConversionResult};
