//! Models module for the numeral codec
//!
//! This module contains the alphabet, symbol table and value types
//! shared by the encoder, decoder and validator.

pub mod numeral;

// Re-export commonly used types
pub use numeral::*;
