//! Parsing module for numeral text
//!
//! This module contains the grammar checks that decide whether
//! text is a well-formed numeral.

pub mod grammar;
#[cfg(feature = "regex")]
pub mod pattern;

// Re-export commonly used functions
pub use grammar::validate;
#[cfg(feature = "regex")]
pub use pattern::matches_classical_pattern;
