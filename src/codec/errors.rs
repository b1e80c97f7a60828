//! Error types for numeral conversion
//!
//! Encoding fails on values outside the representable range, decoding
//! fails on characters outside the numeral alphabet. Grammar violations
//! are normally reported as a `ValidationVerdict`; they only become an
//! error when a caller asks for strict decoding.

use thiserror::Error;

use crate::diagnostics::RuleViolation;

/// Top-level codec error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Grammar violation: {0}")]
    Grammar(#[from] RuleViolation),
}

/// Integer outside [1, 3999999]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value} is not representable (valid range is 1 to 3999999)")]
pub struct DomainError {
    pub value: i64,
}

/// Text that cannot be read as numeral characters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `position` counts characters, not bytes
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}
