//! Diagnostics for numeral grammar checking
//!
//! A validation run produces a `ValidationVerdict`. An invalid verdict
//! carries the rule that failed and the substring that broke it, so
//! callers (and tests) can tell "four in a row" apart from "illegal
//! subtractive pair" even though the UI only shows one message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which grammar rule was broken
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Character outside the numeral alphabet
    InvalidCharacter,
    /// Letters before the first `(`, or a `(` that is never closed
    MisplacedBracket,
    /// Same letter four times in a row (IIII)
    FourInARow,
    /// Letter lighter than the one two places ahead (IIX, XXC)
    LighterThanNextButOne,
    /// V, L or D around another letter (VIV, DCD)
    FiveAroundLetter,
    /// I on both sides of another letter (IXI, IVI)
    IAroundLetter,
    /// X on both sides of L or C (XLX, XCX)
    XAroundFifty,
    /// C on both sides of D or M (CMC, CDC)
    CAroundFiveHundred,
    /// V, L, D or M placed before a heavier letter (VX, DM)
    NotSubtractive,
    /// I before something other than V or X (IL, IC)
    IllegalAfterI,
    /// X before something other than L or C (XD, XM)
    IllegalAfterX,
    /// C before something other than D or M
    IllegalAfterC,
    /// V, L or D doubled (VV, LL)
    FiveRepeated,
}

impl RuleKind {
    /// Machine-readable code used in the reason string
    pub fn code(self) -> &'static str {
        match self {
            RuleKind::InvalidCharacter => "char",
            RuleKind::MisplacedBracket => "bracket",
            RuleKind::FourInARow => "0",
            RuleKind::LighterThanNextButOne => "1",
            RuleKind::FiveAroundLetter => "2",
            RuleKind::IAroundLetter => "3",
            RuleKind::XAroundFifty => "4",
            RuleKind::NotSubtractive => "5",
            RuleKind::IllegalAfterI => "6",
            RuleKind::IllegalAfterX => "7",
            RuleKind::IllegalAfterC => "8",
            RuleKind::FiveRepeated => "9",
            RuleKind::CAroundFiveHundred => "10",
        }
    }
}

/// A broken rule together with the offending text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Error)]
#[error("{}: {}", .kind.code(), .substring)]
pub struct RuleViolation {
    pub kind: RuleKind,
    pub substring: String,
}

impl RuleViolation {
    pub fn new(kind: RuleKind, substring: impl Into<String>) -> Self {
        Self {
            kind,
            substring: substring.into(),
        }
    }
}

/// Outcome of validating one numeral
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationVerdict {
    Valid,
    Invalid(RuleViolation),
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationVerdict::Valid)
    }

    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            ValidationVerdict::Valid => None,
            ValidationVerdict::Invalid(violation) => Some(violation),
        }
    }

    pub fn into_violation(self) -> Option<RuleViolation> {
        match self {
            ValidationVerdict::Valid => None,
            ValidationVerdict::Invalid(violation) => Some(violation),
        }
    }

    /// Reason string: empty when valid, otherwise `"<code>: <substring>"`
    pub fn reason(&self) -> String {
        self.violation().map(ToString::to_string).unwrap_or_default()
    }
}

impl From<Result<(), RuleViolation>> for ValidationVerdict {
    fn from(result: Result<(), RuleViolation>) -> Self {
        match result {
            Ok(()) => ValidationVerdict::Valid,
            Err(violation) => ValidationVerdict::Invalid(violation),
        }
    }
}
