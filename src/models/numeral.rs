//! Numeral alphabet and value types
//!
//! The seven numeral letters, the canonical symbol table used by the
//! greedy encoder, and the `NumeralValue` domain type.

use serde::{Deserialize, Serialize};

use crate::codec::errors::DomainError;

/// Smallest representable value
pub const MIN_VALUE: i64 = 1;

/// Largest representable value (bracketed thousands included)
pub const MAX_VALUE: i64 = 3_999_999;

/// Largest value written without brackets
pub const CLASSICAL_MAX: u32 = 3_999;

/// Multiplier applied to letters inside a bracketed region
pub const BRACKET_SCALE: u32 = 1_000;

pub const OPEN_BRACKET: char = '(';
pub const CLOSE_BRACKET: char = ')';

/// A single numeral letter
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letter {
    M,
    D,
    C,
    L,
    X,
    V,
    I,
}

impl Letter {
    /// All letters, heaviest first
    pub const ALL: [Letter; 7] = [
        Letter::M,
        Letter::D,
        Letter::C,
        Letter::L,
        Letter::X,
        Letter::V,
        Letter::I,
    ];

    /// Parse a letter, ignoring case
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'M' => Some(Letter::M),
            'D' => Some(Letter::D),
            'C' => Some(Letter::C),
            'L' => Some(Letter::L),
            'X' => Some(Letter::X),
            'V' => Some(Letter::V),
            'I' => Some(Letter::I),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::M => 'M',
            Letter::D => 'D',
            Letter::C => 'C',
            Letter::L => 'L',
            Letter::X => 'X',
            Letter::V => 'V',
            Letter::I => 'I',
        }
    }

    /// Base weight, without any bracket scaling
    pub fn weight(self) -> u32 {
        match self {
            Letter::M => 1000,
            Letter::D => 500,
            Letter::C => 100,
            Letter::L => 50,
            Letter::X => 10,
            Letter::V => 5,
            Letter::I => 1,
        }
    }

    /// V, L and D: the letters that may never repeat
    pub fn is_five(self) -> bool {
        matches!(self, Letter::V | Letter::L | Letter::D)
    }

    /// Letters allowed to follow this one in a subtractive pair.
    ///
    /// Empty for letters that may not subtract at all.
    pub fn subtractive_successors(self) -> &'static [Letter] {
        match self {
            Letter::I => &[Letter::V, Letter::X],
            Letter::X => &[Letter::L, Letter::C],
            Letter::C => &[Letter::D, Letter::M],
            _ => &[],
        }
    }
}

/// One entry of the canonical symbol table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitSymbol {
    pub symbol: &'static str,
    pub weight: u32,
}

/// Canonical (symbol, weight) pairs in strictly decreasing weight order
pub const DIGIT_SYMBOLS: [DigitSymbol; 13] = [
    DigitSymbol { symbol: "M", weight: 1000 },
    DigitSymbol { symbol: "CM", weight: 900 },
    DigitSymbol { symbol: "D", weight: 500 },
    DigitSymbol { symbol: "CD", weight: 400 },
    DigitSymbol { symbol: "C", weight: 100 },
    DigitSymbol { symbol: "XC", weight: 90 },
    DigitSymbol { symbol: "L", weight: 50 },
    DigitSymbol { symbol: "XL", weight: 40 },
    DigitSymbol { symbol: "X", weight: 10 },
    DigitSymbol { symbol: "IX", weight: 9 },
    DigitSymbol { symbol: "V", weight: 5 },
    DigitSymbol { symbol: "IV", weight: 4 },
    DigitSymbol { symbol: "I", weight: 1 },
];

/// An integer known to lie in the representable range
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "i64")]
pub struct NumeralValue(u32);

impl NumeralValue {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(DomainError { value })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// True when the value needs no bracketed region
    pub fn is_classical(self) -> bool {
        self.0 <= CLASSICAL_MAX
    }
}

impl TryFrom<i64> for NumeralValue {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NumeralValue> for i64 {
    fn from(value: NumeralValue) -> Self {
        i64::from(value.0)
    }
}
