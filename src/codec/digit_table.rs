//! Table-driven encoder
//!
//! Looks up one precomputed symbol string per decimal digit instead of
//! doing repeated subtraction. At most seven lookups, no division.
//! Produces exactly the same output as `encoder::encode`.

use crate::codec::encoder::collapse_adjacent_brackets;
use crate::codec::errors::DomainError;
use crate::models::NumeralValue;

/// Symbol strings indexed by [decimal position][digit], ones first
#[rustfmt::skip]
const DIGIT_TABLE: [[&str; 10]; 7] = [
    ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"],
    ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"],
    ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"],
    ["", "M", "MM", "MMM", "(IV)", "(V)", "(VI)", "(VII)", "(VIII)", "(IX)"],
    ["", "(X)", "(XX)", "(XXX)", "(XL)", "(L)", "(LX)", "(LXX)", "(LXXX)", "(XC)"],
    ["", "(C)", "(CC)", "(CCC)", "(CD)", "(D)", "(DC)", "(DCC)", "(DCCC)", "(CM)"],
    // Millions stop at 3: the range ends below 4,000,000
    ["", "(M)", "(MM)", "(MMM)", "", "", "", "", "", ""],
];

/// Encode an integer with the digit table
pub fn encode_digit_table(value: i64) -> Result<String, DomainError> {
    let value = NumeralValue::new(value)?;
    Ok(encode_value_digit_table(value))
}

pub fn encode_value_digit_table(value: NumeralValue) -> String {
    let digits = value.get().to_string();
    let positions = digits.len();

    let mut numeral = String::new();
    for (i, digit) in digits.bytes().enumerate() {
        let position = positions - 1 - i;
        numeral.push_str(DIGIT_TABLE[position][usize::from(digit - b'0')]);
    }

    collapse_adjacent_brackets(&numeral)
}
