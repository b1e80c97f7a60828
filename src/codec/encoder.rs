//! Greedy integer → numeral encoder
//!
//! Values up to 3999 are written with the canonical symbol table.
//! Larger values put the thousands in a single bracketed region:
//! 4000 → `(IV)`, 9999 → `(IX)CMXCIX`.

use crate::codec::errors::DomainError;
use crate::models::{
    NumeralValue, BRACKET_SCALE, CLASSICAL_MAX, CLOSE_BRACKET, DIGIT_SYMBOLS, OPEN_BRACKET,
};

/// Encode an integer as a numeral
pub fn encode(value: i64) -> Result<String, DomainError> {
    let value = NumeralValue::new(value)?;
    Ok(encode_value(value))
}

/// Encode a value already known to be in range
pub fn encode_value(value: NumeralValue) -> String {
    let mut remaining = value.get();
    let mut numeral = String::new();

    // At most two levels: the bracketed thousands, then the plain rest.
    if remaining > CLASSICAL_MAX {
        let mut excess = remaining / BRACKET_SCALE;
        // A trailing thousands digit below 4 stays outside the brackets as M's.
        if excess % 10 < 4 {
            excess -= excess % 10;
        }

        numeral.push(OPEN_BRACKET);
        numeral.push_str(&encode_classical(excess));
        numeral.push(CLOSE_BRACKET);

        remaining -= excess * BRACKET_SCALE;
        log::trace!("encode: bracketed {} thousands, {} left", excess, remaining);
    }

    numeral.push_str(&encode_classical(remaining));
    collapse_adjacent_brackets(&numeral)
}

/// Greedy subtraction against the symbol table, for 0..=3999
fn encode_classical(mut remaining: u32) -> String {
    debug_assert!(remaining <= CLASSICAL_MAX);

    let mut numeral = String::new();
    for digit in DIGIT_SYMBOLS.iter() {
        if remaining == 0 {
            break;
        }
        let count = remaining / digit.weight;
        for _ in 0..count {
            numeral.push_str(digit.symbol);
        }
        remaining -= count * digit.weight;
    }
    numeral
}

/// Merge consecutive bracketed groups: `(X)(IV)` → `(XIV)`
pub(crate) fn collapse_adjacent_brackets(numeral: &str) -> String {
    numeral.replace(")(", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(1).unwrap(), "I");
        assert_eq!(encode(4).unwrap(), "IV");
        assert_eq!(encode(9).unwrap(), "IX");
        assert_eq!(encode(40).unwrap(), "XL");
        assert_eq!(encode(1994).unwrap(), "MCMXCIV");
        assert_eq!(encode(2024).unwrap(), "MMXXIV");
        assert_eq!(encode(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_encode_bracketed_thousands() {
        assert_eq!(encode(4000).unwrap(), "(IV)");
        assert_eq!(encode(4001).unwrap(), "(IV)I");
        assert_eq!(encode(5000).unwrap(), "(V)");
        assert_eq!(encode(9999).unwrap(), "(IX)CMXCIX");
        assert_eq!(encode(14000).unwrap(), "(XIV)");
        assert_eq!(encode(3_999_999).unwrap(), "(MMMCMXCIX)CMXCIX");
    }

    #[test]
    fn test_low_thousands_digit_stays_unbracketed() {
        // excess 13 rounds down to 10, the 3 becomes MMM
        assert_eq!(encode(13000).unwrap(), "(X)MMM");
        assert_eq!(encode(10000).unwrap(), "(X)");
        assert_eq!(encode(1_003_000).unwrap(), "(M)MMM");
        assert_eq!(encode(21_500).unwrap(), "(XX)MD");
    }

    #[test]
    fn test_encode_out_of_range() {
        assert_eq!(encode(0), Err(DomainError { value: 0 }));
        assert_eq!(encode(-1), Err(DomainError { value: -1 }));
        assert_eq!(encode(4_000_000), Err(DomainError { value: 4_000_000 }));
    }

    #[test]
    fn test_collapse_adjacent_brackets() {
        assert_eq!(collapse_adjacent_brackets("(X)(IV)"), "(XIV)");
        assert_eq!(collapse_adjacent_brackets("(M)(CM)(XC)(IX)"), "(MCMXCIX)");
        assert_eq!(collapse_adjacent_brackets("MCM"), "MCM");
    }
}
