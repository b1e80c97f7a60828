//! Numeral → integer decoder
//!
//! Pure arithmetic over the alphabet: the text is read right to left and
//! each letter is added, or subtracted when it is lighter than the letter
//! after it. Grammar is not checked here, so "IIII" decodes to 4. Use
//! `decode_checked` to validate first.

use crate::codec::errors::{CodecError, ParseError};
use crate::models::{Letter, NumeralValue, BRACKET_SCALE, CLOSE_BRACKET, OPEN_BRACKET};
use crate::parse::grammar::validate;

/// Decode numeral text to an integer
pub fn decode(text: &str) -> Result<i64, ParseError> {
    let chars: Vec<char> = text.chars().collect();

    let mut total: i64 = 0;
    let mut previous: i64 = 0;
    let mut scaled = false;

    for (position, &character) in chars.iter().enumerate().rev() {
        match character {
            // Reading backwards, ')' opens the bracketed region
            CLOSE_BRACKET => scaled = true,
            OPEN_BRACKET => scaled = false,
            _ => {
                let letter = Letter::from_char(character)
                    .ok_or(ParseError::InvalidCharacter { character, position })?;

                let mut weight = i64::from(letter.weight());
                if scaled {
                    weight *= i64::from(BRACKET_SCALE);
                }

                if weight < previous {
                    total -= weight;
                } else {
                    total += weight;
                }
                previous = weight;
            }
        }
    }

    Ok(total)
}

/// Validate, then decode. Fails on grammar violations as well as on bad
/// characters and on results outside the representable range.
pub fn decode_checked(text: &str) -> Result<NumeralValue, CodecError> {
    if let Some(violation) = validate(text).into_violation() {
        log::debug!("decode_checked: rejected {:?}: {}", text, violation);
        return Err(violation.into());
    }
    let value = decode(text)?;
    Ok(NumeralValue::new(value)?)
}
