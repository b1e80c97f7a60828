//! Structural numeral grammar
//!
//! Validation is a single left-to-right scan over each part of the
//! numeral with up to three characters of lookahead:
//! 1. Repetition: four in a row, doubled V/L/D
//! 2. Look forward two: lighter-than-next-but-one, letter sandwiches
//! 3. Look forward one: subtractive pair legality
//!
//! A second pass over a part that cleared all of the above rejects C on
//! both sides of D or M (CMC, CDC).
//!
//! A numeral with a bracketed region is split into the bracketed part
//! and the tail after `)`, and each part is checked on its own.

use crate::diagnostics::{RuleKind, RuleViolation, ValidationVerdict};
use crate::models::{Letter, CLOSE_BRACKET, OPEN_BRACKET};

/// Validate numeral text (ASCII case-insensitive)
pub fn validate(text: &str) -> ValidationVerdict {
    let upper = text.to_ascii_uppercase();

    let result = split_bracketed(&upper).and_then(|(bracketed, tail)| {
        check_part(bracketed)?;
        check_part(tail)
    });

    if let Err(violation) = &result {
        log::debug!("validate({:?}): {}", text, violation);
    }
    result.into()
}

/// Split into (bracketed, tail). Without a `(` the bracketed part is empty.
fn split_bracketed(text: &str) -> Result<(&str, &str), RuleViolation> {
    let open = match text.find(OPEN_BRACKET) {
        Some(open) => open,
        None => return Ok(("", text)),
    };

    if open > 0 {
        return Err(RuleViolation::new(
            RuleKind::MisplacedBracket,
            &text[..=open],
        ));
    }

    let inner = open + OPEN_BRACKET.len_utf8();
    match text[inner..].find(CLOSE_BRACKET) {
        Some(offset) => {
            let close = inner + offset;
            Ok((&text[inner..close], &text[close + CLOSE_BRACKET.len_utf8()..]))
        }
        None => Err(RuleViolation::new(RuleKind::MisplacedBracket, &text[open..])),
    }
}

/// Check one unbracketed run of characters
fn check_part(part: &str) -> Result<(), RuleViolation> {
    let chars: Vec<char> = part.chars().collect();
    let len = chars.len();

    let last = match chars.last() {
        Some(&last) => last,
        None => return Ok(()),
    };
    if Letter::from_char(last).is_none() {
        return Err(RuleViolation::new(RuleKind::InvalidCharacter, last));
    }

    let letters: Vec<Option<Letter>> = chars.iter().map(|&c| Letter::from_char(c)).collect();
    let span = |start: usize, width: usize| -> String { chars[start..start + width].iter().collect() };

    for i in 0..len - 1 {
        let c = match letters[i] {
            Some(letter) => letter,
            None => return Err(RuleViolation::new(RuleKind::InvalidCharacter, chars[i])),
        };
        let next = letters[i + 1];

        if i + 2 < len {
            let after_next = letters[i + 2];

            if i + 3 < len && chars[i..i + 4].iter().all(|&x| x == chars[i]) {
                return Err(RuleViolation::new(RuleKind::FourInARow, span(i, 4)));
            }

            let sandwich = chars[i + 2] == chars[i];

            let kind = if after_next.map_or(false, |c2| c.weight() < c2.weight()) {
                Some(RuleKind::LighterThanNextButOne)
            } else if c.is_five() && sandwich {
                Some(RuleKind::FiveAroundLetter)
            } else if c == Letter::I && sandwich && next != Some(Letter::I) {
                Some(RuleKind::IAroundLetter)
            } else if c == Letter::X && sandwich && matches!(next, Some(Letter::L | Letter::C)) {
                Some(RuleKind::XAroundFifty)
            } else {
                None
            };
            if let Some(kind) = kind {
                return Err(RuleViolation::new(kind, span(i, 3)));
            }
        }

        if let Some(next) = next {
            if c.weight() < next.weight() {
                check_subtractive_pair(c, next).map_err(|kind| RuleViolation::new(kind, span(i, 2)))?;
            }
            if c.is_five() && c == next {
                return Err(RuleViolation::new(RuleKind::FiveRepeated, span(i, 2)));
            }
        }
    }

    // Only reached when every rule above passed, so strings already
    // rejected there keep their reported rule.
    for i in 0..len.saturating_sub(2) {
        if chars[i] == 'C' && chars[i + 2] == 'C' && matches!(chars[i + 1], 'D' | 'M') {
            return Err(RuleViolation::new(RuleKind::CAroundFiveHundred, span(i, 3)));
        }
    }

    Ok(())
}

/// `current` sits directly before the heavier `next`
fn check_subtractive_pair(current: Letter, next: Letter) -> Result<(), RuleKind> {
    let successors = current.subtractive_successors();
    if successors.is_empty() {
        return Err(RuleKind::NotSubtractive);
    }
    if successors.contains(&next) {
        return Ok(());
    }
    Err(match current {
        Letter::I => RuleKind::IllegalAfterI,
        Letter::X => RuleKind::IllegalAfterX,
        _ => RuleKind::IllegalAfterC,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(text: &str) -> Option<(RuleKind, String)> {
        validate(text)
            .into_violation()
            .map(|v| (v.kind, v.substring))
    }

    fn kind(text: &str) -> Option<RuleKind> {
        violation(text).map(|(kind, _)| kind)
    }

    #[test]
    fn test_valid_numerals() {
        for text in ["I", "IV", "IX", "XL", "XC", "CD", "CM", "MCMXCIV", "MMMCMXCIX", "XIX", "CXC"] {
            assert!(validate(text).is_valid(), "{} should be valid", text);
        }
    }

    #[test]
    fn test_empty_text_is_valid() {
        assert!(validate("").is_valid());
        assert!(validate("()").is_valid());
    }

    #[test]
    fn test_four_in_a_row() {
        assert_eq!(violation("IIII"), Some((RuleKind::FourInARow, "IIII".to_string())));
        assert_eq!(validate("IIII").reason(), "0: IIII");
        assert_eq!(kind("MMMMCM"), Some(RuleKind::FourInARow));
    }

    #[test]
    fn test_lighter_than_next_but_one() {
        assert_eq!(violation("IIX"), Some((RuleKind::LighterThanNextButOne, "IIX".to_string())));
        assert_eq!(kind("XXC"), Some(RuleKind::LighterThanNextButOne));
        assert_eq!(kind("IVX"), Some(RuleKind::LighterThanNextButOne));
    }

    #[test]
    fn test_sandwiches() {
        assert_eq!(kind("VIV"), Some(RuleKind::FiveAroundLetter));
        assert_eq!(kind("DCD"), Some(RuleKind::FiveAroundLetter));
        assert_eq!(violation("IXI"), Some((RuleKind::IAroundLetter, "IXI".to_string())));
        assert_eq!(kind("IVI"), Some(RuleKind::IAroundLetter));
        assert_eq!(kind("XLX"), Some(RuleKind::XAroundFifty));
        assert_eq!(kind("XCX"), Some(RuleKind::XAroundFifty));
        assert_eq!(kind("CMC"), Some(RuleKind::CAroundFiveHundred));
        assert_eq!(kind("CDC"), Some(RuleKind::CAroundFiveHundred));
    }

    #[test]
    fn test_c_sandwich_does_not_mask_earlier_rules() {
        assert_eq!(validate("MMCDCM").reason(), "1: DCM");
        assert_eq!(validate("MCMCXM").reason(), "1: CXM");
        assert_eq!(validate("CMCC").reason(), "10: CMC");
        assert_eq!(validate("MCDCL").reason(), "10: CDC");
    }

    #[test]
    fn test_non_ascii_is_invalid_character() {
        assert_eq!(violation("ı"), Some((RuleKind::InvalidCharacter, "ı".to_string())));
        assert_eq!(violation("Xı"), Some((RuleKind::InvalidCharacter, "ı".to_string())));
        assert!(crate::codec::decode("ı").is_err());
    }

    #[test]
    fn test_subtractive_pairs() {
        assert_eq!(violation("VX"), Some((RuleKind::NotSubtractive, "VX".to_string())));
        assert_eq!(kind("DM"), Some(RuleKind::NotSubtractive));
        assert_eq!(kind("LC"), Some(RuleKind::NotSubtractive));
        assert_eq!(violation("IC"), Some((RuleKind::IllegalAfterI, "IC".to_string())));
        assert_eq!(validate("IC").reason(), "6: IC");
        assert_eq!(kind("IL"), Some(RuleKind::IllegalAfterI));
        assert_eq!(kind("XM"), Some(RuleKind::IllegalAfterX));
        assert_eq!(kind("XD"), Some(RuleKind::IllegalAfterX));
    }

    #[test]
    fn test_five_repeated() {
        assert_eq!(violation("VV"), Some((RuleKind::FiveRepeated, "VV".to_string())));
        assert_eq!(validate("VV").reason(), "9: VV");
        assert_eq!(kind("LL"), Some(RuleKind::FiveRepeated));
        assert_eq!(kind("MDD"), Some(RuleKind::FiveRepeated));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(violation("XA"), Some((RuleKind::InvalidCharacter, "A".to_string())));
        assert_eq!(violation("A1X"), Some((RuleKind::InvalidCharacter, "A".to_string())));
        assert_eq!(violation("X)"), Some((RuleKind::InvalidCharacter, ")".to_string())));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(validate("mcmxciv"), validate("MCMXCIV"));
        assert_eq!(validate("iiii"), validate("IIII"));
    }

    #[test]
    fn test_bracketed_parts_checked_independently() {
        assert!(validate("(IV)").is_valid());
        assert!(validate("(IX)CMXCIX").is_valid());
        assert!(validate("(MMMCMXCIX)CMXCIX").is_valid());
        assert_eq!(kind("(IIII)"), Some(RuleKind::FourInARow));
        assert_eq!(kind("(X)VV"), Some(RuleKind::FiveRepeated));
        // parts do not see across the bracket
        assert!(validate("(I)IX").is_valid());
    }

    #[test]
    fn test_misplaced_brackets() {
        assert_eq!(violation("X(V)"), Some((RuleKind::MisplacedBracket, "X(".to_string())));
        assert_eq!(violation("(V"), Some((RuleKind::MisplacedBracket, "(V".to_string())));
        assert_eq!(kind("(V)(X)"), Some(RuleKind::InvalidCharacter));
    }
}
