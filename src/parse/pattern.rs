//! Regular-expression check for classical numerals
//!
//! Covers unbracketed numerals only. Used as a cross-check for the
//! structural grammar in `grammar.rs`; the two agree on every
//! classical-range numeral.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CLASSICAL_NUMERAL: Regex =
        Regex::new(r"(?i)^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
            .expect("classical numeral pattern compiles");
}

/// True when `text` is a well-formed unbracketed numeral (or empty)
pub fn matches_classical_pattern(text: &str) -> bool {
    CLASSICAL_NUMERAL.is_match(text)
}
