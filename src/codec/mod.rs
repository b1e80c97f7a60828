//! Numeral codec
//!
//! Conversion between integers and numeral text in both directions.

pub mod decoder;
pub mod digit_table;
pub mod encoder;
pub mod errors;

pub use decoder::{decode, decode_checked};
pub use digit_table::{encode_digit_table, encode_value_digit_table};
pub use encoder::{encode, encode_value};
pub use errors::{CodecError, DomainError, ParseError};
