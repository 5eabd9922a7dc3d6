//! `"N,E"` / `"N,D"` key-string parsing.

use num_bigint::{BigInt, BigUint, Sign};
use thiserror::Error;

/// A key string that is not exactly two comma-separated base-10 integers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("expected 2 comma-separated values, found {0} values")]
    FieldCount(usize),
    #[error("failed to parse key: `{0}` is not a base-10 integer")]
    NotAnInteger(String),
}

pub(super) fn parse_pair(s: &str) -> Result<(BigInt, BigInt), KeyParseError> {
    let fields: Vec<&str> = s.split(',').collect();

    let [n, x] = fields.as_slice() else {
        return Err(KeyParseError::FieldCount(fields.len()));
    };

    Ok((parse_decimal(n)?, parse_decimal(x)?))
}

/// Parses an optionally signed run of ASCII digits.
///
/// Stricter than `BigInt::from_str`, which also accepts `_` separators.
fn parse_decimal(field: &str) -> Result<BigInt, KeyParseError> {
    let (sign, digits) = match field.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, field.strip_prefix('+').unwrap_or(field)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(KeyParseError::NotAnInteger(field.to_owned()));
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| KeyParseError::NotAnInteger(field.to_owned()))?;

    Ok(BigInt::from_biguint(sign, magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_exactly_one_comma() {
        assert_eq!(parse_pair("3233"), Err(KeyParseError::FieldCount(1)));
        assert_eq!(parse_pair("1,2,3"), Err(KeyParseError::FieldCount(3)));
        assert_eq!(parse_pair(""), Err(KeyParseError::FieldCount(1)));
    }

    #[test]
    fn rejects_non_decimal_fields() {
        for bad in ["0x21,7", "33,", ",7", "3_3,7", " 33,7", "33,7 ", "+,7", "33,1e3"] {
            assert!(
                matches!(parse_pair(bad), Err(KeyParseError::NotAnInteger(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn accepts_signs() {
        let (n, e) = parse_pair("-33,+7").unwrap();
        assert_eq!(n, BigInt::from(-33));
        assert_eq!(e, BigInt::from(7));
    }
}
