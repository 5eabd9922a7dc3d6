//! Signature value and its serialized forms.

use std::fmt::{Display, Formatter, Result as FmtResult, UpperHex};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Num;

use super::RsaError;

/// An RSA signature: a non-negative integer, normally below the modulus.
///
/// Three lossless serializations are supported:
/// - raw big-endian bytes ([`Signature::to_bytes_be`])
/// - base 10 (`Display` / `FromStr`)
/// - uppercase base 16 ([`Signature::to_hex`] / [`Signature::from_hex`]),
///   the form embedded in signed documents
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature(BigUint);

impl Signature {
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    /// Minimal big-endian encoding; zero encodes as a single `0x00` byte.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    pub fn to_hex(&self) -> String {
        format!("{:X}", self)
    }

    /// Parses hexadecimal digits of either case, without any `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, RsaError> {
        parse_radix(s, 16, |b| b.is_ascii_hexdigit())
    }

    #[inline]
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }
}

fn parse_radix(s: &str, radix: u32, is_digit: impl Fn(u8) -> bool) -> Result<Signature, RsaError> {
    // `BigUint::from_str_radix` tolerates `+` and `_`; a signature is digits only.
    if s.is_empty() || !s.bytes().all(is_digit) {
        return Err(RsaError::MalformedSignature(s.to_owned()));
    }

    BigUint::from_str_radix(s, radix)
        .map(Signature)
        .map_err(|_| RsaError::MalformedSignature(s.to_owned()))
}

impl From<BigUint> for Signature {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<Signature> for BigUint {
    fn from(value: Signature) -> Self {
        value.0
    }
}

impl FromStr for Signature {
    type Err = RsaError;

    /// Parses a base-10 signature.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_radix(s, 10, |b| b.is_ascii_digit())
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl UpperHex for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        UpperHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_rejects_signs_and_separators() {
        for bad in ["", "-25", "+25", "2_5", " 25", "25\n", "0x19", "ab"] {
            assert_eq!(
                bad.parse::<Signature>(),
                Err(RsaError::MalformedSignature(bad.to_owned())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn hex_is_case_insensitive_on_input() {
        let upper = Signature::from_hex("D0AC5E").unwrap();
        let lower = Signature::from_hex("d0ac5e").unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper.to_hex(), "D0AC5E");
        assert!(Signature::from_hex("0xD0").is_err());
    }

    #[test]
    fn zero_survives_every_form() {
        let zero = Signature::from(BigUint::from(0u8));

        assert_eq!(zero.to_string(), "0");
        assert_eq!(zero.to_hex(), "0");
        assert_eq!(Signature::from_bytes_be(&zero.to_bytes_be()), zero);
        assert_eq!(Signature::from_bytes_be(&[]), zero);
    }
}
