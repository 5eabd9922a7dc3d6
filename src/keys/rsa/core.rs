//! Public and private RSA key types.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use num_bigint::BigInt;

use super::parse::{KeyParseError, parse_pair};

/// An RSA public key `(n, e)`, used only for verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    n: BigInt,
    e: BigInt,
}

impl PublicKey {
    pub fn new(n: impl Into<BigInt>, e: impl Into<BigInt>) -> Self {
        Self {
            n: n.into(),
            e: e.into(),
        }
    }

    /// The modulus `n`.
    #[inline]
    pub fn modulus(&self) -> &BigInt {
        &self.n
    }

    /// The public exponent `e`.
    #[inline]
    pub fn exponent(&self) -> &BigInt {
        &self.e
    }
}

/// An RSA private key `(n, d)`, used only for signing.
///
/// `Debug` does not print the exponent.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    n: BigInt,
    d: BigInt,
}

impl PrivateKey {
    pub fn new(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Self {
        Self {
            n: n.into(),
            d: d.into(),
        }
    }

    /// The modulus `n`.
    #[inline]
    pub fn modulus(&self) -> &BigInt {
        &self.n
    }

    /// The secret exponent `d`.
    #[inline]
    pub fn exponent(&self) -> &BigInt {
        &self.d
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PrivateKey")
            .field("n", &self.n)
            .finish_non_exhaustive()
    }
}

impl FromStr for PublicKey {
    type Err = KeyParseError;

    /// Parses `"N,E"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (n, e) = parse_pair(s)?;
        Ok(Self { n, e })
    }
}

impl FromStr for PrivateKey {
    type Err = KeyParseError;

    /// Parses `"N,D"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (n, d) = parse_pair(s)?;
        Ok(Self { n, d })
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{},{}", self.n, self.e)
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{},{}", self.n, self.d)
    }
}
