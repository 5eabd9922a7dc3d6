use thiserror::Error;

use crate::primitives::ArithmeticError;

/// Errors returned by RSA signing and verification.
///
/// None of these is ever reported as a failed verification: `verify`
/// returns `Ok(false)` only for a genuine mismatch.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RsaError {
    /// The key modulus is zero or negative.
    #[error("invalid modulus: must be a positive integer")]
    InvalidModulus,
    /// The key exponent is negative.
    #[error("invalid exponent: must be a non-negative integer")]
    NegativeExponent,
    /// A serialized signature could not be read as a non-negative integer.
    #[error("malformed signature: `{0}`")]
    MalformedSignature(String),
}

impl From<ArithmeticError> for RsaError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::InvalidModulus => RsaError::InvalidModulus,
            ArithmeticError::NegativeExponent => RsaError::NegativeExponent,
        }
    }
}
