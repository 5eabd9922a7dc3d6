//! Checked modular exponentiation.

use num_bigint::{BigInt, BigUint, Sign};
use thiserror::Error;

/// Precondition failures of [`mod_pow`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The modulus is zero or negative.
    #[error("modulus must be positive")]
    InvalidModulus,
    /// The exponent is negative.
    #[error("exponent must be non-negative")]
    NegativeExponent,
}

/// Computes `base^exponent mod modulus`.
///
/// `base` may be larger than `modulus`; it is reduced as part of the
/// exponentiation. Fails if `modulus <= 0` or `exponent < 0`. None of the
/// inputs is modified.
pub fn mod_pow(
    base: &BigUint,
    exponent: &BigInt,
    modulus: &BigInt,
) -> Result<BigUint, ArithmeticError> {
    let modulus = positive(modulus).ok_or(ArithmeticError::InvalidModulus)?;
    let exponent = non_negative(exponent).ok_or(ArithmeticError::NegativeExponent)?;

    Ok(base.modpow(exponent, modulus))
}

/// Reduces `value` modulo a positive `modulus`.
pub fn reduce(value: &BigUint, modulus: &BigInt) -> Result<BigUint, ArithmeticError> {
    let modulus = positive(modulus).ok_or(ArithmeticError::InvalidModulus)?;

    Ok(value % modulus)
}

fn positive(value: &BigInt) -> Option<&BigUint> {
    match value.sign() {
        Sign::Plus => Some(value.magnitude()),
        Sign::Minus | Sign::NoSign => None,
    }
}

fn non_negative(value: &BigInt) -> Option<&BigUint> {
    match value.sign() {
        Sign::Minus => None,
        Sign::Plus | Sign::NoSign => Some(value.magnitude()),
    }
}
