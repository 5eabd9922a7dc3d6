//! RSA key material.
//!
//! Keys are raw `(modulus, exponent)` pairs. No primality, size or
//! `e * d = 1 (mod λ(n))` check is made here: the signer and verifier only
//! require a positive modulus and a non-negative exponent, and they check
//! that themselves.
//!
//! Integers are signed so that a key string such as `-33,7` parses and is
//! then rejected by the arithmetic with a precise error, rather than being
//! lumped together with syntax errors.

pub mod core;
mod parse;

pub use self::core::{PrivateKey, PublicKey};
pub use parse::KeyParseError;
