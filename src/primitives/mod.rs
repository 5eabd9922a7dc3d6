//! Arbitrary-precision building blocks.
//!
//! RSA works on integers, not byte strings. This module holds the two
//! pieces of integer plumbing shared by the signer and the verifier:
//!
//! - `encode`: the digest encoder, turning hash words into one big-endian
//!   integer
//! - `modexp`: checked modular exponentiation over `num-bigint` integers
//!
//! These are intentionally thin. Big-integer arithmetic itself comes from
//! `num-bigint`; this crate only fixes the encoding and the preconditions.

mod encode;
mod modexp;

pub use encode::encode_words;
pub use modexp::{ArithmeticError, mod_pow, reduce};
