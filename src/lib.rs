//! Textbook RSA message signing and verification.
//!
//! Given a message, a fixed-width digest and a raw `(modulus, exponent)` key,
//! this crate produces and checks RSA signatures by modular exponentiation
//! over arbitrary-precision integers. There is no padding scheme: the digest,
//! read as one big-endian integer, is signed directly.
//!
//! # Module overview
//!
//! - `hash`  
//!   SHA-256 returning its eight state words, and the [`hash::WordDigest`]
//!   trait through which signing consumes any word-oriented digest.
//!
//! - `primitives`  
//!   The digest encoder (words to integer) and checked modular
//!   exponentiation on top of `num-bigint`.
//!
//! - `keys`  
//!   RSA key material as raw integer pairs, and `"N,E"` / `"N,D"` parsing.
//!
//! - `signatures`  
//!   The signer and verifier, and the [`signatures::rsa::Signature`] value
//!   with its byte, decimal and hexadecimal forms.
//!
//! - `envelope`  
//!   Embedding a signature as a trailing block in a text document and
//!   reading it back.
//!
//! - `config`, `cli`  
//!   Key files and the command-line surface of the `certgen` binary.
//!
//! # Non-goals
//!
//! This is not a secure signature scheme. No OAEP/PSS, no constant-time
//! arithmetic, no key generation or key validation. Every operation is a
//! pure function over its inputs and may be called from any number of
//! threads at once.

pub mod cli;
pub mod config;
pub mod envelope;
pub mod hash;
pub mod keys;
pub mod primitives;
pub mod signatures;
