//! Textbook RSA signatures.
//!
//! A signature is the encoded message digest raised to the secret exponent:
//!
//! ```text
//! m = encode(H(message))
//! s = m^d mod n
//! ```
//!
//! and verification checks `s^e mod n == m mod n`. There is no padding
//! scheme: the digest integer is signed as is. Nothing here is constant
//! time, and key sizes are not validated.
//!
//! Diagnostics (digest words, intermediate integers) are emitted as
//! `tracing` events at `debug`/`trace` level; nothing is printed.

mod error;
mod sign;
mod signature;
mod verify;

pub use error::RsaError;
pub use sign::{sign, sign_with};
pub use signature::Signature;
pub use verify::{verify, verify_str, verify_with};
