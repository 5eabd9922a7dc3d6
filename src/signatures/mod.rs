//! Digital signature schemes.
//!
//! Each submodule corresponds to a specific signature scheme and is
//! responsible for its signing logic and verification rules. Key types
//! live in [`crate::keys`].

pub mod rsa;

pub use rsa::{RsaError, Signature, sign, verify};
