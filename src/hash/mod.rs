//! Hash algorithms exposed by the crate.
//!
//! RSA signing in this crate never looks inside the hash function. It only
//! consumes the digest as an ordered sequence of 32-bit words, which is what
//! [`WordDigest`] describes. SHA-256 is the default implementation.

pub mod sha256;

/// Re-export of the SHA-256 convenience function.
pub use sha256::core::sha256;

pub use sha256::core::Sha256;

/// A deterministic hash producing a fixed-length sequence of 32-bit words.
///
/// Word 0 is the most significant word when the digest is read as a single
/// big-endian integer.
pub trait WordDigest {
    /// Hashes `message` and returns the digest words.
    fn digest_words(&self, message: &[u8]) -> Vec<u32>;
}

impl<F> WordDigest for F
where
    F: Fn(&[u8]) -> Vec<u32>,
{
    fn digest_words(&self, message: &[u8]) -> Vec<u32> {
        self(message)
    }
}
