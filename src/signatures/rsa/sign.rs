use tracing::{debug, trace};

use super::{RsaError, Signature};
use crate::hash::{Sha256, WordDigest};
use crate::keys::rsa::PrivateKey;
use crate::primitives::{encode_words, mod_pow};

/// Signs `message` with SHA-256 and the private key `(n, d)`.
///
/// # Errors
///
/// [`RsaError::InvalidModulus`] if `n <= 0`, [`RsaError::NegativeExponent`]
/// if `d < 0`.
pub fn sign(message: &[u8], key: &PrivateKey) -> Result<Signature, RsaError> {
    sign_with(&Sha256, message, key)
}

/// Signs `message` using `digest` as the hash function.
///
/// Computes `encode(digest(message))^d mod n`. The encoded digest is not
/// required to be below `n`.
pub fn sign_with<H>(digest: &H, message: &[u8], key: &PrivateKey) -> Result<Signature, RsaError>
where
    H: WordDigest + ?Sized,
{
    let words = digest.digest_words(message);
    trace!(?words, "message digest");

    let m = encode_words(&words);
    let s = mod_pow(&m, key.exponent(), key.modulus())?;
    debug!(signature = %s, "signed message");

    Ok(Signature::from(s))
}
