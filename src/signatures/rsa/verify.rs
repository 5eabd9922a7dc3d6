use tracing::{debug, trace};

use super::{RsaError, Signature};
use crate::hash::{Sha256, WordDigest};
use crate::keys::rsa::PublicKey;
use crate::primitives::{encode_words, mod_pow, reduce};

/// Verifies `signature` over `message` with SHA-256 and the public key `(n, e)`.
///
/// Returns `Ok(false)` only when the signature does not match.
///
/// # Errors
///
/// [`RsaError::InvalidModulus`] if `n <= 0`, [`RsaError::NegativeExponent`]
/// if `e < 0`.
pub fn verify(message: &[u8], signature: &Signature, key: &PublicKey) -> Result<bool, RsaError> {
    verify_with(&Sha256, message, signature, key)
}

/// Verifies a base-10 serialized signature.
///
/// # Errors
///
/// In addition to the errors of [`verify`], [`RsaError::MalformedSignature`]
/// if `signature` is not a non-negative base-10 integer.
pub fn verify_str(message: &[u8], signature: &str, key: &PublicKey) -> Result<bool, RsaError> {
    let signature: Signature = signature.parse()?;
    verify(message, &signature, key)
}

/// Verifies `signature` over `message` using `digest` as the hash function.
///
/// Checks `s^e mod n == encode(digest(message)) mod n`. The expected value is
/// always reduced, so a digest wider than the modulus still verifies against
/// a signature produced by [`super::sign_with`].
pub fn verify_with<H>(
    digest: &H,
    message: &[u8],
    signature: &Signature,
    key: &PublicKey,
) -> Result<bool, RsaError>
where
    H: WordDigest + ?Sized,
{
    debug!(%signature, "verifying signature");

    let words = digest.digest_words(message);
    trace!(?words, "message digest");

    let recovered = mod_pow(signature.as_biguint(), key.exponent(), key.modulus())?;
    debug!(h_prime = %recovered, "recovered digest");

    let expected = reduce(&encode_words(&words), key.modulus())?;
    debug!(h = %expected, "expected digest");

    Ok(expected == recovered)
}
