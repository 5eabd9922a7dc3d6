//! Digest encoder.

use num_bigint::BigUint;

/// Encodes a sequence of 32-bit words as a single non-negative integer.
///
/// Each word contributes four bytes, most significant byte first, and word 0
/// is the most significant word overall. The result is always below
/// `2^(32 * words.len())`; an empty sequence encodes to zero.
pub fn encode_words(words: &[u32]) -> BigUint {
    let mut bytes = Vec::with_capacity(words.len() * 4);

    for word in words {
        bytes.extend_from_slice(&word.to_be_bytes());
    }

    BigUint::from_bytes_be(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn empty_encodes_to_zero() {
        assert!(encode_words(&[]).is_zero());
    }

    #[test]
    fn leading_zero_words_do_not_change_value() {
        assert_eq!(encode_words(&[0, 0, 7]), encode_words(&[7]));
    }
}
