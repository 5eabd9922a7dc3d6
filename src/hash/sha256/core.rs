use super::H256_INIT;
use super::computations::{all_rounds, schedule};
use crate::hash::WordDigest;

const BLOCK_LEN: usize = 64;

#[inline(always)]
pub fn compress(block: &[u8], state: &mut [u32; 8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut words = [0u32; 16];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    all_rounds(state, &schedule(words));
}

/// Computes the SHA-256 digest of `input` as eight big-endian state words.
///
/// Concatenating the words most-significant-byte first yields the usual
/// 32-byte digest.
pub fn sha256(input: &[u8]) -> [u32; 8] {
    let mut state = H256_INIT;

    let mut blocks = input.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        compress(block, &mut state);
    }

    let rem = blocks.remainder();
    let mut block = [0u8; BLOCK_LEN];
    block[..rem.len()].copy_from_slice(rem);
    block[rem.len()] = 0x80;

    // No room left for the 64-bit length: flush and pad a fresh block.
    if rem.len() > 55 {
        compress(&block, &mut state);
        block = [0; BLOCK_LEN];
    }

    let bit_len = (input.len() as u64) << 3;
    block[56..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    state
}

/// SHA-256 as a [`WordDigest`], the default digest for RSA signing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl WordDigest for Sha256 {
    fn digest_words(&self, message: &[u8]) -> Vec<u32> {
        sha256(message).to_vec()
    }
}
