use certgen::hash::sha256;
use certgen::primitives::{ArithmeticError, encode_words, mod_pow};

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

#[test]
fn encode_single_word() {
    assert_eq!(encode_words(&[0x00010203]), BigUint::from(0x00010203u32));
}

#[test]
fn encode_two_words_big_endian() {
    let expected = (BigUint::from(0xFFFFFFFFu32) << 32u32) | BigUint::one();
    assert_eq!(encode_words(&[0xFFFFFFFF, 0x00000001]), expected);
}

#[test]
fn encode_empty_is_zero() {
    assert!(encode_words(&[]).is_zero());
}

#[test]
fn encode_sha256_matches_hex_digest() {
    let expected = BigUint::parse_bytes(
        b"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        16,
    )
    .unwrap();

    assert_eq!(encode_words(&sha256(b"abc")), expected);
}

#[test]
fn encode_stays_below_word_bound() {
    let value = encode_words(&[u32::MAX; 8]);
    let bound = BigUint::one() << 256u32;

    assert!(value < bound);
    assert_eq!(value + BigUint::one(), bound);
}

#[test]
fn mod_pow_matches_naive_power() {
    let base = BigUint::from(123456789u64);
    let modulus = BigInt::from(1_000_003);

    let mut naive = BigUint::one();
    for _ in 0..17 {
        naive = naive * &base % 1_000_003u32;
    }

    assert_eq!(mod_pow(&base, &BigInt::from(17), &modulus), Ok(naive));
}

#[test]
fn mod_pow_reports_invalid_modulus() {
    assert_eq!(
        mod_pow(&BigUint::one(), &BigInt::one(), &BigInt::zero()),
        Err(ArithmeticError::InvalidModulus)
    );
}
