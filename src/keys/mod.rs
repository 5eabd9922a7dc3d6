//! Asymmetric key material.
//!
//! ## RSA
//!
//! The `rsa` module holds RSA keys as raw `(n, e)` and `(n, d)` integer
//! pairs, exactly as supplied by the caller. It does not generate keys and
//! does not check that a pair is a valid RSA key; it only parses and
//! renders the `"N,E"` / `"N,D"` string form.
pub mod rsa;
