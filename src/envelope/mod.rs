//! Signed documents.
//!
//! A text document carries its signature as a trailing block:
//!
//! ```text
//! <document body>
//! *** Begin of digital signature ***
//! 3F09A1...
//! *** End of digital signature ***
//! ```
//!
//! The signature is written in uppercase hexadecimal. The signed message is
//! the document body with the block removed and surrounding whitespace
//! trimmed, so re-signing a document replaces its block instead of signing
//! the old signature.

use crate::signatures::rsa::Signature;

pub const BEGIN_MARKER: &str = "*** Begin of digital signature ***";
pub const END_MARKER: &str = "*** End of digital signature ***";

/// A document split into its signed message and embedded signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sealed<'a> {
    pub message: &'a str,
    pub signature: Signature,
}

/// Finds a well-formed trailing signature block.
///
/// Returns the byte offset where the block starts and the hex digits it
/// holds. Whitespace may follow the end marker; at least one whitespace
/// character must separate the digits from the end marker.
fn locate(document: &str) -> Option<(usize, &str)> {
    let body = document.trim_end().strip_suffix(END_MARKER)?;

    let digits_end = body.trim_end();
    if digits_end.len() == body.len() {
        return None;
    }

    let digits_start = digits_end
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_hexdigit())
        .map_or(0, |(i, c)| i + c.len_utf8());

    let digits = &digits_end[digits_start..];
    if digits.is_empty() {
        return None;
    }

    let start = digits_end[..digits_start]
        .trim_end()
        .strip_suffix(BEGIN_MARKER)?
        .len();

    Some((start, digits))
}

/// Returns `document` without its trailing signature block, if any.
pub fn strip(document: &str) -> &str {
    match locate(document) {
        Some((start, _)) => &document[..start],
        None => document,
    }
}

/// Returns the text that is signed for `document`.
pub fn message(document: &str) -> &str {
    strip(document).trim()
}

/// Writes `signature` into `document`.
///
/// An existing trailing block is replaced in place; otherwise a new block is
/// appended on its own line.
pub fn seal(document: &str, signature: &Signature) -> String {
    let block = format!("{BEGIN_MARKER}\n{}\n{END_MARKER}\n", signature.to_hex());

    match locate(document) {
        Some((start, _)) => format!("{}{block}", &document[..start]),
        None => format!("{document}\n{block}"),
    }
}

/// Splits a signed document into its message and signature.
///
/// Returns `None` when the document does not end with a signature block.
pub fn open(document: &str) -> Option<Sealed<'_>> {
    let (_, digits) = locate(document)?;
    let signature = Signature::from_hex(digits).ok()?;

    Some(Sealed {
        message: message(document),
        signature,
    })
}
