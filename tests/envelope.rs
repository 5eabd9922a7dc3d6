use certgen::envelope::{self, BEGIN_MARKER, END_MARKER};
use certgen::signatures::rsa::Signature;

use num_bigint::BigUint;

fn sig(value: u32) -> Signature {
    Signature::from(BigUint::from(value))
}

#[test]
fn seal_appends_block() {
    let sealed = envelope::seal("Dear reader,\nhello.\n", &sig(0xABCDEF));

    assert_eq!(
        sealed,
        format!("Dear reader,\nhello.\n\n{BEGIN_MARKER}\nABCDEF\n{END_MARKER}\n")
    );
}

#[test]
fn seal_replaces_existing_block() {
    let once = envelope::seal("text", &sig(1));
    let twice = envelope::seal(&once, &sig(0xFF));

    assert_eq!(twice, format!("text\n{BEGIN_MARKER}\nFF\n{END_MARKER}\n"));
}

#[test]
fn open_recovers_message_and_signature() {
    let sealed = envelope::seal("  body text \n", &sig(0x1234));
    let opened = envelope::open(&sealed).unwrap();

    assert_eq!(opened.message, "body text");
    assert_eq!(opened.signature, sig(0x1234));
}

#[test]
fn message_ignores_block_and_whitespace() {
    let sealed = envelope::seal("\n\nbody\n", &sig(7));

    assert_eq!(envelope::message(&sealed), "body");
    assert_eq!(envelope::message("\n\nbody\n"), "body");
}

#[test]
fn open_without_block_is_none() {
    assert_eq!(envelope::open("just text"), None);
    assert_eq!(
        envelope::open(&format!("{BEGIN_MARKER}\nnot hex!\n{END_MARKER}")),
        None
    );
}

#[test]
fn strip_keeps_plain_documents() {
    assert_eq!(envelope::strip("no signature here\n"), "no signature here\n");
}
