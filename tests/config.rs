use std::fs;

use certgen::config::{ConfigError, KeyFile};
use certgen::keys::rsa::{KeyParseError, PrivateKey, PublicKey};

#[test]
fn loads_full_key_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("key.json");
    fs::write(&path, r#"{ "n": "3233", "e": "17", "d": "2753" }"#).unwrap();

    let keys = KeyFile::load(&path).unwrap();

    assert_eq!(keys.public_key(), Some(Ok(PublicKey::new(3233, 17))));
    assert_eq!(keys.private_key(), Some(Ok(PrivateKey::new(3233, 2753))));
}

#[test]
fn missing_exponent_is_none() {
    let keys = KeyFile::from_json(r#"{ "n": "3233", "e": "17" }"#).unwrap();

    assert!(keys.public_key().is_some());
    assert_eq!(keys.private_key(), None);
}

#[test]
fn bad_integer_surfaces_as_key_error() {
    let keys = KeyFile::from_json(r#"{ "n": "32x3", "d": "3" }"#).unwrap();

    assert_eq!(
        keys.private_key(),
        Some(Err(KeyParseError::NotAnInteger("32x3".to_owned())))
    );
}

#[test]
fn rejects_unknown_fields_and_numbers() {
    assert!(KeyFile::from_json(r#"{ "n": "3233", "p": "61" }"#).is_err());
    assert!(KeyFile::from_json(r#"{ "n": 3233, "e": "17" }"#).is_err());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        KeyFile::load(dir.path().join("absent.json")),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn invalid_json_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("key.json");
    fs::write(&path, "n = 3233").unwrap();

    assert!(matches!(KeyFile::load(&path), Err(ConfigError::Json { .. })));
}
