//! Key file configuration.
//!
//! A key file is a JSON object holding the modulus and one or both
//! exponents as base-10 strings:
//!
//! ```json
//! { "n": "3233", "e": "17", "d": "2753" }
//! ```
//!
//! Strings are used because JSON numbers cannot carry RSA-sized integers.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::keys::rsa::{KeyParseError, PrivateKey, PublicKey};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read key file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse key file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Stored RSA key material.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeyFile {
    pub n: String,
    #[serde(default)]
    pub e: Option<String>,
    #[serde(default)]
    pub d: Option<String>,
}

impl KeyFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let keys = Self::from_json(&raw).map_err(|source| ConfigError::Json {
            path: path.to_owned(),
            source,
        })?;

        debug!(
            path = %path.display(),
            public = keys.e.is_some(),
            private = keys.d.is_some(),
            "loaded key file"
        );

        Ok(keys)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The public key `(n, e)`, or `None` when the file has no `e`.
    pub fn public_key(&self) -> Option<Result<PublicKey, KeyParseError>> {
        let e = self.e.as_deref()?;
        Some(format!("{},{}", self.n, e).parse())
    }

    /// The private key `(n, d)`, or `None` when the file has no `d`.
    pub fn private_key(&self) -> Option<Result<PrivateKey, KeyParseError>> {
        let d = self.d.as_deref()?;
        Some(format!("{},{}", self.n, d).parse())
    }
}
