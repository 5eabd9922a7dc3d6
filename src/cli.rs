//! Command-line surface of the `certgen` binary.
//!
//! Argument validation happens entirely in [`Args::operation`], before any
//! key is used, so every boundary error is reported without touching the
//! arithmetic. [`run`] then performs the operation and returns the line to
//! print.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, KeyFile};
use crate::envelope;
use crate::keys::rsa::{KeyParseError, PrivateKey, PublicKey};
use crate::signatures::rsa::{self, RsaError, Signature};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    ConflictingMode(&'static str),
    #[error("{0} must have {1} supplied")]
    MissingKeyMaterial(&'static str, &'static str),
    #[error("exactly one of --message or --document must be supplied")]
    MissingMessage,
    #[error("--verify must have --signature supplied or a signed --document")]
    MissingSignature,
    #[error("malformed key string: {0}")]
    MalformedKeyString(#[from] KeyParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Rsa(#[from] RsaError),
}

/// How signatures are written and read on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Decimal,
    Hex,
}

impl Format {
    fn render(self, signature: &Signature) -> String {
        match self {
            Format::Decimal => signature.to_string(),
            Format::Hex => signature.to_hex(),
        }
    }

    fn parse(self, raw: &str) -> Result<Signature, RsaError> {
        match self {
            Format::Decimal => raw.parse(),
            Format::Hex => Signature::from_hex(raw),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "certgen", version, about = "Textbook RSA message signing and verification")]
pub struct Args {
    /// Sign a message
    #[arg(long = "sign")]
    pub sign: bool,

    /// Private key: n,d (for --sign)
    #[arg(long = "private", value_name = "N,D")]
    pub private_key: Option<String>,

    /// Verify a message signature
    #[arg(long = "verify")]
    pub verify: bool,

    /// Public key: n,e (for --verify)
    #[arg(long = "public", value_name = "N,E")]
    pub public_key: Option<String>,

    /// Message signature (for --verify)
    #[arg(short = 's', long)]
    pub signature: Option<String>,

    /// Message for signing or verification
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Text document to sign or verify, with a trailing signature block
    #[arg(short = 'd', long, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// JSON key file with "n", "e" and/or "d"; --private/--public take precedence
    #[arg(short = 'k', long, value_name = "PATH", env = "CERTGEN_KEY_FILE")]
    pub key_file: Option<PathBuf>,

    /// Signature encoding on input and output
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Decimal)]
    pub format: Format,
}

/// Where the message comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Document(PathBuf),
}

/// A fully validated command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Sign {
        key: PrivateKey,
        input: Input,
    },
    Verify {
        key: PublicKey,
        input: Input,
        /// Explicit `--signature`; when `None` the document's block is used.
        signature: Option<String>,
    },
}

impl Args {
    /// Validates the arguments and resolves key material.
    pub fn operation(&self) -> Result<Operation, CliError> {
        let signing = match (self.sign, self.verify) {
            (true, false) => true,
            (false, true) => false,
            (false, false) => {
                return Err(CliError::ConflictingMode(
                    "--sign or --verify must be supplied",
                ));
            }
            (true, true) => {
                return Err(CliError::ConflictingMode(
                    "--sign and --verify must be mutually exclusive",
                ));
            }
        };

        let input = match (&self.message, &self.document) {
            (Some(text), None) => Input::Text(text.clone()),
            (None, Some(path)) => Input::Document(path.clone()),
            _ => return Err(CliError::MissingMessage),
        };

        if signing {
            let key: PrivateKey = match &self.private_key {
                Some(raw) => raw.parse()?,
                None => self
                    .key_file()?
                    .and_then(|keys| keys.private_key())
                    .ok_or(CliError::MissingKeyMaterial("--sign", "--private"))??,
            };

            return Ok(Operation::Sign { key, input });
        }

        let key: PublicKey = match &self.public_key {
            Some(raw) => raw.parse()?,
            None => self
                .key_file()?
                .and_then(|keys| keys.public_key())
                .ok_or(CliError::MissingKeyMaterial("--verify", "--public"))??,
        };

        if self.signature.is_none() && matches!(input, Input::Text(_)) {
            return Err(CliError::MissingSignature);
        }

        Ok(Operation::Verify {
            key,
            input,
            signature: self.signature.clone(),
        })
    }

    fn key_file(&self) -> Result<Option<KeyFile>, ConfigError> {
        self.key_file.as_deref().map(KeyFile::load).transpose()
    }
}

fn read_document(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Document {
        path: path.to_owned(),
        source,
    })
}

/// Runs the command and returns what it prints.
///
/// Signing prints the signature, or the sealed document when signing a
/// `--document`. Verification prints `true` or `false`.
pub fn run(args: &Args) -> Result<String, CliError> {
    let operation = args.operation()?;
    debug!(?operation, "resolved command");

    match operation {
        Operation::Sign { key, input } => match input {
            Input::Text(text) => {
                let signature = rsa::sign(text.as_bytes(), &key)?;
                Ok(args.format.render(&signature))
            }
            Input::Document(path) => {
                let document = read_document(&path)?;
                let signature = rsa::sign(envelope::message(&document).as_bytes(), &key)?;
                info!(path = %path.display(), "sealed document");
                Ok(envelope::seal(&document, &signature))
            }
        },
        Operation::Verify {
            key,
            input,
            signature,
        } => {
            let document;
            let (message, signature) = match input {
                Input::Text(ref text) => {
                    let raw = signature.ok_or(CliError::MissingSignature)?;
                    (text.as_str(), args.format.parse(&raw)?)
                }
                Input::Document(ref path) => {
                    document = read_document(path)?;
                    match signature {
                        Some(raw) => (envelope::message(&document), args.format.parse(&raw)?),
                        None => {
                            let sealed =
                                envelope::open(&document).ok_or(CliError::MissingSignature)?;
                            (sealed.message, sealed.signature)
                        }
                    }
                }
            };

            let valid = rsa::verify(message.as_bytes(), &signature, &key)?;
            Ok(valid.to_string())
        }
    }
}
