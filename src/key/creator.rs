use thiserror::Error;
use tracing::debug;

use crate::key::{GeneratedKeyPair, KeyType};

/// Options for creating a key pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Registered name of the key type, e.g. `rsa`.
    pub key_type: String,
    /// Bit length for RSA, curve selector for ECDSA.
    pub size: u32,
    /// Comment attached to the generated keys.
    pub comment: Option<String>,
}

/// Errors that can occur during key creation.
#[derive(Error, Debug)]
pub enum KeyCreationError {
    /// The requested key type is not registered.
    #[error("unsupported key type `{key_type}`, valid choices are `{valid}`")]
    UnsupportedKeyType { key_type: String, valid: String },
    /// The requested ECDSA size does not name a supported curve.
    #[error("unsupported key size `{0}`, valid sizes are '256', '384', '521'")]
    UnsupportedKeySize(u32),
    /// The cryptographic library refused to generate the key.
    #[error("unable to generate key: `{0}`")]
    Generation(#[source] ssh_key::Error),
    /// The public key could not be encoded in SSH wire format.
    #[error("unable to encode public key: `{0}`")]
    Encoding(#[source] ssh_key::Error),
}

/// A trait for creating cryptographic key pairs.
pub trait Creator {
    /// Creates a key pair based on the provided options.
    fn create(&self, options: Options) -> Result<GeneratedKeyPair, KeyCreationError>;
}

/// Generates a key pair of the named type and size.
///
/// `key_type` must be one of the names in [`KeyType::valid_names`]. For `ecdsa` the size selects
/// the curve (256, 384 or 521); for `rsa` it is the modulus bit length and is validated only by
/// the underlying library.
pub fn generate_key(key_type: &str, bits: u32) -> Result<GeneratedKeyPair, KeyCreationError> {
    let key_type: KeyType = key_type.parse()?;
    debug!(%key_type, bits, "generating key pair");
    key_type.generate(bits)
}

/// Creator backed by the in-process key type registry.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyCreator;

impl Creator for KeyCreator {
    fn create(&self, options: Options) -> Result<GeneratedKeyPair, KeyCreationError> {
        let mut key_pair = generate_key(&options.key_type, options.size)?;
        if let Some(comment) = options.comment.as_deref() {
            key_pair.set_comment(comment);
        }
        Ok(key_pair)
    }
}
