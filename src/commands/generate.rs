use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::key::GeneratedKeyPair;
use crate::key::creator::{Creator, KeyCreationError, Options};
use crate::parameters::OutputFormat;

#[derive(Error, Debug)]
pub enum GenerateCommandError {
    #[error("creating key pair: `{0}`")]
    Creation(#[from] KeyCreationError),
    #[error("encoding key: `{0}`")]
    Encoding(#[from] ssh_key::Error),
    #[error("serializing output: `{0}`")]
    Serialization(#[from] serde_json::Error),
}

/// Serializable view of a generated key pair.
#[derive(Serialize, Debug, PartialEq)]
pub struct KeyPairOutput {
    pub key_type: String,
    pub public_key: String,
    pub fingerprint: String,
    pub private_key: String,
}

impl TryFrom<&GeneratedKeyPair> for KeyPairOutput {
    type Error = ssh_key::Error;

    fn try_from(key_pair: &GeneratedKeyPair) -> Result<Self, Self::Error> {
        Ok(Self {
            key_type: key_pair.public_key.algorithm().to_string(),
            public_key: key_pair.public_key.to_openssh()?,
            fingerprint: key_pair.public_key.fingerprint(),
            private_key: key_pair.private_key.to_openssh()?,
        })
    }
}

pub struct GenerateCommand<C>
where
    C: Creator,
{
    creator: C,
}

impl<C> GenerateCommand<C>
where
    C: Creator,
{
    pub fn new(creator: C) -> Self {
        Self { creator }
    }

    /// Creates a key pair and renders it in the requested format.
    pub fn generate(
        &self,
        options: Options,
        format: &OutputFormat,
    ) -> Result<String, GenerateCommandError> {
        let key_pair = self.creator.create(options)?;
        let output = KeyPairOutput::try_from(&key_pair)?;
        debug!(fingerprint = %output.fingerprint, "rendering key pair");

        match format {
            OutputFormat::Plain => Ok(format!(
                "{}\n{}",
                output.private_key.trim_end(),
                output.public_key
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&output)?),
        }
    }
}
