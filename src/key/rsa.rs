use rand::rngs::OsRng;
use ssh_key::private::{KeypairData, RsaKeypair};

use crate::key::GeneratedKeyPair;
use crate::key::creator::KeyCreationError;

/// Generates an RSA key pair with a modulus of `bits` bits.
///
/// The bit length is handed to the library as is; sizes it rejects come back as
/// [`KeyCreationError::Generation`].
pub fn generate_rsa_key(bits: u32) -> Result<GeneratedKeyPair, KeyCreationError> {
    let bits = usize::try_from(bits).unwrap_or(usize::MAX);
    let keypair = RsaKeypair::random(&mut OsRng, bits).map_err(KeyCreationError::Generation)?;
    GeneratedKeyPair::from_keypair_data(KeypairData::from(keypair))
}
