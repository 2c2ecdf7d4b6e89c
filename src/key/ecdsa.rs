use rand::rngs::OsRng;
use ssh_key::EcdsaCurve;
use ssh_key::private::{EcdsaKeypair, KeypairData};

use crate::key::GeneratedKeyPair;
use crate::key::creator::KeyCreationError;

/// Maps the size selector to the NIST curve it names.
pub fn curve_for_size(bits: u32) -> Result<EcdsaCurve, KeyCreationError> {
    match bits {
        256 => Ok(EcdsaCurve::NistP256),
        384 => Ok(EcdsaCurve::NistP384),
        521 => Ok(EcdsaCurve::NistP521),
        other => Err(KeyCreationError::UnsupportedKeySize(other)),
    }
}

/// Generates an ECDSA key pair on the curve selected by `bits`.
pub fn generate_ecdsa_key(bits: u32) -> Result<GeneratedKeyPair, KeyCreationError> {
    let curve = curve_for_size(bits)?;
    let keypair = EcdsaKeypair::random(&mut OsRng, curve).map_err(KeyCreationError::Generation)?;
    GeneratedKeyPair::from_keypair_data(KeypairData::from(keypair))
}
