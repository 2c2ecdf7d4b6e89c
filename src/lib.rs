pub mod commands;
pub mod key;
pub mod parameters;

pub use key::creator::{Creator, KeyCreationError, KeyCreator, Options, generate_key};
pub use key::ecdsa::generate_ecdsa_key;
pub use key::rsa::generate_rsa_key;
pub use key::{GeneratedKeyPair, KeyType, PrivateKey, SshPublicKey};
