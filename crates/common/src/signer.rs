//! secp256k1 signing compatible with Sawtooth: compact ECDSA signatures over
//! the SHA-256 digest of the message, keys exchanged as lowercase hex.

use gameroom_hash::sha256;
use rand::Rng;
use secp256k1::{ecdsa::Signature, All, Message, PublicKey, Secp256k1, SecretKey};
use std::fmt;

use crate::error::Error;

pub trait Signer {
    /// Compressed public key bytes.
    fn public_key(&self) -> &[u8];

    /// Compact 64 byte signature of `message`.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Error>;

    fn public_key_hex(&self) -> String {
        hex::encode(self.public_key())
    }

    fn sign_hex(&self, message: &[u8]) -> Result<String, Error> {
        self.sign(message).map(hex::encode)
    }
}

pub struct Secp256k1Signer {
    secp: Secp256k1<All>,
    secret_key: SecretKey,
    public_key: [u8; 33],
}

impl Secp256k1Signer {
    pub fn new(secret_key: SecretKey) -> Self {
        let secp = Secp256k1::new();
        let public_key = PublicKey::from_secret_key(&secp, &secret_key).serialize();
        Secp256k1Signer {
            secp,
            secret_key,
            public_key,
        }
    }

    /// Accepts 64 hex characters, optionally `0x` prefixed.
    pub fn from_hex(private_key: &str) -> Result<Self, Error> {
        let bytes = hex::decode(private_key.trim().trim_start_matches("0x"))
            .map_err(|err| Error::InvalidPrivateKey(err.to_string()))?;
        let secret_key = SecretKey::from_slice(&bytes)
            .map_err(|err| Error::InvalidPrivateKey(err.to_string()))?;
        Ok(Self::new(secret_key))
    }

    pub fn private_key_hex(&self) -> String {
        hex::encode(self.secret_key.secret_bytes())
    }
}

impl fmt::Debug for Secp256k1Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1Signer")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

impl Signer for Secp256k1Signer {
    fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Error> {
        let digest = Message::from_slice(&sha256(message))?;
        let signature = self.secp.sign_ecdsa(&digest, &self.secret_key);
        Ok(signature.serialize_compact().to_vec())
    }
}

/// Random private key, hex encoded.
pub fn generate_private_key() -> String {
    let mut rng = rand::thread_rng();
    loop {
        let key = rng.gen::<[u8; 32]>();
        // out of range keys are astronomically rare, draw again
        if SecretKey::from_slice(&key).is_ok() {
            return hex::encode(key);
        }
    }
}

/// Check a hex signature produced by [`Signer::sign_hex`].
pub fn verify(public_key: &str, message: &[u8], signature: &str) -> Result<bool, Error> {
    let public_key = hex::decode(public_key)
        .map_err(|err| Error::InvalidPayload(format!("public key: {}", err)))?;
    let signature = hex::decode(signature)
        .map_err(|err| Error::InvalidPayload(format!("signature: {}", err)))?;
    let public_key = PublicKey::from_slice(&public_key)?;
    let signature = Signature::from_compact(&signature)?;
    let digest = Message::from_slice(&sha256(message))?;
    Ok(Secp256k1::verification_only()
        .verify_ecdsa(&digest, &signature, &public_key)
        .is_ok())
}
