use sha2::{Digest, Sha256, Sha512};

pub struct Sha512Hasher {
    hasher: Sha512,
}

impl Sha512Hasher {
    pub fn new() -> Self {
        Self {
            hasher: Sha512::new(),
        }
    }

    pub fn update(mut self, data: impl AsRef<[u8]>) -> Self {
        self.hasher.update(data);
        self
    }

    pub fn finalize(self) -> [u8; 64] {
        self.hasher.finalize().into()
    }

    pub fn finalize_hex(self) -> String {
        hex::encode(self.finalize())
    }
}

impl Default for Sha512Hasher {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Sha256Hasher {
    hasher: Sha256,
}

impl Sha256Hasher {
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    pub fn update(mut self, data: impl AsRef<[u8]>) -> Self {
        self.hasher.update(data);
        self
    }

    pub fn finalize(self) -> [u8; 32] {
        self.hasher.finalize().into()
    }

    pub fn finalize_hex(self) -> String {
        hex::encode(self.finalize())
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sha512(bytes: &[u8]) -> [u8; 64] {
    Sha512Hasher::new().update(bytes).finalize()
}

/// Lowercase hex of the SHA-512 digest, the form Sawtooth puts in
/// `payload_sha512` and uses to derive state addresses.
pub fn sha512_hex(bytes: &[u8]) -> String {
    Sha512Hasher::new().update(bytes).finalize_hex()
}

pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    Sha256Hasher::new().update(bytes).finalize()
}

/// Salted password hash stored for gameroom users: `hex(sha256(salt || data))`.
/// The salt is the user's email.
pub fn hash_password(salt: &str, data: &str) -> String {
    Sha256Hasher::new().update(salt).update(data).finalize_hex()
}
