mod sha;

pub use sha::{hash_password, sha256, sha512, sha512_hex, Sha256Hasher, Sha512Hasher};
