//! Sabre and gameroom state addresses.
//!
//! An address is 70 hex characters: a 6 character namespace followed by the
//! first 64 hex characters of a SHA-512 digest.

use gameroom_hash::{sha256, sha512_hex};

use crate::error::Error;

pub const NAMESPACE_REGISTRY_PREFIX: &str = "00ec00";
pub const CONTRACT_REGISTRY_PREFIX: &str = "00ec01";
pub const CONTRACT_PREFIX: &str = "00ec02";

const SETTINGS_PREFIX: &str = "000000";
const SETTING_KEY_PARTS: usize = 4;
const SETTING_PART_LEN: usize = 16;

/// Sabre checks this setting when registries are created.
pub const ADMINISTRATORS_SETTING_KEY: &str = "sawtooth.swa.administrators";

pub const NAMESPACE_LEN: usize = 6;
pub const ADDRESS_LEN: usize = 70;

fn hash_suffix(data: &str) -> String {
    let mut hash = sha512_hex(data.as_bytes());
    hash.truncate(ADDRESS_LEN - NAMESPACE_LEN);
    hash
}

/// First 6 hex characters of `sha512(name)`, the namespace a transaction
/// family derives from its name.
pub fn namespace_prefix(name: &str) -> String {
    let mut hash = sha512_hex(name.as_bytes());
    hash.truncate(NAMESPACE_LEN);
    hash
}

pub fn compute_contract_registry_address(name: &str) -> String {
    format!("{}{}", CONTRACT_REGISTRY_PREFIX, hash_suffix(name))
}

pub fn compute_contract_address(name: &str, version: &str) -> String {
    format!(
        "{}{}",
        CONTRACT_PREFIX,
        hash_suffix(&format!("{},{}", name, version))
    )
}

/// Only the first 6 characters of `namespace` are significant, so a full
/// state address maps to the registry of its namespace.
pub fn compute_namespace_registry_address(namespace: &str) -> Result<String, Error> {
    let prefix = namespace
        .get(..NAMESPACE_LEN)
        .ok_or_else(|| Error::InvalidNamespace(namespace.to_string()))?;
    Ok(format!("{}{}", NAMESPACE_REGISTRY_PREFIX, hash_suffix(prefix)))
}

/// Address of a named entity (game, chat, status) inside a contract namespace.
pub fn compute_state_address(namespace: &str, name: &str) -> Result<String, Error> {
    let prefix = namespace
        .get(..NAMESPACE_LEN)
        .ok_or_else(|| Error::InvalidNamespace(namespace.to_string()))?;
    Ok(format!("{}{}", prefix, hash_suffix(name)))
}

/// Sawtooth settings address: the key is split on `.` into at most four
/// parts (padded with empty parts), each contributing 16 hex characters of
/// its SHA-256.
pub fn compute_setting_address(key: &str) -> String {
    let mut parts: Vec<&str> = key.splitn(SETTING_KEY_PARTS, '.').collect();
    parts.resize(SETTING_KEY_PARTS, "");
    parts.into_iter().fold(SETTINGS_PREFIX.to_string(), |mut address, part| {
        address.push_str(&hex::encode(sha256(part.as_bytes()))[..SETTING_PART_LEN]);
        address
    })
}
