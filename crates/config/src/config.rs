use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::constants::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File holding the hex private key used to sign.
    pub private_key_path: Option<PathBuf>,
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default)]
    pub circuit: CircuitConfig,
    #[serde(default)]
    pub family: FamilyConfig,
    #[serde(
        default = "ContractConfig::message",
        deserialize_with = "message_contract"
    )]
    pub message_contract: ContractConfig,
    #[serde(default = "ContractConfig::status", deserialize_with = "status_contract")]
    pub status_contract: ContractConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            private_key_path: None,
            node: NodeConfig::default(),
            circuit: CircuitConfig::default(),
            family: FamilyConfig::default(),
            message_contract: ContractConfig::message(),
            status_contract: ContractConfig::status(),
        }
    }
}

/// Endpoints of the local gameroom node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Gameroom daemon REST API, receives game batches and admin payloads.
    pub daemon_url: String,
    /// Splinter daemon REST API, receives scabbard batches directly.
    pub splinterd_url: String,
    pub timeout_secs: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig {
            daemon_url: DEFAULT_DAEMON_URL.to_string(),
            splinterd_url: DEFAULT_SPLINTERD_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// The gameroom circuit transactions are submitted to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitConfig {
    pub circuit_id: Option<String>,
    /// Scabbard service of this node on the circuit, e.g. `gameroom_node-000`.
    pub service_id: Option<String>,
    /// Splinter node id recorded as the requester of admin payloads.
    pub node_id: Option<String>,
}

/// Transaction family written into transaction headers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyConfig {
    pub name: String,
    pub version: String,
}

impl Default for FamilyConfig {
    fn default() -> Self {
        FamilyConfig {
            name: SABRE_FAMILY_NAME.to_string(),
            version: SABRE_FAMILY_VERSION.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    pub name: String,
    pub version: String,
    pub namespace: String,
    /// Compiled contract uploaded by `setup-contract`.
    pub wasm_path: PathBuf,
}

impl ContractConfig {
    pub fn message() -> Self {
        ContractConfig {
            name: MESSAGE_CONTRACT_NAME.to_string(),
            version: MESSAGE_CONTRACT_VERSION.to_string(),
            namespace: MESSAGE_CONTRACT_NAMESPACE.to_string(),
            wasm_path: PathBuf::from(MESSAGE_CONTRACT_PATH),
        }
    }

    pub fn status() -> Self {
        ContractConfig {
            name: STATUS_CONTRACT_NAME.to_string(),
            version: STATUS_CONTRACT_VERSION.to_string(),
            namespace: STATUS_CONTRACT_NAMESPACE.to_string(),
            wasm_path: PathBuf::from(STATUS_CONTRACT_PATH),
        }
    }
}

/// A contract section as written in the file, any key may be left out.
#[derive(Deserialize)]
struct ContractOverrides {
    name: Option<String>,
    version: Option<String>,
    namespace: Option<String>,
    wasm_path: Option<PathBuf>,
}

impl ContractOverrides {
    fn apply(self, defaults: ContractConfig) -> ContractConfig {
        ContractConfig {
            name: self.name.unwrap_or(defaults.name),
            version: self.version.unwrap_or(defaults.version),
            namespace: self.namespace.unwrap_or(defaults.namespace),
            wasm_path: self.wasm_path.unwrap_or(defaults.wasm_path),
        }
    }
}

fn message_contract<'de, D: Deserializer<'de>>(d: D) -> Result<ContractConfig, D::Error> {
    Ok(ContractOverrides::deserialize(d)?.apply(ContractConfig::message()))
}

fn status_contract<'de, D: Deserializer<'de>>(d: D) -> Result<ContractConfig, D::Error> {
    Ok(ContractOverrides::deserialize(d)?.apply(ContractConfig::status()))
}
