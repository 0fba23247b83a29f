use anyhow::{Context, Result};
use clap::ArgEnum;
use gameroom_common::protocol::sabre::{Contract, Family};
use gameroom_config::{Config, ContractConfig};
use std::{fs, path::Path};

pub const DEFAULT_CONFIG_PATH: &str = "./gameroom.toml";

/// Which gameroom contract a command addresses.
#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractKind {
    Message,
    Status,
}

impl ContractKind {
    pub fn config(self, config: &Config) -> &ContractConfig {
        match self {
            ContractKind::Message => &config.message_contract,
            ContractKind::Status => &config.status_contract,
        }
    }

    pub fn contract(self, config: &Config) -> Contract {
        to_contract(self.config(config))
    }
}

// Read gameroom.toml
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read(&path)
        .with_context(|| format!("read config file from {}", path.as_ref().to_string_lossy()))?;
    let config = toml::from_slice(&content).with_context(|| "parse config file")?;
    Ok(config)
}

/// The config at `path`. Without a path the default file is used when it
/// exists, otherwise the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => read_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => read_config(DEFAULT_CONFIG_PATH),
        None => Ok(Config::default()),
    }
}

pub fn generate_example_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut config = Config::default();
    config.private_key_path = Some("./alice.priv".into());
    config.circuit.circuit_id = Some("ajTAf-Ul6dH".to_string());
    config.circuit.service_id = Some("gameroom_acme-node-000".to_string());
    config.circuit.node_id = Some("acme-node-000".to_string());
    let content = toml::to_string_pretty(&config)?;
    fs::write(&path, content)
        .with_context(|| format!("write config to {}", path.as_ref().to_string_lossy()))?;
    log::info!(
        "example config written to {}",
        path.as_ref().to_string_lossy()
    );
    Ok(())
}

pub fn family(config: &Config) -> Family {
    Family {
        name: config.family.name.clone(),
        version: config.family.version.clone(),
    }
}

pub fn to_contract(contract: &ContractConfig) -> Contract {
    Contract {
        name: contract.name.clone(),
        version: contract.version.clone(),
        namespace: contract.namespace.clone(),
    }
}
