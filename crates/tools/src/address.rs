use anyhow::Result;
use gameroom_common::addressing::compute_state_address;
use gameroom_config::Config;

use crate::utils::config::ContractKind;

/// Addresses a contract touches, plus the state address of `name` when given.
pub fn contract_addresses(
    config: &Config,
    kind: ContractKind,
    name: Option<&str>,
) -> Result<Vec<(&'static str, String)>> {
    let contract = kind.contract(config);
    let mut addresses = vec![
        ("contract registry", contract.registry_address()),
        ("contract", contract.address()),
        ("namespace registry", contract.namespace_registry_address()?),
    ];
    if let Some(name) = name {
        addresses.push(("state", compute_state_address(&contract.namespace, name)?));
    }
    Ok(addresses)
}

pub fn address(config: &Config, kind: ContractKind, name: Option<&str>) -> Result<()> {
    for (label, address) in contract_addresses(config, kind, name)? {
        println!("{}: {}", label, address);
    }
    Ok(())
}
