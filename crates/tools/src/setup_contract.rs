use anyhow::{anyhow, Context, Result};
use gameroom_common::protocol::random_nonce;
use gameroom_common::protocol::sabre::{
    create_contract_registry_transaction, create_namespace_registry_transaction,
    namespace_permission_transaction, upload_contract_transaction,
};
use gameroom_common::signer::Signer;
use gameroom_config::Config;
use gameroom_rpc_client::GameroomRpcClient;
use gameroom_types::sawtooth::Transaction;
use std::{fs, path::Path, time::Duration};

use crate::account::{load_signer, KeyArgs};
use crate::utils::config::{family, ContractKind};
use crate::utils::submit::{batch_list, write_output};

pub struct SetupContractArgs<'a> {
    pub kind: ContractKind,
    /// Overrides the contract's configured wasm path.
    pub wasm_path: Option<&'a Path>,
    /// Registry owners; the signer alone when empty.
    pub owners: Vec<String>,
    pub splinterd_url: Option<&'a str>,
    pub circuit_id: Option<&'a str>,
    pub service_id: Option<&'a str>,
    pub output: Option<&'a Path>,
}

/// Registers the contract, uploads it and grants it its namespace, in the
/// order Sabre needs them applied.
pub fn setup_transactions(
    config: &Config,
    kind: ContractKind,
    wasm: Vec<u8>,
    owners: Vec<String>,
    signer: &dyn Signer,
) -> Result<Vec<Transaction>> {
    let family = family(config);
    let contract = kind.contract(config);
    let txns = vec![
        create_contract_registry_transaction(
            &family,
            &contract,
            owners.clone(),
            random_nonce(),
            signer,
        )?,
        upload_contract_transaction(&family, &contract, wasm, random_nonce(), signer)?,
        create_namespace_registry_transaction(&family, &contract, owners, random_nonce(), signer)?,
        namespace_permission_transaction(&family, &contract, random_nonce(), signer)?,
    ];
    Ok(txns)
}

pub async fn setup_contract(config: &Config, key: &KeyArgs, args: SetupContractArgs<'_>) -> Result<()> {
    let signer = load_signer(key, config)?;
    let wasm_path = args
        .wasm_path
        .unwrap_or_else(|| args.kind.config(config).wasm_path.as_path());
    let wasm = fs::read(wasm_path)
        .with_context(|| format!("read contract from {}", wasm_path.to_string_lossy()))?;
    let owners = if args.owners.is_empty() {
        vec![signer.public_key_hex()]
    } else {
        args.owners
    };
    log::info!(
        "setup contract {} ({} bytes), owners: {}",
        args.kind.config(config).name,
        wasm.len(),
        owners.join(", ")
    );

    let txns = setup_transactions(config, args.kind, wasm, owners, &signer)?;
    let batch_list = batch_list(txns, &signer)?;
    if let Some(path) = args.output {
        return write_output(path, &batch_list);
    }

    let circuit_id = args
        .circuit_id
        .or(config.circuit.circuit_id.as_deref())
        .ok_or_else(|| anyhow!("circuit id is required, pass --circuit-id or set circuit.circuit_id"))?;
    let service_id = args
        .service_id
        .or(config.circuit.service_id.as_deref())
        .ok_or_else(|| anyhow!("service id is required, pass --service-id or set circuit.service_id"))?;
    let url = args.splinterd_url.unwrap_or(&config.node.splinterd_url);
    let client =
        GameroomRpcClient::with_timeout(url, Duration::from_secs(config.node.timeout_secs))?;
    let response = client
        .submit_scabbard_batches(circuit_id, service_id, batch_list)
        .await
        .with_context(|| format!("submit contract setup to {}", client.url()))?;
    log::info!("contract setup submitted to {}: {}", service_id, response);
    Ok(())
}
