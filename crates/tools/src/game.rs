use anyhow::Result;
use clap::Args;
use gameroom_common::addressing::compute_state_address;
use gameroom_common::payload::{MessagePayload, StatusAction, StatusFields, StatusPayload};
use gameroom_common::protocol::{random_nonce, sabre::execute_contract_transaction};
use gameroom_common::signer::Signer;
use gameroom_config::Config;
use gameroom_types::sawtooth::Transaction;

use crate::account::{load_signer, KeyArgs};
use crate::utils::config::{family, ContractKind};
use crate::utils::submit::{batch_list, deliver_batch_list, SubmitArgs};

/// Vessel call fields of a status update; unset fields are sent empty.
#[derive(Args, Debug, Default, Clone)]
pub struct StatusArgs {
    #[clap(long, default_value = "")]
    pub docking_type: String,
    #[clap(long, default_value = "")]
    pub eta: String,
    #[clap(long, default_value = "")]
    pub etb: String,
    #[clap(long, default_value = "")]
    pub ata: String,
    #[clap(long, default_value = "")]
    pub eto: String,
    #[clap(long, default_value = "")]
    pub ato: String,
    #[clap(long, default_value = "")]
    pub etc: String,
    #[clap(long, default_value = "")]
    pub etd: String,
    #[clap(long, default_value = "")]
    pub is_bunkering: String,
    #[clap(long, default_value = "")]
    pub bunkering_time: String,
    #[clap(long, default_value = "")]
    pub logs: String,
}

impl From<StatusArgs> for StatusFields {
    fn from(args: StatusArgs) -> Self {
        StatusFields {
            docking_type: args.docking_type,
            eta: args.eta,
            etb: args.etb,
            ata: args.ata,
            eto: args.eto,
            ato: args.ato,
            etc: args.etc,
            etd: args.etd,
            is_bunkering: args.is_bunkering,
            bunkering_time: args.bunkering_time,
            logs: args.logs,
        }
    }
}

/// A Sabre transaction running `kind`'s contract on the state of entity
/// `name`, which it both reads and writes.
pub fn contract_transaction(
    config: &Config,
    kind: ContractKind,
    name: &str,
    payload: Vec<u8>,
    signer: &dyn Signer,
) -> Result<Transaction> {
    let contract = kind.contract(config);
    let address = compute_state_address(&contract.namespace, name)?;
    let txn = execute_contract_transaction(
        &family(config),
        &contract,
        payload,
        vec![address.clone()],
        vec![address],
        random_nonce(),
        signer,
    )?;
    Ok(txn)
}

async fn execute(
    config: &Config,
    key: &KeyArgs,
    submit: &SubmitArgs,
    kind: ContractKind,
    name: &str,
    payload: Vec<u8>,
) -> Result<()> {
    let signer = load_signer(key, config)?;
    let txn = contract_transaction(config, kind, name, payload, &signer)?;
    log::info!("transaction: {}", txn.header_signature);
    let batch_list = batch_list(vec![txn], &signer)?;
    deliver_batch_list(submit, config, batch_list).await
}

pub async fn create_game(config: &Config, key: &KeyArgs, submit: &SubmitArgs, name: &str) -> Result<()> {
    let payload = MessagePayload::create(name)?;
    log::info!("create game {}", name);
    execute(config, key, submit, ContractKind::Message, name, payload.to_bytes()).await
}

pub async fn add_message(
    config: &Config,
    key: &KeyArgs,
    submit: &SubmitArgs,
    name: &str,
    content: &str,
) -> Result<()> {
    let payload = MessagePayload::add(name, content)?;
    log::info!("add message to {}", name);
    execute(config, key, submit, ContractKind::Message, name, payload.to_bytes()).await
}

pub async fn delete_game(config: &Config, key: &KeyArgs, submit: &SubmitArgs, name: &str) -> Result<()> {
    let payload = MessagePayload::delete(name)?;
    log::info!("delete game {}", name);
    execute(config, key, submit, ContractKind::Message, name, payload.to_bytes()).await
}

pub async fn update_status(
    config: &Config,
    key: &KeyArgs,
    submit: &SubmitArgs,
    name: &str,
    action: StatusAction,
    fields: StatusFields,
) -> Result<()> {
    let payload = StatusPayload::new(name, action, fields)?;
    log::info!("{} status of {}", action, name);
    execute(config, key, submit, ContractKind::Status, name, payload.to_bytes()).await
}
