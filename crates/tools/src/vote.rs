use anyhow::{anyhow, Context, Result};
use gameroom_common::admin::{proposal_vote_payload, sign_admin_payload};
use gameroom_common::signer::Signer;
use gameroom_config::Config;
use gameroom_types::admin::circuit_proposal_vote::Vote;
use std::{fs, path::Path};

use crate::account::{load_signer, KeyArgs};
use crate::utils::submit::{write_output, SubmitArgs};

async fn deliver_admin_payload(args: &SubmitArgs, config: &Config, payload: Vec<u8>) -> Result<()> {
    if let Some(path) = &args.output {
        return write_output(path, &payload);
    }
    let client = args.client(config)?;
    let response = client
        .submit_admin_payload(payload)
        .await
        .with_context(|| format!("submit admin payload to {}", client.url()))?;
    log::info!("admin payload submitted: {}", response);
    Ok(())
}

/// A signed vote on the proposal `circuit_hash` for `circuit_id`.
pub fn signed_vote(
    circuit_id: &str,
    circuit_hash: &str,
    vote: Vote,
    node_id: &str,
    signer: &dyn Signer,
) -> Result<Vec<u8>> {
    let unsigned = proposal_vote_payload(circuit_id, circuit_hash, vote, node_id);
    Ok(sign_admin_payload(&unsigned, signer)?)
}

pub async fn vote(
    config: &Config,
    key: &KeyArgs,
    submit: &SubmitArgs,
    circuit_id: &str,
    circuit_hash: &str,
    reject: bool,
    node_id: Option<&str>,
) -> Result<()> {
    let node_id = node_id
        .or(config.circuit.node_id.as_deref())
        .ok_or_else(|| anyhow!("node id is required, pass --node-id or set circuit.node_id"))?;
    let vote = if reject { Vote::Reject } else { Vote::Accept };
    let signer = load_signer(key, config)?;

    let payload = signed_vote(circuit_id, circuit_hash, vote, node_id, &signer)?;
    log::info!("{:?} proposal {} of circuit {}", vote, circuit_hash, circuit_id);
    deliver_admin_payload(submit, config, payload).await
}

/// Sign a `CircuitManagementPayload` prepared elsewhere, e.g. by the daemon.
pub async fn sign_payload(
    config: &Config,
    key: &KeyArgs,
    submit: &SubmitArgs,
    input_path: &Path,
) -> Result<()> {
    let unsigned = fs::read(input_path)
        .with_context(|| format!("read payload from {}", input_path.to_string_lossy()))?;
    let signer = load_signer(key, config)?;
    let payload = sign_admin_payload(&unsigned, &signer).context("sign admin payload")?;
    log::info!("payload signed by {}", signer.public_key_hex());
    deliver_admin_payload(submit, config, payload).await
}
