use anyhow::{anyhow, Context, Result};
use clap::Args;
use gameroom_common::protocol::{batch_ids, encode_batch_list, BatchBuilder};
use gameroom_common::signer::Signer;
use gameroom_common::Error;
use gameroom_config::Config;
use gameroom_rpc_client::GameroomRpcClient;
use gameroom_types::sawtooth::Transaction;
use std::{fs, path::Path, path::PathBuf, time::Duration};

/// Where a batch list goes: a gameroom circuit, or a file with `--output`.
#[derive(Args, Debug, Default, Clone)]
pub struct SubmitArgs {
    /// The gameroom daemon URL, overrides the config file
    #[clap(long)]
    pub daemon_url: Option<String>,
    /// The gameroom circuit id, overrides the config file
    #[clap(long)]
    pub circuit_id: Option<String>,
    /// Write the encoded BatchList to this file instead of submitting it
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl SubmitArgs {
    pub fn circuit_id<'a>(&'a self, config: &'a Config) -> Result<&'a str> {
        self.circuit_id
            .as_deref()
            .or(config.circuit.circuit_id.as_deref())
            .ok_or_else(|| anyhow!("circuit id is required, pass --circuit-id or set circuit.circuit_id"))
    }

    pub fn client(&self, config: &Config) -> Result<GameroomRpcClient> {
        let url = self.daemon_url.as_deref().unwrap_or(&config.node.daemon_url);
        Ok(GameroomRpcClient::with_timeout(
            url,
            Duration::from_secs(config.node.timeout_secs),
        )?)
    }
}

/// One batch holding `transactions`, wrapped in an encoded `BatchList`.
pub fn batch_list(transactions: Vec<Transaction>, signer: &dyn Signer) -> Result<Vec<u8>> {
    let batch = BatchBuilder::new()
        .with_transactions(transactions)
        .build(signer)?;
    Ok(encode_batch_list(vec![batch])?)
}

pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("write output to {}", path.to_string_lossy()))?;
    log::info!("{} bytes written to {}", bytes.len(), path.to_string_lossy());
    Ok(())
}

pub async fn deliver_batch_list(args: &SubmitArgs, config: &Config, batch_list: Vec<u8>) -> Result<()> {
    let ids = batch_ids(&batch_list)?;
    if ids.is_empty() {
        return Err(Error::EmptyBatchList.into());
    }
    match &args.output {
        Some(path) => write_output(path, &batch_list)?,
        None => {
            let circuit_id = args.circuit_id(config)?;
            let client = args.client(config)?;
            let response = client
                .submit_batches(circuit_id, batch_list)
                .await
                .with_context(|| format!("submit batches to {}", client.url()))?;
            log::info!("submitted to circuit {}: {}", circuit_id, response);
        }
    }
    for id in ids {
        log::info!("batch_id: {}", id);
    }
    Ok(())
}
