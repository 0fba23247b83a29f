use gameroom_types::prelude::*;
use gameroom_types::sawtooth::{Batch, BatchHeader, BatchList, Transaction};

use crate::error::Error;
use crate::signer::Signer;

#[derive(Default)]
pub struct BatchBuilder {
    transactions: Vec<Transaction>,
    trace: bool,
}

impl BatchBuilder {
    pub fn new() -> Self {
        BatchBuilder::default()
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    /// Ask the validator to log the batch as it moves through the pipeline.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn build(self, signer: &dyn Signer) -> Result<Batch, Error> {
        if self.transactions.is_empty() {
            return Err(Error::EmptyBatch);
        }

        let transaction_ids = self
            .transactions
            .iter()
            .map(|txn| txn.header_signature.clone())
            .collect();
        let header = BatchHeader {
            signer_public_key: signer.public_key_hex(),
            transaction_ids,
        }
        .into_bytes();
        let header_signature = signer.sign_hex(&header)?;

        Ok(Batch {
            header,
            header_signature,
            transactions: self.transactions,
            trace: self.trace,
        })
    }
}

/// Body accepted by the batch submission endpoints. At least one batch is
/// required.
pub fn encode_batch_list(batches: Vec<Batch>) -> Result<Vec<u8>, Error> {
    if batches.is_empty() {
        return Err(Error::EmptyBatchList);
    }
    Ok(BatchList { batches }.into_bytes())
}

/// Batch ids of an encoded `BatchList`, in submission order.
pub fn batch_ids(batch_list: &[u8]) -> Result<Vec<String>, Error> {
    let batch_list = BatchList::from_bytes(batch_list)?;
    Ok(batch_list
        .batches
        .into_iter()
        .map(|batch| batch.header_signature)
        .collect())
}
