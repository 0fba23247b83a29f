use gameroom_hash::sha512_hex;
use gameroom_types::prelude::*;
use gameroom_types::sawtooth::{Transaction, TransactionHeader};
use rand::Rng;

use crate::error::Error;
use crate::signer::Signer;

/// Hex nonce that keeps otherwise identical transactions distinct.
pub fn random_nonce() -> String {
    hex::encode(rand::thread_rng().gen::<[u8; 16]>())
}

#[derive(Default, Clone)]
pub struct TransactionBuilder {
    family_name: Option<String>,
    family_version: Option<String>,
    inputs: Vec<String>,
    outputs: Vec<String>,
    dependencies: Vec<String>,
    nonce: String,
    payload: Option<Vec<u8>>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        TransactionBuilder::default()
    }

    pub fn with_family_name(mut self, family_name: String) -> Self {
        self.family_name = Some(family_name);
        self
    }

    pub fn with_family_version(mut self, family_version: String) -> Self {
        self.family_version = Some(family_version);
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<String>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<String>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_nonce(mut self, nonce: String) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// The signer signs both the transaction and, later, its batch, so it is
    /// recorded as signer and batcher.
    pub fn build(self, signer: &dyn Signer) -> Result<Transaction, Error> {
        let family_name = self
            .family_name
            .ok_or(Error::MissingField("family_name"))?;
        let family_version = self
            .family_version
            .ok_or(Error::MissingField("family_version"))?;
        let payload = self.payload.ok_or(Error::MissingField("payload"))?;

        let public_key = signer.public_key_hex();
        let header = TransactionHeader {
            batcher_public_key: public_key.clone(),
            dependencies: self.dependencies,
            family_name,
            family_version,
            inputs: self.inputs,
            nonce: self.nonce,
            outputs: self.outputs,
            payload_sha512: sha512_hex(&payload),
            signer_public_key: public_key,
        }
        .into_bytes();
        let header_signature = signer.sign_hex(&header)?;

        Ok(Transaction {
            header,
            header_signature,
            payload,
        })
    }
}
