use gameroom_types::prelude::DecodeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid namespace {0:?}, at least 6 hex characters are required")]
    InvalidNamespace(String),
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("Signing error: {0}")]
    Signing(#[from] secp256k1::Error),
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    #[error("Missing field {0} in builder")]
    MissingField(&'static str),
    #[error("A batch requires at least one transaction")]
    EmptyBatch,
    #[error("A batch list requires at least one batch")]
    EmptyBatchList,
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
