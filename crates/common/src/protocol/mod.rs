//! Transaction and batch construction.
//!
//! A contract call is built in a fixed sequence: the contract payload is
//! wrapped in an `ExecuteContractAction`, enveloped in a `SabrePayload`,
//! described by a signed `TransactionHeader`, and finally collected into a
//! signed `Batch` inside a `BatchList`.

mod batch;
pub mod sabre;
mod transaction;

pub use batch::{batch_ids, encode_batch_list, BatchBuilder};
pub use transaction::{random_nonce, TransactionBuilder};
