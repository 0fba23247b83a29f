pub mod error;
pub mod gameroom_client;

pub use error::SubmitError;
pub use gameroom_client::{GameroomRpcClient, SCABBARD_PROTOCOL_VERSION};
