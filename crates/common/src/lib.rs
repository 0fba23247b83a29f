pub mod addressing;
pub mod admin;
pub mod error;
pub mod payload;
pub mod protocol;
pub mod signer;

// re-exports
pub use error::Error;
pub use gameroom_hash as hash;
