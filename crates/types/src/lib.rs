//! Wire messages exchanged with a Sawtooth Sabre node behind a Splinter
//! gameroom daemon.
//!
//! The messages are protobuf encoded. They are declared with `prost`
//! derives and mirror the field tags of the upstream `.proto` schemas, so no
//! `protoc` is needed at build time.

mod protos;

pub mod prelude;

pub use protos::{admin, sabre, sawtooth};
