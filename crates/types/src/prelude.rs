pub use prost::Message;

#[derive(thiserror::Error, Debug)]
#[error("decode {message}: {source}")]
pub struct DecodeError {
    pub message: &'static str,
    pub source: prost::DecodeError,
}

/// Serialize a message into its protobuf bytes.
pub trait IntoBytes {
    fn into_bytes(self) -> Vec<u8>;
}

impl<M: Message> IntoBytes for M {
    fn into_bytes(self) -> Vec<u8> {
        self.encode_to_vec()
    }
}

/// Parse a message from protobuf bytes, naming the message on failure.
pub trait FromBytes: Sized {
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError>;
}

impl<M: Message + Default> FromBytes for M {
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        M::decode(bytes).map_err(|source| DecodeError {
            message: std::any::type_name::<M>()
                .rsplit("::")
                .next()
                .unwrap_or("message"),
            source,
        })
    }
}
