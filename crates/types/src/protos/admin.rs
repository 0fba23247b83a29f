//! Splinter admin service payloads (`admin.proto`), the subset the gameroom
//! client signs: circuit proposal votes.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CircuitManagementPayload {
    /// Encoded `circuit_management_payload::Header`.
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    /// Raw compact signature over `header`.
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub circuit_proposal_vote: Option<CircuitProposalVote>,
}

pub mod circuit_management_payload {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Action {
        Unset = 0,
        CircuitProposalVote = 1,
        CircuitCreateRequest = 2,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Header {
        #[prost(enumeration = "Action", tag = "1")]
        pub action: i32,
        /// Compressed public key bytes of the signer.
        #[prost(bytes = "vec", tag = "2")]
        pub requester: Vec<u8>,
        /// Raw SHA-512 of the encoded action message.
        #[prost(bytes = "vec", tag = "3")]
        pub payload_sha512: Vec<u8>,
        #[prost(string, tag = "4")]
        pub requester_node_id: String,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CircuitProposalVote {
    #[prost(string, tag = "1")]
    pub circuit_id: String,
    #[prost(string, tag = "2")]
    pub circuit_hash: String,
    #[prost(enumeration = "circuit_proposal_vote::Vote", tag = "3")]
    pub vote: i32,
}

pub mod circuit_proposal_vote {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Vote {
        Unset = 0,
        Accept = 1,
        Reject = 2,
    }
}
