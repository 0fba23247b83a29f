//! Splinter admin payloads: votes on gameroom circuit proposals.

use gameroom_hash::sha512;
use gameroom_types::admin::{
    circuit_management_payload::{Action, Header},
    circuit_proposal_vote::Vote,
    CircuitManagementPayload, CircuitProposalVote,
};
use gameroom_types::prelude::*;

use crate::error::Error;
use crate::signer::Signer;

/// Unsigned vote on the proposal `circuit_hash` of `circuit_id`, as the
/// gameroom UI prepares it. The requester key is filled in at signing.
pub fn proposal_vote_payload(
    circuit_id: &str,
    circuit_hash: &str,
    vote: Vote,
    requester_node_id: &str,
) -> Vec<u8> {
    let vote = CircuitProposalVote {
        circuit_id: circuit_id.to_string(),
        circuit_hash: circuit_hash.to_string(),
        vote: vote as i32,
    };
    let header = Header {
        action: Action::CircuitProposalVote as i32,
        requester: Vec::new(),
        payload_sha512: sha512(&vote.encode_to_vec()).to_vec(),
        requester_node_id: requester_node_id.to_string(),
    };
    CircuitManagementPayload {
        header: header.into_bytes(),
        signature: Vec::new(),
        circuit_proposal_vote: Some(vote),
    }
    .into_bytes()
}

/// Set the requester to the signer's public key and sign the re-encoded
/// header. An existing requester or signature is replaced.
pub fn sign_admin_payload(payload: &[u8], signer: &dyn Signer) -> Result<Vec<u8>, Error> {
    let mut payload = CircuitManagementPayload::from_bytes(payload)?;
    let mut header = Header::from_bytes(&payload.header)?;
    header.requester = signer.public_key().to_vec();

    payload.header = header.into_bytes();
    payload.signature = signer.sign(&payload.header)?;
    Ok(payload.into_bytes())
}
