//! Sabre transactions: contract execution and the registry/namespace setup a
//! contract needs before it can run.

use gameroom_types::prelude::*;
use gameroom_types::sabre::{
    sabre_payload::Action, CreateContractAction, CreateContractRegistryAction,
    CreateNamespaceRegistryAction, CreateNamespaceRegistryPermissionAction,
    ExecuteContractAction, SabrePayload,
};
use gameroom_types::sawtooth::Transaction;

use crate::addressing::{
    compute_contract_address, compute_contract_registry_address,
    compute_namespace_registry_address, compute_setting_address, ADMINISTRATORS_SETTING_KEY,
};
use crate::error::Error;
use crate::protocol::TransactionBuilder;
use crate::signer::Signer;

pub const SABRE_FAMILY_NAME: &str = "sabre";
pub const SABRE_FAMILY_VERSION: &str = "0.5";

/// Transaction family written into every header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Family {
    pub name: String,
    pub version: String,
}

impl Default for Family {
    fn default() -> Self {
        Family {
            name: SABRE_FAMILY_NAME.to_string(),
            version: SABRE_FAMILY_VERSION.to_string(),
        }
    }
}

/// A deployed contract and the state namespace it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    pub name: String,
    pub version: String,
    pub namespace: String,
}

impl Contract {
    pub fn registry_address(&self) -> String {
        compute_contract_registry_address(&self.name)
    }

    pub fn address(&self) -> String {
        compute_contract_address(&self.name, &self.version)
    }

    pub fn namespace_registry_address(&self) -> Result<String, Error> {
        compute_namespace_registry_address(&self.namespace)
    }
}

#[derive(Default, Clone)]
pub struct ExecuteContractActionBuilder {
    name: Option<String>,
    version: Option<String>,
    inputs: Vec<String>,
    outputs: Vec<String>,
    payload: Option<Vec<u8>>,
}

impl ExecuteContractActionBuilder {
    pub fn new() -> Self {
        ExecuteContractActionBuilder::default()
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_version(mut self, version: String) -> Self {
        self.version = Some(version);
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

    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn build(self) -> Result<ExecuteContractAction, Error> {
        Ok(ExecuteContractAction {
            name: self.name.ok_or(Error::MissingField("name"))?,
            version: self.version.ok_or(Error::MissingField("version"))?,
            inputs: self.inputs,
            outputs: self.outputs,
            payload: self.payload.ok_or(Error::MissingField("payload"))?,
        })
    }

    /// Encoded `SabrePayload` carrying the action.
    pub fn into_payload_bytes(self) -> Result<Vec<u8>, Error> {
        let action = self.build()?;
        Ok(SabrePayload {
            action: Action::ExecuteContract as i32,
            execute_contract: Some(action),
            ..Default::default()
        }
        .into_bytes())
    }
}

/// Call `contract` with `payload`, reading `inputs` and writing `outputs`.
///
/// Sabre resolves the contract through its registry entry, its stored wasm
/// and the namespace registry before running it, so those three addresses
/// lead the header inputs.
pub fn execute_contract_transaction(
    family: &Family,
    contract: &Contract,
    payload: Vec<u8>,
    inputs: Vec<String>,
    outputs: Vec<String>,
    nonce: String,
    signer: &dyn Signer,
) -> Result<Transaction, Error> {
    let mut header_inputs = vec![
        contract.registry_address(),
        contract.address(),
        contract.namespace_registry_address()?,
    ];
    header_inputs.extend(inputs.iter().cloned());

    let sabre_payload = ExecuteContractActionBuilder::new()
        .with_name(contract.name.clone())
        .with_version(contract.version.clone())
        .with_inputs(inputs)
        .with_outputs(outputs.clone())
        .with_payload(payload)
        .into_payload_bytes()?;

    log::debug!(
        "execute {} {} with {} input(s)",
        contract.name,
        contract.version,
        header_inputs.len()
    );

    TransactionBuilder::new()
        .with_family_name(family.name.clone())
        .with_family_version(family.version.clone())
        .with_inputs(header_inputs)
        .with_outputs(outputs)
        .with_nonce(nonce)
        .with_payload(sabre_payload)
        .build(signer)
}

fn sabre_transaction(
    family: &Family,
    payload: SabrePayload,
    addresses: Vec<String>,
    nonce: String,
    signer: &dyn Signer,
) -> Result<Transaction, Error> {
    TransactionBuilder::new()
        .with_family_name(family.name.clone())
        .with_family_version(family.version.clone())
        .with_inputs(addresses.clone())
        .with_outputs(addresses)
        .with_nonce(nonce)
        .with_payload(payload.into_bytes())
        .build(signer)
}

pub fn create_contract_registry_transaction(
    family: &Family,
    contract: &Contract,
    owners: Vec<String>,
    nonce: String,
    signer: &dyn Signer,
) -> Result<Transaction, Error> {
    let payload = SabrePayload {
        action: Action::CreateContractRegistry as i32,
        create_contract_registry: Some(CreateContractRegistryAction {
            name: contract.name.clone(),
            owners,
        }),
        ..Default::default()
    };
    let addresses = vec![
        contract.registry_address(),
        compute_setting_address(ADMINISTRATORS_SETTING_KEY),
    ];
    sabre_transaction(family, payload, addresses, nonce, signer)
}

/// Store the compiled contract; the contract may then touch its namespace.
pub fn upload_contract_transaction(
    family: &Family,
    contract: &Contract,
    wasm: Vec<u8>,
    nonce: String,
    signer: &dyn Signer,
) -> Result<Transaction, Error> {
    let payload = SabrePayload {
        action: Action::CreateContract as i32,
        create_contract: Some(CreateContractAction {
            name: contract.name.clone(),
            version: contract.version.clone(),
            inputs: vec![contract.namespace.clone()],
            outputs: vec![contract.namespace.clone()],
            contract: wasm,
        }),
        ..Default::default()
    };
    let addresses = vec![contract.registry_address(), contract.address()];
    sabre_transaction(family, payload, addresses, nonce, signer)
}

pub fn create_namespace_registry_transaction(
    family: &Family,
    contract: &Contract,
    owners: Vec<String>,
    nonce: String,
    signer: &dyn Signer,
) -> Result<Transaction, Error> {
    let payload = SabrePayload {
        action: Action::CreateNamespaceRegistry as i32,
        create_namespace_registry: Some(CreateNamespaceRegistryAction {
            namespace: contract.namespace.clone(),
            owners,
        }),
        ..Default::default()
    };
    let addresses = vec![
        contract.namespace_registry_address()?,
        compute_setting_address(ADMINISTRATORS_SETTING_KEY),
    ];
    sabre_transaction(family, payload, addresses, nonce, signer)
}

/// Grant the contract read and write access to its namespace.
pub fn namespace_permission_transaction(
    family: &Family,
    contract: &Contract,
    nonce: String,
    signer: &dyn Signer,
) -> Result<Transaction, Error> {
    let payload = SabrePayload {
        action: Action::CreateNamespaceRegistryPermission as i32,
        create_namespace_registry_permission: Some(CreateNamespaceRegistryPermissionAction {
            namespace: contract.namespace.clone(),
            contract_name: contract.name.clone(),
            read: true,
            write: true,
        }),
        ..Default::default()
    };
    let addresses = vec![
        contract.namespace_registry_address()?,
        compute_setting_address(ADMINISTRATORS_SETTING_KEY),
    ];
    sabre_transaction(family, payload, addresses, nonce, signer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::compute_state_address;
    use crate::signer::Secp256k1Signer;
    use gameroom_config::{MESSAGE_CONTRACT_NAME, MESSAGE_CONTRACT_NAMESPACE, MESSAGE_CONTRACT_VERSION};
    use gameroom_hash::sha512_hex;
    use gameroom_types::sawtooth::TransactionHeader;

    fn signer() -> Secp256k1Signer {
        Secp256k1Signer::from_hex("c1e325f8508ee82f6d8c15649a8335549057523575b8cc603bd3f471645c2fad")
            .unwrap()
    }

    fn message_contract() -> Contract {
        Contract {
            name: MESSAGE_CONTRACT_NAME.into(),
            version: MESSAGE_CONTRACT_VERSION.into(),
            namespace: MESSAGE_CONTRACT_NAMESPACE.into(),
        }
    }

    #[test]
    fn test_execute_contract_transaction() {
        let signer = signer();
        let contract = message_contract();
        let game = compute_state_address(MESSAGE_CONTRACT_NAMESPACE, "first").unwrap();

        let txn = execute_contract_transaction(
            &Family::default(),
            &contract,
            b"first,create,".to_vec(),
            vec![game.clone()],
            vec![game.clone()],
            String::new(),
            &signer,
        )
        .unwrap();

        let header = TransactionHeader::from_bytes(&txn.header).unwrap();
        assert_eq!(header.family_name, SABRE_FAMILY_NAME);
        assert_eq!(header.family_version, SABRE_FAMILY_VERSION);
        assert_eq!(
            header.inputs,
            vec![
                compute_contract_registry_address(MESSAGE_CONTRACT_NAME),
                compute_contract_address(MESSAGE_CONTRACT_NAME, MESSAGE_CONTRACT_VERSION),
                compute_namespace_registry_address(MESSAGE_CONTRACT_NAMESPACE).unwrap(),
                game.clone(),
            ]
        );
        assert_eq!(header.outputs, vec![game.clone()]);
        assert_eq!(header.payload_sha512, sha512_hex(&txn.payload));

        let payload = SabrePayload::from_bytes(&txn.payload).unwrap();
        assert_eq!(payload.action, Action::ExecuteContract as i32);
        let action = payload.execute_contract.unwrap();
        assert_eq!(action.name, MESSAGE_CONTRACT_NAME);
        assert_eq!(action.version, MESSAGE_CONTRACT_VERSION);
        assert_eq!(action.inputs, vec![game.clone()]);
        assert_eq!(action.outputs, vec![game]);
        assert_eq!(action.payload, b"first,create,");
    }

    #[test]
    fn test_family_override() {
        let family = Family {
            name: MESSAGE_CONTRACT_NAME.into(),
            version: MESSAGE_CONTRACT_VERSION.into(),
        };
        let txn = execute_contract_transaction(
            &family,
            &message_contract(),
            vec![],
            vec![MESSAGE_CONTRACT_NAMESPACE.into()],
            vec![MESSAGE_CONTRACT_NAMESPACE.into()],
            String::new(),
            &signer(),
        )
        .unwrap();
        let header = TransactionHeader::from_bytes(&txn.header).unwrap();
        assert_eq!(header.family_name, MESSAGE_CONTRACT_NAME);
        assert_eq!(header.family_version, MESSAGE_CONTRACT_VERSION);
    }

    #[test]
    fn test_invalid_namespace() {
        let contract = Contract {
            namespace: "f8d".into(),
            ..message_contract()
        };
        let err = execute_contract_transaction(
            &Family::default(),
            &contract,
            vec![],
            vec![],
            vec![],
            String::new(),
            &signer(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidNamespace(_)));
    }

    #[test]
    fn test_setup_transactions() {
        let signer = signer();
        let family = Family::default();
        let contract = message_contract();
        let owners = vec![signer.public_key_hex()];
        let admins = compute_setting_address(ADMINISTRATORS_SETTING_KEY);

        let registry =
            create_contract_registry_transaction(&family, &contract, owners.clone(), random(), &signer)
                .unwrap();
        let payload = SabrePayload::from_bytes(&registry.payload).unwrap();
        assert_eq!(payload.action, Action::CreateContractRegistry as i32);
        assert_eq!(payload.create_contract_registry.unwrap().owners, owners);
        let header = TransactionHeader::from_bytes(&registry.header).unwrap();
        assert_eq!(header.inputs, vec![contract.registry_address(), admins.clone()]);
        assert_eq!(header.inputs, header.outputs);

        let upload =
            upload_contract_transaction(&family, &contract, vec![0, 97, 115, 109], random(), &signer)
                .unwrap();
        let action = SabrePayload::from_bytes(&upload.payload)
            .unwrap()
            .create_contract
            .unwrap();
        assert_eq!(action.inputs, vec![MESSAGE_CONTRACT_NAMESPACE.to_string()]);
        assert_eq!(action.contract, vec![0, 97, 115, 109]);
        let header = TransactionHeader::from_bytes(&upload.header).unwrap();
        assert_eq!(header.outputs, vec![contract.registry_address(), contract.address()]);

        let namespace =
            create_namespace_registry_transaction(&family, &contract, owners, random(), &signer)
                .unwrap();
        let header = TransactionHeader::from_bytes(&namespace.header).unwrap();
        assert_eq!(
            header.inputs,
            vec![contract.namespace_registry_address().unwrap(), admins]
        );

        let permission = namespace_permission_transaction(&family, &contract, random(), &signer)
            .unwrap();
        let action = SabrePayload::from_bytes(&permission.payload)
            .unwrap()
            .create_namespace_registry_permission
            .unwrap();
        assert_eq!(action.contract_name, MESSAGE_CONTRACT_NAME);
        assert!(action.read && action.write);
    }

    fn random() -> String {
        crate::protocol::random_nonce()
    }
}
