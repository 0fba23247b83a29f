//! Sawtooth Sabre smart contract payloads (`payload.proto`).

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SabrePayload {
    #[prost(enumeration = "sabre_payload::Action", tag = "1")]
    pub action: i32,
    #[prost(message, optional, tag = "2")]
    pub create_contract: Option<CreateContractAction>,
    #[prost(message, optional, tag = "3")]
    pub delete_contract: Option<DeleteContractAction>,
    #[prost(message, optional, tag = "4")]
    pub execute_contract: Option<ExecuteContractAction>,
    #[prost(message, optional, tag = "5")]
    pub create_contract_registry: Option<CreateContractRegistryAction>,
    #[prost(message, optional, tag = "6")]
    pub delete_contract_registry: Option<DeleteContractRegistryAction>,
    #[prost(message, optional, tag = "7")]
    pub update_contract_registry_owners: Option<UpdateContractRegistryOwnersAction>,
    #[prost(message, optional, tag = "8")]
    pub create_namespace_registry: Option<CreateNamespaceRegistryAction>,
    #[prost(message, optional, tag = "9")]
    pub delete_namespace_registry: Option<DeleteNamespaceRegistryAction>,
    #[prost(message, optional, tag = "10")]
    pub update_namespace_registry_owners: Option<UpdateNamespaceRegistryOwnersAction>,
    #[prost(message, optional, tag = "11")]
    pub create_namespace_registry_permission: Option<CreateNamespaceRegistryPermissionAction>,
    #[prost(message, optional, tag = "12")]
    pub delete_namespace_registry_permission: Option<DeleteNamespaceRegistryPermissionAction>,
}

pub mod sabre_payload {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Action {
        Unset = 0,
        CreateContract = 1,
        DeleteContract = 2,
        ExecuteContract = 3,
        CreateContractRegistry = 4,
        DeleteContractRegistry = 5,
        UpdateContractRegistryOwners = 6,
        CreateNamespaceRegistry = 7,
        DeleteNamespaceRegistry = 8,
        UpdateNamespaceRegistryOwners = 9,
        CreateNamespaceRegistryPermission = 10,
        DeleteNamespaceRegistryPermission = 11,
    }
}

/// Upload a compiled wasm contract.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateContractAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
    #[prost(string, repeated, tag = "3")]
    pub inputs: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub outputs: Vec<String>,
    #[prost(bytes = "vec", tag = "5")]
    pub contract: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteContractAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
}

/// Run a deployed contract against `payload`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteContractAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
    #[prost(string, repeated, tag = "3")]
    pub inputs: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub outputs: Vec<String>,
    #[prost(bytes = "vec", tag = "5")]
    pub payload: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateContractRegistryAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, repeated, tag = "2")]
    pub owners: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteContractRegistryAction {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateContractRegistryOwnersAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, repeated, tag = "2")]
    pub owners: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateNamespaceRegistryAction {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(string, repeated, tag = "2")]
    pub owners: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNamespaceRegistryAction {
    #[prost(string, tag = "1")]
    pub namespace: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateNamespaceRegistryOwnersAction {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(string, repeated, tag = "2")]
    pub owners: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateNamespaceRegistryPermissionAction {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(string, tag = "2")]
    pub contract_name: String,
    #[prost(bool, tag = "3")]
    pub read: bool,
    #[prost(bool, tag = "4")]
    pub write: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNamespaceRegistryPermissionAction {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(string, tag = "2")]
    pub contract_name: String,
}
