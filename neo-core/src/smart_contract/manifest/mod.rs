//! Contract manifest: the JSON document declaring a contract's ABI,
//! groups, permissions and trusts.

mod contract_abi;
mod contract_event_descriptor;
mod contract_group;
mod contract_manifest;
mod contract_method_descriptor;
mod contract_parameter_definition;
mod contract_permission;
mod wildcard_container;

pub use contract_abi::ContractAbi;
pub use contract_event_descriptor::ContractEventDescriptor;
pub use contract_group::ContractGroup;
pub use contract_manifest::{ContractManifest, MAX_MANIFEST_LENGTH};
pub use contract_method_descriptor::ContractMethodDescriptor;
pub use contract_parameter_definition::ContractParameterDefinition;
pub use contract_permission::{ContractPermission, ContractPermissionDescriptor};
pub use wildcard_container::WildcardContainer;
