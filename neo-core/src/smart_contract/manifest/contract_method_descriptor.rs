use super::contract_parameter_definition::{validate_parameters, ContractParameterDefinition};
use crate::error::{CoreError, CoreResult};
use neo_primitives::ContractParameterType;
use serde::{Deserialize, Serialize};

/// A method exposed in the contract ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMethodDescriptor {
    pub name: String,

    pub parameters: Vec<ContractParameterDefinition>,

    #[serde(rename = "returntype")]
    pub return_type: ContractParameterType,

    /// Entry point of the method in the contract script.
    pub offset: i32,

    /// Whether the method only reads state.
    pub safe: bool,
}

impl ContractMethodDescriptor {
    pub(crate) fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::invalid_manifest("method name cannot be empty"));
        }
        if self.offset < 0 {
            return Err(CoreError::invalid_manifest(format!(
                "method {} has negative offset",
                self.name
            )));
        }
        validate_parameters(&self.parameters)
    }
}
