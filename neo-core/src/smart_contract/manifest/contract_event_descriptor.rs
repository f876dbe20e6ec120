use super::contract_parameter_definition::{validate_parameters, ContractParameterDefinition};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// An event a contract may emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractEventDescriptor {
    pub name: String,
    pub parameters: Vec<ContractParameterDefinition>,
}

impl ContractEventDescriptor {
    pub(crate) fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::invalid_manifest("event name cannot be empty"));
        }
        validate_parameters(&self.parameters)
    }
}
